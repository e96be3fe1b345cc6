//! Interactive REPL implementation

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::context::Context;
use crate::engine::{execute_command_with_context, ExecutionContext};
use crate::error::{Result, RoomError};
use crate::output::format_output;
use crate::parser::parse_command;
use crate::room::Room;

pub fn run_repl(exec_ctx: ExecutionContext, room: Option<Room>) -> Result<()> {
    let mut rl = DefaultEditor::new().map_err(|e| RoomError::Execution(e.to_string()))?;

    println!("zombie-room v{} - Interactive Mode", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for commands, 'exit' to quit\n");

    let mut context = match room {
        Some(room) => Context::with_room(room),
        None => Context::new(),
    };

    loop {
        let prompt = format!("room [{}]> ", context.prompt());

        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match line.to_lowercase().as_str() {
                    "exit" | "quit" | "q" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" | "?" => {
                        print_help();
                        continue;
                    }
                    "clear" | "cls" => {
                        print!("\x1B[2J\x1B[1;1H");
                        continue;
                    }
                    "history" => {
                        for (i, entry) in context.history().iter().enumerate() {
                            println!("  {:>3}  {}", i + 1, entry);
                        }
                        println!();
                        continue;
                    }
                    "reset" => {
                        context.reset();
                        println!("Room dropped\n");
                        continue;
                    }
                    _ => {}
                }

                let _ = rl.add_history_entry(line);

                match parse_command(&expand_shortcuts(line)) {
                    Ok(cmd) => match execute_command_with_context(&cmd, &exec_ctx, &mut context) {
                        Ok(result) => {
                            let output = format_output(&result, &exec_ctx.output_format);
                            if !output.is_empty() {
                                println!("{}\n", output);
                            }
                        }
                        Err(e) => eprintln!("{}\n", e.report()),
                    },
                    Err(e) => eprintln!("{}\n", e.report()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

/// Expand common shortcuts to full commands
fn expand_shortcuts(input: &str) -> String {
    let lower = input.to_lowercase();

    // `add Ugh Lee` without quotes
    if lower.starts_with("add ") && !input[4..].trim_start().starts_with('"') {
        let name = input[4..].trim().replace('\\', "\\\\").replace('"', "\\\"");
        return format!("ADD \"{}\"", name);
    }
    if let Some(capacity) = lower.strip_prefix("new ") {
        return format!("CREATE ROOM {}", capacity.trim());
    }

    match lower.as_str() {
        "ls" | "zombies" => "SHOW ZOMBIES".to_string(),
        "full" => "IS FULL".to_string(),
        "space" => "SPACE LEFT".to_string(),
        "st" => "STATUS".to_string(),
        _ => input.to_string(),
    }
}

fn print_help() {
    println!(
        r#"
zombie-room Commands
====================

ROOM:
  CREATE ROOM 3                   - Replace the current room with an empty one
  ADD "Ugh Lee"                   - Add a zombie (evicts the oldest when full)
  ADD "Ugh Lee", "Bloody Mary"    - Add several zombies in order

QUERIES:
  SHOW ZOMBIES                    - List zombies, oldest first
  COUNT                           - Number of zombies
  SPACE LEFT                      - How many more fit
  IS FULL                         - Whether the room is full
  STATUS                          - Everything above at once

OTHER:
  EXPLAIN <command>               - Show what a command would do

SHORTCUTS:
  new 3                           - Same as CREATE ROOM 3
  add Ugh Lee                     - Same as ADD "Ugh Lee"
  ls, zombies                     - Same as SHOW ZOMBIES
  full                            - Same as IS FULL
  space                           - Same as SPACE LEFT
  st                              - Same as STATUS

REPL Commands:
  help, ?                         - Show this help
  history                         - Show executed statements
  reset                           - Drop the room and history
  clear, cls                      - Clear screen
  exit, quit, q                   - Exit REPL
"#
    );
}
