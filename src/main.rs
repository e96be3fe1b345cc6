//! zombie-room CLI - fill a bounded room of zombies from the command line

use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zombie_room::cli::{Args, SubCommand};
use zombie_room::engine::{execute_command, AddReport, ExecutionResult, ResultData};
use zombie_room::script::{
    explain_script, has_errors, load_script, validate_script, ScriptRunner, ValidationOptions,
    ValidationSeverity, SCRIPT_EXTENSION,
};
use zombie_room::{format_output, parse_command, ExecutionContext, OutputFormat, Room, RoomError};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("{}", e.report());
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for --json
fn init_logging(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run(args: Args) -> zombie_room::Result<()> {
    let ctx = ExecutionContext {
        dry_run: args.dry_run,
        output_format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        },
        verbose: args.verbose,
    };

    match args.command {
        SubCommand::Fill { capacity, zombies } => {
            let mut room = Room::parse(&capacity)?;
            let mut evicted = Vec::new();

            for zombie in &zombies {
                if let Some(gone) = room.push(zombie.as_str())? {
                    evicted.push(gone);
                }
            }

            // The room only lives for this invocation, so a dry run reports the outcome as a plan
            let data = if ctx.dry_run {
                ResultData::Added(AddReport {
                    added: zombies,
                    evicted,
                    dry_run: true,
                    room: room.snapshot(),
                })
            } else {
                if args.verbose {
                    for gone in &evicted {
                        eprintln!("Evicted: {}", gone);
                    }
                }
                ResultData::Room(room.snapshot())
            };

            let result = ExecutionResult {
                data,
                message: None,
            };
            println!("{}", format_output(&result, &ctx.output_format));
            Ok(())
        }

        SubCommand::Run { file, capacity } => {
            let script = load_script(&file)?;

            let room = capacity.as_deref().map(Room::parse).transpose()?;
            let validation_opts = ValidationOptions {
                room_precreated: room.is_some(),
            };
            let validation_errors = validate_script(&script, &validation_opts);

            for err in validation_errors
                .iter()
                .filter(|e| e.severity == ValidationSeverity::Warning)
            {
                eprintln!("Warning: {}", err);
            }

            if has_errors(&validation_errors) {
                for err in validation_errors
                    .iter()
                    .filter(|e| e.severity == ValidationSeverity::Error)
                {
                    eprintln!("{}", err);
                }
                return Err(RoomError::Execution(
                    "Script validation failed".to_string(),
                ));
            }

            let mut runner = ScriptRunner::new(ctx);
            if let Some(room) = room {
                runner = runner.with_room(room);
            }
            let result = runner.run_script(&script)?;

            if !result.success {
                if let Some(err) = result.error {
                    eprintln!("{}", err);
                }
                return Err(RoomError::Execution(format!(
                    "Script stopped after {} statement(s)",
                    result.statements_executed
                )));
            }

            if args.verbose {
                eprintln!(
                    "--- Script completed: {} statements executed ---",
                    result.statements_executed
                );
            }

            Ok(())
        }

        SubCommand::Explain { input } => {
            let path = std::path::Path::new(&input);

            if path.exists() && path.extension().is_some_and(|e| e == SCRIPT_EXTENSION) {
                let script = load_script(path)?;

                println!("Script: {}", path.display());
                println!("Statements: {}\n", script.statements.len());

                for explanation in explain_script(&script) {
                    println!("{}", explanation);
                }

                let validation_errors = validate_script(&script, &ValidationOptions::default());
                if !validation_errors.is_empty() {
                    println!("\nValidation Notes:");
                    for err in &validation_errors {
                        println!("  - {}", err);
                    }
                }
            } else {
                let cmd = parse_command(&input)?;
                let result = execute_command(
                    &zombie_room::Command::Explain(Box::new(cmd)),
                    &ExecutionContext::default(),
                )?;
                println!("{}", format_output(&result, &ctx.output_format));
            }

            Ok(())
        }

        SubCommand::Repl { capacity } => {
            let room = capacity.as_deref().map(Room::parse).transpose()?;
            zombie_room::repl::run_repl(ctx, room)
        }
    }
}
