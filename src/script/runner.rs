//! Script runner for executing .room files

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::context::Context;
use crate::engine::{execute_command_with_context, explain, ExecutionContext, ExecutionResult, ResultData};
use crate::error::{Result, RoomError};
use crate::output::format_output;
use crate::parser::{parse_script, Script};
use crate::room::Room;

/// File extension expected for room scripts
pub const SCRIPT_EXTENSION: &str = "room";

/// Result of script execution
#[derive(Debug)]
pub struct ScriptResult {
    /// All results from executed statements
    pub results: Vec<ExecutionResult>,
    /// Total statements executed
    pub statements_executed: usize,
    /// Whether the script completed successfully
    pub success: bool,
    /// Error message if script failed
    pub error: Option<String>,
}

/// Script runner that manages script execution
pub struct ScriptRunner {
    /// Execution context (dry_run, output format, etc.)
    exec_ctx: ExecutionContext,
    /// Session state (room, history)
    context: Context,
    /// Print each result to stdout as it is produced
    echo: bool,
}

impl ScriptRunner {
    /// Create a new script runner
    pub fn new(exec_ctx: ExecutionContext) -> Self {
        Self {
            exec_ctx,
            context: Context::new(),
            echo: true,
        }
    }

    /// Start the script with a room already in place
    pub fn with_room(mut self, room: Room) -> Self {
        self.context.replace_room(room);
        self
    }

    /// Keep results in the [`ScriptResult`] only, without printing them
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Load and run a script file
    pub fn run_file(&mut self, path: &Path) -> Result<ScriptResult> {
        let script = load_script(path)?;
        info!(path = %path.display(), statements = script.statements.len(), "running script");
        self.run_script(&script)
    }

    /// Run a parsed script, stopping at the first failing statement
    pub fn run_script(&mut self, script: &Script) -> Result<ScriptResult> {
        let mut results = Vec::new();
        let mut statements_executed = 0;

        for cmd in &script.statements {
            if self.exec_ctx.verbose {
                eprintln!("> {}", cmd);
            }

            match execute_command_with_context(cmd, &self.exec_ctx, &mut self.context) {
                Ok(result) => {
                    statements_executed += 1;

                    if self.echo {
                        println!("{}", format_output(&result, &self.exec_ctx.output_format));
                    }

                    results.push(result);
                }
                Err(e) => {
                    warn!(statement = statements_executed + 1, error = %e, "script stopped");
                    return Ok(ScriptResult {
                        results,
                        statements_executed,
                        success: false,
                        error: Some(e.report()),
                    });
                }
            }
        }

        info!(statements_executed, "script finished");
        Ok(ScriptResult {
            results,
            statements_executed,
            success: true,
            error: None,
        })
    }

    /// Session state after the statements run so far
    pub fn context(&self) -> &Context {
        &self.context
    }
}

/// Read and parse a script file, checking its extension before touching the disk
pub fn load_script(path: &Path) -> Result<Script> {
    if path.extension().is_none_or(|e| e != SCRIPT_EXTENSION) {
        return Err(RoomError::Execution(format!(
            "Script file must have .{} extension: {}",
            SCRIPT_EXTENSION,
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    parse_script(&content)
}

/// Explain a script without executing
pub fn explain_script(script: &Script) -> Vec<String> {
    script
        .statements
        .iter()
        .enumerate()
        .map(|(i, cmd)| {
            let text = explain(cmd);
            let text = text.strip_prefix("EXPLAIN: ").unwrap_or(&text);
            format!("{}. {} -- {}", i + 1, cmd, text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_run_script_fifo() {
        let script =
            parse_script(r#"CREATE ROOM 1; ADD "Ugh Lee"; ADD "Bloody Mary"; SHOW ZOMBIES"#)
                .unwrap();
        let mut runner = ScriptRunner::new(ExecutionContext::default()).quiet();
        let result = runner.run_script(&script).unwrap();

        assert!(result.success);
        assert_eq!(result.statements_executed, 4);
        match &result.results[3].data {
            ResultData::Zombies(z) => assert_eq!(z, &vec!["Bloody Mary".to_string()]),
            _ => panic!("Expected Zombies result"),
        }
    }

    #[test]
    fn test_run_script_stops_on_bad_zombie() {
        let script = parse_script(r#"CREATE ROOM 1; ADD ""; COUNT"#).unwrap();
        let mut runner = ScriptRunner::new(ExecutionContext::default()).quiet();
        let result = runner.run_script(&script).unwrap();

        assert!(!result.success);
        assert_eq!(result.statements_executed, 1);
        assert_eq!(
            result.error.as_deref(),
            Some("Error: Wrong format. No zombie was added to the room since you tried to add \"\".")
        );
        assert_eq!(runner.context().require_room().unwrap().count(), 0);
    }

    #[test]
    fn test_with_room() {
        let script = parse_script(r#"ADD "Ugh Lee", "Bloody Mary"; SPACE LEFT"#).unwrap();
        let mut runner = ScriptRunner::new(ExecutionContext::default())
            .with_room(Room::new(3))
            .quiet();
        let result = runner.run_script(&script).unwrap();
        assert!(result.success);
        assert!(matches!(result.results[1].data, ResultData::SpaceLeft(1)));
    }

    #[test]
    fn test_run_file_requires_extension() {
        let mut runner = ScriptRunner::new(ExecutionContext::default()).quiet();
        let err = runner.run_file(Path::new("script.txt")).unwrap_err();
        assert!(matches!(err, RoomError::Execution(_)));
    }

    #[test]
    fn test_load_script_checks_extension_first() {
        // A missing file with the wrong extension reports the extension, not an io error
        let err = load_script(Path::new("does-not-exist.txt")).unwrap_err();
        assert!(matches!(err, RoomError::Execution(ref m) if m.contains(".room extension")));
    }

    #[test]
    fn test_run_file() {
        let mut file = tempfile::Builder::new().suffix(".room").tempfile().unwrap();
        writeln!(file, "CREATE ROOM 3").unwrap();
        writeln!(file, "ADD \"Ugh Lee\"").unwrap();
        writeln!(file, "ADD \"Bloody Mary\"").unwrap();
        file.flush().unwrap();

        let mut runner = ScriptRunner::new(ExecutionContext::default()).quiet();
        let result = runner.run_file(file.path()).unwrap();
        assert!(result.success);
        assert_eq!(runner.context().require_room().unwrap().space_left(), 1);
    }

    #[test]
    fn test_run_missing_file() {
        let missing: NamedTempFile = tempfile::Builder::new().suffix(".room").tempfile().unwrap();
        let path = missing.path().to_path_buf();
        drop(missing);

        let mut runner = ScriptRunner::new(ExecutionContext::default()).quiet();
        assert!(matches!(runner.run_file(&path), Err(RoomError::Io(_))));
    }

    #[test]
    fn test_explain_script() {
        let script = parse_script(r#"CREATE ROOM 2; ADD "a", "b""#).unwrap();
        let explanations = explain_script(&script);
        assert_eq!(explanations.len(), 2);
        assert!(explanations[0].starts_with("1. CREATE ROOM 2"));
        assert!(explanations[1].contains("add 2 zombie(s)"));
    }
}
