//! Script validation for room scripts
//!
//! Walks a parsed script before execution and flags statements that are
//! certain to fail (no room yet, bad capacity) or that are probably mistakes.

use crate::parser::{Command, Script};
use crate::room::parse_capacity;

/// Problems found while validating a script
#[derive(Debug, Clone)]
pub struct ScriptValidationError {
    /// 1-based statement number
    pub statement: Option<usize>,
    pub message: String,
    pub severity: ValidationSeverity,
}

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

impl std::fmt::Display for ScriptValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            ValidationSeverity::Error => "ERROR",
            ValidationSeverity::Warning => "WARNING",
        };
        if let Some(statement) = self.statement {
            write!(f, "{} (statement {}): {}", prefix, statement, self.message)
        } else {
            write!(f, "{}: {}", prefix, self.message)
        }
    }
}

/// Validation options
#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    /// A room exists before the first statement runs (e.g. `--capacity`)
    pub room_precreated: bool,
}

/// Validate a script for correctness
pub fn validate_script(script: &Script, options: &ValidationOptions) -> Vec<ScriptValidationError> {
    let mut errors = Vec::new();
    let mut has_room = options.room_precreated;

    for (i, cmd) in script.statements.iter().enumerate() {
        let statement = Some(i + 1);

        if cmd.needs_room() && !has_room {
            errors.push(ScriptValidationError {
                statement,
                message: format!(
                    "{} runs before any room exists. Add CREATE ROOM <capacity> first",
                    cmd
                ),
                severity: ValidationSeverity::Error,
            });
        }

        match cmd {
            Command::CreateRoom(create) => match parse_capacity(&create.capacity) {
                Ok(0) => {
                    has_room = true;
                    errors.push(ScriptValidationError {
                        statement,
                        message: "A room with capacity 0 never keeps a zombie".to_string(),
                        severity: ValidationSeverity::Warning,
                    });
                }
                Ok(_) => has_room = true,
                Err(e) => errors.push(ScriptValidationError {
                    statement,
                    message: format!("{} (got '{}')", e, create.capacity),
                    severity: ValidationSeverity::Error,
                }),
            },
            Command::Add(add) => {
                if add.zombies.iter().any(String::is_empty) {
                    errors.push(ScriptValidationError {
                        statement,
                        message: "ADD with an empty zombie name will be rejected".to_string(),
                        severity: ValidationSeverity::Warning,
                    });
                }
            }
            // Nothing else can fail once a room exists
            _ => {}
        }
    }

    errors
}

/// Check if a script has any validation errors (not just warnings)
pub fn has_errors(errors: &[ScriptValidationError]) -> bool {
    errors
        .iter()
        .any(|e| e.severity == ValidationSeverity::Error)
}

/// Check if a script has any validation warnings
pub fn has_warnings(errors: &[ScriptValidationError]) -> bool {
    errors
        .iter()
        .any(|e| e.severity == ValidationSeverity::Warning)
}
