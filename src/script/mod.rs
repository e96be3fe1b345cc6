//! Script execution module for zombie-room
//!
//! Handles loading, validating, and executing .room script files.

pub mod runner;
pub mod validator;

pub use runner::{explain_script, load_script, ScriptResult, ScriptRunner, SCRIPT_EXTENSION};
pub use validator::{
    has_errors, has_warnings, validate_script, ScriptValidationError, ValidationOptions,
    ValidationSeverity,
};
