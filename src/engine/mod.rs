//! Execution engine for room commands

pub mod executor;

pub use executor::{
    execute_command, execute_command_with_context, explain, AddReport, ExecutionContext,
    ExecutionResult, ResultData,
};
