//! REPL module for interactive mode

#[cfg(feature = "repl")]
pub mod interactive;

#[cfg(feature = "repl")]
pub use interactive::run_repl;

#[cfg(not(feature = "repl"))]
pub fn run_repl(
    _exec_ctx: crate::engine::ExecutionContext,
    _room: Option<crate::room::Room>,
) -> crate::error::Result<()> {
    Err(crate::error::RoomError::Execution(
        "REPL not enabled. Rebuild with --features repl".to_string(),
    ))
}
