//! Error types for zombie-room

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoomError {
    /// The capacity literal is not a non-negative integer. Carries the literal.
    #[error("Parameter 'capacity' must be a positive integer")]
    InvalidCapacity(String),

    /// The zombie is not a non-empty string. Carries the rejected value.
    #[error("Wrong format. No zombie was added to the room since you tried to add \"{0}\".")]
    InvalidItem(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Execution error: {0}")]
    Execution(String),

    #[error("No room has been created. Use CREATE ROOM <capacity> first")]
    NoRoom,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RoomError {
    /// The line shown to users, e.g. `Error: Parameter 'capacity' must be a positive integer`
    pub fn report(&self) -> String {
        format!("Error: {}", self)
    }

    /// True for the two input-validation errors raised by [`crate::Room`] itself
    pub fn is_validation(&self) -> bool {
        matches!(self, RoomError::InvalidCapacity(_) | RoomError::InvalidItem(_))
    }
}

pub type Result<T> = std::result::Result<T, RoomError>;
