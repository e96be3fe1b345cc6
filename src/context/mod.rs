//! Context management for a room session
//!
//! The context keeps state across commands: the current room, if one has
//! been created, and a short history of executed statements. The history is
//! itself a [`Room`], so old statements fall out the same way old zombies do.

use crate::error::{Result, RoomError};
use crate::parser::Command;
use crate::room::Room;

/// Number of statements remembered by a context
pub const HISTORY_CAPACITY: usize = 100;

/// Represents the current session state
#[derive(Debug, Clone)]
pub struct Context {
    /// The room commands operate on
    room: Option<Room>,

    /// Most recent statements, oldest first
    history: Room,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            room: None,
            history: Room::new(HISTORY_CAPACITY),
        }
    }
}

impl Context {
    /// Create a new context with no room
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that already holds a room
    pub fn with_room(room: Room) -> Self {
        Self {
            room: Some(room),
            ..Self::default()
        }
    }

    pub fn room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    /// The current room, or [`RoomError::NoRoom`]
    pub fn require_room(&self) -> Result<&Room> {
        self.room.as_ref().ok_or(RoomError::NoRoom)
    }

    pub fn require_room_mut(&mut self) -> Result<&mut Room> {
        self.room.as_mut().ok_or(RoomError::NoRoom)
    }

    /// Install a new room, returning the one it replaces
    pub fn replace_room(&mut self, room: Room) -> Option<Room> {
        self.room.replace(room)
    }

    /// Remember an executed statement
    pub fn record(&mut self, cmd: &Command) {
        // Display output is never empty, so this cannot be rejected
        let _ = self.history.add_zombie(cmd.to_string());
    }

    /// Executed statements, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.zombies()
    }

    /// Drop the room and forget the history
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Short prompt fragment, e.g. `2/3` or `no room`
    pub fn prompt(&self) -> String {
        match &self.room {
            Some(room) => format!("{}/{}", room.count(), room.capacity()),
            None => "no room".to_string(),
        }
    }
}
