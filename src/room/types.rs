//! Room struct definition

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::capacity::{capacity_from_json, parse_capacity};
use crate::error::{RoomError, Result};

/// A fixed-capacity room that evicts its oldest zombie when a new one arrives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    capacity: usize,
    /// Oldest first; never longer than `capacity`
    zombies: VecDeque<String>,
}

/// Owned copy of everything observable about a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub capacity: usize,
    pub zombies: Vec<String>,
    pub count: usize,
    pub space_left: usize,
    pub is_full: bool,
}

impl Room {
    /// Create an empty room. A capacity of zero never retains a zombie.
    pub fn new(capacity: usize) -> Self {
        debug!(capacity, "room created");
        Self {
            capacity,
            zombies: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    /// Create a room from an untyped capacity literal
    pub fn parse(raw: &str) -> Result<Self> {
        parse_capacity(raw).map(Self::new)
    }

    /// Create a room from a dynamic JSON value
    pub fn from_json(value: &Value) -> Result<Self> {
        capacity_from_json(value).map(Self::new)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.zombies.len() == self.capacity
    }

    /// Add a zombie, evicting the oldest one if the room is full
    pub fn add_zombie(&mut self, zombie: impl Into<String>) -> Result<()> {
        self.push(zombie).map(|_| ())
    }

    /// Like [`Room::add_zombie`], but hands back the zombie that was evicted.
    ///
    /// In a zero-capacity room the arriving zombie is itself returned.
    pub fn push(&mut self, zombie: impl Into<String>) -> Result<Option<String>> {
        let zombie = zombie.into();
        if zombie.is_empty() {
            debug!(zombie = %zombie, "rejected zombie");
            return Err(RoomError::InvalidItem(zombie));
        }

        if self.capacity == 0 {
            debug!(zombie = %zombie, "room has no space, zombie discarded");
            return Ok(Some(zombie));
        }

        let evicted = if self.is_full() {
            self.zombies.pop_front()
        } else {
            None
        };
        self.zombies.push_back(zombie);

        if let Some(ref oldest) = evicted {
            debug!(evicted = %oldest, count = self.zombies.len(), "evicted oldest zombie");
        }

        Ok(evicted)
    }

    /// The zombie the next add would push out, if any
    pub fn would_evict(&self) -> Option<&str> {
        if self.capacity == 0 {
            return None;
        }
        if self.is_full() {
            self.zombies.front().map(String::as_str)
        } else {
            None
        }
    }

    /// Copy of the current zombies, oldest first
    pub fn zombies(&self) -> Vec<String> {
        self.zombies.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.zombies.iter().map(String::as_str)
    }

    pub fn count(&self) -> usize {
        self.zombies.len()
    }

    pub fn space_left(&self) -> usize {
        self.capacity - self.zombies.len()
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            capacity: self.capacity,
            zombies: self.zombies(),
            count: self.count(),
            space_left: self.space_left(),
            is_full: self.is_full(),
        }
    }
}
