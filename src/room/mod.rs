//! Room module: the bounded, insertion-ordered container of zombies
//!
//! A room holds at most `capacity` zombies. Adding a zombie to a full room
//! evicts the oldest one first, so the room is never exceeded:
//! - `capacity` is fixed at creation and validated by [`parse_capacity`]
//! - zombies are kept oldest first
//! - invalid input is returned as a [`crate::RoomError`], never a panic

mod capacity;
mod types;

pub use capacity::{capacity_from_json, parse_capacity};
pub use types::{Room, RoomSnapshot};
