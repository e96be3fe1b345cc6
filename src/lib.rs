//! zombie-room - a bounded room of zombies with FIFO eviction
//!
//! A [`Room`] holds at most `capacity` zombies. When a zombie arrives at a
//! full room the oldest one is evicted first. Around the room sits a small
//! command language for scripts and an interactive shell.
//!
//! # Example
//!
//! ```
//! use zombie_room::Room;
//!
//! let mut room = Room::new(1);
//! room.add_zombie("Ugh Lee").unwrap();
//! room.add_zombie("Bloody Mary").unwrap();
//! assert_eq!(room.zombies(), vec!["Bloody Mary".to_string()]);
//!
//! let err = Room::parse("1.23").unwrap_err();
//! assert_eq!(err.report(), "Error: Parameter 'capacity' must be a positive integer");
//! ```

pub mod cli;
pub mod context;
pub mod engine;
pub mod error;
pub mod output;
pub mod parser;
pub mod repl;
pub mod room;
pub mod script;

pub use context::Context;
pub use engine::{execute_command, execute_command_with_context, ExecutionContext};
pub use error::{Result, RoomError};
pub use output::{format_output, OutputFormat};
pub use parser::{parse_command, parse_script, Command, Script};
pub use room::{Room, RoomSnapshot};
pub use script::{validate_script, ScriptResult, ScriptRunner};
