//! Abstract Syntax Tree definitions for the room command language

use serde::{Deserialize, Serialize};

/// Top-level command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    CreateRoom(CreateRoom),
    Add(AddZombies),
    ShowZombies,
    Count,
    SpaceLeft,
    IsFull,
    Status,
    Explain(Box<Command>),
}

/// A script is a sequence of commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub statements: Vec<Command>,
}

/// CREATE ROOM <capacity>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoom {
    /// Raw capacity literal, validated at execution time
    pub capacity: String,
}

/// ADD "<zombie>", ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddZombies {
    pub zombies: Vec<String>,
}

impl Command {
    /// Whether the command reads or changes the current room
    pub fn needs_room(&self) -> bool {
        !matches!(self, Command::CreateRoom(_) | Command::Explain(_))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::CreateRoom(c) => write!(f, "CREATE ROOM {}", c.capacity),
            Command::Add(a) => {
                let zombies = a
                    .zombies
                    .iter()
                    .map(|z| quote(z))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "ADD {}", zombies)
            }
            Command::ShowZombies => write!(f, "SHOW ZOMBIES"),
            Command::Count => write!(f, "COUNT"),
            Command::SpaceLeft => write!(f, "SPACE LEFT"),
            Command::IsFull => write!(f, "IS FULL"),
            Command::Status => write!(f, "STATUS"),
            Command::Explain(inner) => write!(f, "EXPLAIN {}", inner),
        }
    }
}

/// Quote a zombie name using only the escapes the grammar reads back
fn quote(zombie: &str) -> String {
    let mut out = String::with_capacity(zombie.len() + 2);
    out.push('"');
    for c in zombie.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}
