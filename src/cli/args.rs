//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable that can supply `--capacity`
pub const CAPACITY_ENV: &str = "ZOMBIE_ROOM_CAPACITY";

#[derive(Parser, Debug)]
#[command(name = "zombie-room")]
#[command(author, version, about = "Keep a bounded room of zombies; the oldest one goes when it fills up", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Show what ADD (or fill) would do without changing the room
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging and script statements on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum SubCommand {
    /// Create a room, add zombies in order, and print its status
    Fill {
        /// Room capacity (a non-negative integer)
        #[arg(long, short, env = CAPACITY_ENV, allow_hyphen_values = true)]
        capacity: String,

        /// Zombies to add, oldest first
        zombies: Vec<String>,
    },

    /// Run a room script file (.room)
    Run {
        /// Path to the .room script file
        file: PathBuf,

        /// Start the script with a room of this capacity
        #[arg(long, short, env = CAPACITY_ENV, allow_hyphen_values = true)]
        capacity: Option<String>,
    },

    /// Explain a script or statement without executing
    Explain {
        /// Statement or path to .room script file
        input: String,
    },

    /// Start interactive REPL mode
    Repl {
        /// Start with a room of this capacity
        #[arg(long, short, env = CAPACITY_ENV, allow_hyphen_values = true)]
        capacity: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_fill() {
        let args = Args::try_parse_from([
            "zombie-room",
            "--json",
            "fill",
            "--capacity",
            "1",
            "Ugh Lee",
            "Bloody Mary",
        ])
        .unwrap();
        assert!(args.json);
        match args.command {
            SubCommand::Fill { capacity, zombies } => {
                assert_eq!(capacity, "1");
                assert_eq!(zombies, vec!["Ugh Lee".to_string(), "Bloody Mary".to_string()]);
            }
            _ => panic!("Expected Fill subcommand"),
        }
    }

    #[test]
    fn test_negative_capacity_reaches_validation() {
        let args =
            Args::try_parse_from(["zombie-room", "fill", "--capacity", "-1"]).unwrap();
        match args.command {
            SubCommand::Fill { capacity, .. } => assert_eq!(capacity, "-1"),
            _ => panic!("Expected Fill subcommand"),
        }
    }
}
