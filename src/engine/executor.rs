//! Command executor

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::Context;
use crate::error::Result;
use crate::output::OutputFormat;
use crate::parser::{AddZombies, Command, CreateRoom};
use crate::room::{Room, RoomSnapshot};

/// Execution context containing runtime configuration
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// Report what ADD would do without touching the room
    pub dry_run: bool,
    pub output_format: OutputFormat,
    /// Echo each script statement to stderr before it runs
    pub verbose: bool,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self {
            dry_run: false,
            output_format: OutputFormat::Human,
            verbose: false,
        }
    }
}

/// Result of command execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub data: ResultData,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ResultData {
    /// Full room state (CREATE ROOM, STATUS)
    Room(RoomSnapshot),
    /// Outcome of an ADD
    Added(AddReport),
    Zombies(Vec<String>),
    Count(usize),
    SpaceLeft(usize),
    Full(bool),
    Explanation(String),
}

/// What an ADD did (or would do, in dry-run mode)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddReport {
    pub added: Vec<String>,
    pub evicted: Vec<String>,
    pub dry_run: bool,
    pub room: RoomSnapshot,
}

impl ExecutionResult {
    fn new(data: ResultData) -> Self {
        Self {
            data,
            message: None,
        }
    }

    fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Execute a parsed command (stateless - for single statements)
pub fn execute_command(cmd: &Command, ctx: &ExecutionContext) -> Result<ExecutionResult> {
    let mut context = Context::new();
    execute_command_with_context(cmd, ctx, &mut context)
}

/// Execute a parsed command with a stateful context
pub fn execute_command_with_context(
    cmd: &Command,
    ctx: &ExecutionContext,
    context: &mut Context,
) -> Result<ExecutionResult> {
    let result = match cmd {
        Command::CreateRoom(create) => execute_create_room(create, context),
        Command::Add(add) => execute_add(add, ctx, context),
        Command::ShowZombies => Ok(ExecutionResult::new(ResultData::Zombies(
            context.require_room()?.zombies(),
        ))),
        Command::Count => Ok(ExecutionResult::new(ResultData::Count(
            context.require_room()?.count(),
        ))),
        Command::SpaceLeft => Ok(ExecutionResult::new(ResultData::SpaceLeft(
            context.require_room()?.space_left(),
        ))),
        Command::IsFull => Ok(ExecutionResult::new(ResultData::Full(
            context.require_room()?.is_full(),
        ))),
        Command::Status => Ok(ExecutionResult::new(ResultData::Room(
            context.require_room()?.snapshot(),
        ))),
        Command::Explain(inner) => Ok(ExecutionResult::new(ResultData::Explanation(explain(
            inner,
        )))),
    }?;

    context.record(cmd);
    Ok(result)
}

fn execute_create_room(create: &CreateRoom, context: &mut Context) -> Result<ExecutionResult> {
    let room = Room::parse(&create.capacity)?;
    let snapshot = room.snapshot();

    let result = ExecutionResult::new(ResultData::Room(snapshot));
    match context.replace_room(room) {
        Some(old) => {
            debug!(dropped = old.count(), "replaced existing room");
            Ok(result.with_message(format!(
                "Replaced a room holding {} zombie(s)",
                old.count()
            )))
        }
        None => Ok(result),
    }
}

fn execute_add(
    add: &AddZombies,
    ctx: &ExecutionContext,
    context: &mut Context,
) -> Result<ExecutionResult> {
    let room = context.require_room_mut()?;

    // Work on a copy so a bad zombie halfway through leaves the room untouched
    let mut target = room.clone();
    let mut evicted = Vec::new();
    for zombie in &add.zombies {
        if let Some(gone) = target.push(zombie.as_str())? {
            evicted.push(gone);
        }
    }

    if !ctx.dry_run {
        *room = target.clone();
    }

    Ok(ExecutionResult::new(ResultData::Added(AddReport {
        added: add.zombies.clone(),
        evicted,
        dry_run: ctx.dry_run,
        room: target.snapshot(),
    })))
}

/// Describe what a command would do, without running it
pub fn explain(cmd: &Command) -> String {
    match cmd {
        Command::CreateRoom(c) => format!(
            "EXPLAIN: Would create a room with capacity '{}', replacing any current room",
            c.capacity
        ),
        Command::Add(a) => format!(
            "EXPLAIN: Would add {} zombie(s), evicting the oldest zombie whenever the room is full",
            a.zombies.len()
        ),
        Command::ShowZombies => "EXPLAIN: Would list the zombies, oldest first".to_string(),
        Command::Count => "EXPLAIN: Would count the zombies in the room".to_string(),
        Command::SpaceLeft => "EXPLAIN: Would report how many zombies still fit".to_string(),
        Command::IsFull => "EXPLAIN: Would check whether the room is full".to_string(),
        Command::Status => "EXPLAIN: Would show the full room status".to_string(),
        Command::Explain(inner) => explain(inner),
    }
}
