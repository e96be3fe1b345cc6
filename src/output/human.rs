//! Human-readable output formatting

use crate::engine::{AddReport, ExecutionResult, ResultData};
use crate::room::RoomSnapshot;

pub fn format_human(result: &ExecutionResult) -> String {
    let body = match &result.data {
        ResultData::Room(snapshot) => format_room(snapshot),
        ResultData::Added(report) => format_added(report),
        ResultData::Zombies(zombies) => {
            if zombies.is_empty() {
                "The room is empty".to_string()
            } else {
                format_zombie_list(zombies)
            }
        }
        ResultData::Count(count) => format!("Zombies: {}", count),
        ResultData::SpaceLeft(space) => format!("Space left: {}", space),
        ResultData::Full(full) => format!("Full: {}", yes_no(*full)),
        ResultData::Explanation(explanation) => explanation.clone(),
    };

    match &result.message {
        Some(message) if !body.is_empty() => format!("{}\n{}", message, body),
        Some(message) => message.clone(),
        None => body,
    }
}

fn format_room(snapshot: &RoomSnapshot) -> String {
    let mut output = format!(
        "Room\n\
         ----\n\
         Capacity:   {}\n\
         Zombies:    {}\n\
         Space left: {}\n\
         Full:       {}",
        snapshot.capacity,
        snapshot.count,
        snapshot.space_left,
        yes_no(snapshot.is_full)
    );

    if !snapshot.zombies.is_empty() {
        output.push_str("\n\n");
        output.push_str(&format_zombie_list(&snapshot.zombies));
    }

    output
}

fn format_added(report: &AddReport) -> String {
    let mut output = String::new();
    if report.dry_run {
        output.push_str("[DRY RUN] No changes were made\n\n");
    }

    let verb = if report.dry_run { "Would add" } else { "Added" };
    for zombie in &report.added {
        output.push_str(&format!("{}: {}\n", verb, zombie));
    }

    let verb = if report.dry_run { "Would evict" } else { "Evicted" };
    for zombie in &report.evicted {
        output.push_str(&format!("{}: {}\n", verb, zombie));
    }

    output.push_str(&format!(
        "Room: {}/{} ({} left)",
        report.room.count, report.room.capacity, report.room.space_left
    ));
    output
}

fn format_zombie_list(zombies: &[String]) -> String {
    let width = zombies.len().to_string().len();
    zombies
        .iter()
        .enumerate()
        .map(|(i, zombie)| format!("  {:>width$}. {}", i + 1, zombie, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
