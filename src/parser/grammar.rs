//! Pest grammar parser for the room command language

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::error::{Result, RoomError};
use crate::parser::ast::*;

#[derive(Parser)]
#[grammar = "../grammar/room.pest"]
pub struct RoomParser;

/// Parse a single statement into an AST
pub fn parse_command(input: &str) -> Result<Command> {
    let pairs =
        RoomParser::parse(Rule::command, input).map_err(|e| RoomError::Parse(e.to_string()))?;

    let pair = pairs
        .into_iter()
        .next()
        .ok_or_else(|| RoomError::Parse("Empty input".to_string()))?;

    let statement = pair
        .into_inner()
        .find(|p| p.as_rule() == Rule::statement)
        .ok_or_else(|| RoomError::Parse("Expected statement".to_string()))?;

    parse_statement(statement)
}

/// Parse a script (multiple statements) into an AST
pub fn parse_script(input: &str) -> Result<Script> {
    let pairs =
        RoomParser::parse(Rule::script, input).map_err(|e| RoomError::Parse(e.to_string()))?;

    let pair = pairs
        .into_iter()
        .next()
        .ok_or_else(|| RoomError::Parse("Empty script".to_string()))?;

    let mut statements = Vec::new();

    for inner in pair.into_inner() {
        if inner.as_rule() == Rule::statement {
            statements.push(parse_statement(inner)?);
        }
    }

    Ok(Script { statements })
}

fn parse_statement(pair: Pair<Rule>) -> Result<Command> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| RoomError::Parse("Expected statement content".to_string()))?;

    match inner.as_rule() {
        Rule::explain_cmd => {
            let target = inner.into_inner().next().ok_or_else(|| {
                RoomError::Parse("Expected command after EXPLAIN".to_string())
            })?;
            Ok(Command::Explain(Box::new(parse_room_cmd(target)?)))
        }
        Rule::room_cmd => parse_room_cmd(inner),
        _ => Err(RoomError::Parse(format!(
            "Unexpected rule in statement: {:?}",
            inner.as_rule()
        ))),
    }
}

fn parse_room_cmd(pair: Pair<Rule>) -> Result<Command> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| RoomError::Parse("Expected room command".to_string()))?;

    match inner.as_rule() {
        Rule::create_room => {
            let capacity = inner
                .into_inner()
                .next()
                .ok_or_else(|| RoomError::Parse("Expected capacity in CREATE ROOM".to_string()))?;
            Ok(Command::CreateRoom(CreateRoom {
                capacity: capacity.as_str().to_string(),
            }))
        }
        Rule::add_cmd => {
            let zombies = inner
                .into_inner()
                .filter(|p| p.as_rule() == Rule::string)
                .map(parse_string)
                .collect();
            Ok(Command::Add(AddZombies { zombies }))
        }
        Rule::show_zombies => Ok(Command::ShowZombies),
        Rule::count_cmd => Ok(Command::Count),
        Rule::space_left => Ok(Command::SpaceLeft),
        Rule::is_full => Ok(Command::IsFull),
        Rule::status_cmd => Ok(Command::Status),
        _ => Err(RoomError::Parse(format!(
            "Unexpected rule: {:?}",
            inner.as_rule()
        ))),
    }
}

fn parse_string(pair: Pair<Rule>) -> String {
    let raw = pair
        .into_inner()
        .next()
        .map(|p| p.as_str())
        .unwrap_or_default();
    unescape(raw)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parses_back() {
        let cmd = Command::Add(AddZombies {
            zombies: vec![
                "Ugh Lee".to_string(),
                "carriage\rreturn".to_string(),
                "bell\u{1}\u{7f}".to_string(),
                "Bloody \"Mary\"".to_string(),
                "tab\tand\nnewline".to_string(),
                r"back\slash\".to_string(),
            ],
        });
        assert_eq!(parse_command(&cmd.to_string()).unwrap(), cmd);

        let explained = Command::Explain(Box::new(cmd));
        assert_eq!(parse_command(&explained.to_string()).unwrap(), explained);
    }

    #[test]
    fn test_parse_create_room() {
        let cmd = parse_command("CREATE ROOM 3").unwrap();
        match cmd {
            Command::CreateRoom(c) => assert_eq!(c.capacity, "3"),
            _ => panic!("Expected CreateRoom command"),
        }
    }

    #[test]
    fn test_parse_create_room_keeps_raw_capacity() {
        for raw in ["1.23", "-1", "abc", "1e2"] {
            let cmd = parse_command(&format!("create room {}", raw)).unwrap();
            match cmd {
                Command::CreateRoom(c) => assert_eq!(c.capacity, raw),
                _ => panic!("Expected CreateRoom command"),
            }
        }
    }

    #[test]
    fn test_parse_add_single() {
        let cmd = parse_command(r#"ADD "Ugh Lee""#).unwrap();
        match cmd {
            Command::Add(a) => assert_eq!(a.zombies, vec!["Ugh Lee".to_string()]),
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_parse_add_many() {
        let cmd = parse_command(r#"add "Ugh Lee", "Bloody Mary""#).unwrap();
        match cmd {
            Command::Add(a) => {
                assert_eq!(a.zombies, vec!["Ugh Lee".to_string(), "Bloody Mary".to_string()]);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_parse_add_empty_string() {
        let cmd = parse_command(r#"ADD """#).unwrap();
        match cmd {
            Command::Add(a) => assert_eq!(a.zombies, vec![String::new()]),
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_parse_add_escapes() {
        let cmd = parse_command(r#"ADD "Bloody \"Mary\"\t\\""#).unwrap();
        match cmd {
            Command::Add(a) => assert_eq!(a.zombies, vec!["Bloody \"Mary\"\t\\".to_string()]),
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_parse_queries() {
        assert_eq!(parse_command("SHOW ZOMBIES").unwrap(), Command::ShowZombies);
        assert_eq!(parse_command("count").unwrap(), Command::Count);
        assert_eq!(parse_command("COUNT ZOMBIES").unwrap(), Command::Count);
        assert_eq!(parse_command("Space Left").unwrap(), Command::SpaceLeft);
        assert_eq!(parse_command("IS FULL;").unwrap(), Command::IsFull);
        assert_eq!(parse_command("STATUS").unwrap(), Command::Status);
    }

    #[test]
    fn test_parse_explain() {
        let cmd = parse_command(r#"EXPLAIN ADD "Ugh Lee""#).unwrap();
        match cmd {
            Command::Explain(inner) => assert!(matches!(*inner, Command::Add(_))),
            _ => panic!("Expected Explain command"),
        }
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(parse_command("REMOVE ZOMBIE"), Err(RoomError::Parse(_))));
        assert!(parse_command("ADD Ugh").is_err());
        assert!(parse_command("CREATE ROOM").is_err());
        assert!(parse_command("").is_err());
    }

    #[test]
    fn test_parse_script_multiple_statements() {
        let script = parse_script(r#"CREATE ROOM 2; ADD "a"; ADD "b"; STATUS"#).unwrap();
        assert_eq!(script.statements.len(), 4);
    }

    #[test]
    fn test_parse_script_newlines_and_comments() {
        let script = parse_script(
            r#"
            -- set up a small room
            CREATE ROOM 1
            # first arrival
            ADD "Ugh Lee"
            // second arrival eats the first
            ADD "Bloody Mary" -- trailing comment

            SHOW ZOMBIES
        "#,
        )
        .unwrap();
        assert_eq!(script.statements.len(), 4);
        assert_eq!(script.statements[3], Command::ShowZombies);
    }

    #[test]
    fn test_parse_empty_script() {
        let script = parse_script("\n-- nothing here\n").unwrap();
        assert!(script.statements.is_empty());
    }
}
