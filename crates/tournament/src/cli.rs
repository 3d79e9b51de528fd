//! Command line parsing and dispatch
//!
//! Arguments are parsed into a [`Command`] first and then executed against a
//! [`Session`], so the whole front end can be driven from tests with an
//! in-memory store.

use league_core::{
    schedule::round_count, Criterion, LeagueError, MatchId, ParticipantId, Session, StateStore,
    UnknownCriterion,
};
use std::path::PathBuf;
use thiserror::Error;

use crate::report;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("invalid score `{0}`: expected a non-negative whole number or `-`")]
    InvalidScore(String),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error(transparent)]
    UnknownCriterion(#[from] UnknownCriterion),

    #[error("no participant with id {0}")]
    UnknownParticipant(ParticipantId),

    #[error("no match with id {0}")]
    UnknownMatch(MatchId),

    #[error("no criterion at position {0}")]
    InvalidPosition(usize),

    #[error(transparent)]
    League(#[from] LeagueError),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Subcommands of `criteria`. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaCommand {
    List,
    Add(Criterion),
    Remove(usize),
    Move { from: usize, to: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Rename { id: ParticipantId, name: String },
    Remove(ParticipantId),
    Title(String),
    Criteria(CriteriaCommand),
    Generate,
    Record {
        id: MatchId,
        team1_score: Option<u32>,
        team2_score: Option<u32>,
    },
    Schedule,
    Matrix,
    Standings { json: bool },
    Participants,
    Reset { confirmed: bool },
    Help,
}

/// Options accepted ahead of the command word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub data: Option<PathBuf>,
}

impl GlobalOptions {
    /// Pull `--config` and `--data` off the front of `args`, returning the
    /// command and its arguments untouched
    pub fn extract(args: Vec<String>) -> Result<(Self, Vec<String>), CliError> {
        let mut options = Self::default();
        let mut iter = args.into_iter();

        while let Some(arg) = iter.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
                _ => (arg.clone(), None),
            };
            let slot = match flag.as_str() {
                "--config" => &mut options.config,
                "--data" => &mut options.data,
                // The command word: everything from here on belongs to it
                _ => return Ok((options, std::iter::once(arg).chain(iter).collect())),
            };
            let value = inline
                .or_else(|| iter.next())
                .ok_or_else(|| CliError::Usage(format!("{flag} needs a path")))?;
            *slot = Some(PathBuf::from(value));
        }

        Ok((options, Vec::new()))
    }
}

fn number<T: std::str::FromStr>(arg: &str) -> Result<T, CliError> {
    arg.trim()
        .parse()
        .map_err(|_| CliError::InvalidNumber(arg.to_string()))
}

/// `-` or an empty string leaves the side unscored
pub fn parse_score(arg: &str) -> Result<Option<u32>, CliError> {
    let arg = arg.trim();
    if arg.is_empty() || arg == "-" {
        return Ok(None);
    }
    match arg.parse::<i64>() {
        Ok(value) if value >= 0 => u32::try_from(value)
            .map(Some)
            .map_err(|_| CliError::InvalidScore(arg.to_string())),
        _ => Err(CliError::InvalidScore(arg.to_string())),
    }
}

fn position(arg: &str) -> Result<usize, CliError> {
    match number::<usize>(arg)? {
        0 => Err(CliError::InvalidPosition(0)),
        n => Ok(n),
    }
}

fn expect_args(command: &str, args: &[String], count: usize) -> Result<(), CliError> {
    if args.len() < count {
        return Err(CliError::Usage(format!(
            "`{command}` needs {count} argument{}",
            if count == 1 { "" } else { "s" }
        )));
    }
    Ok(())
}

fn parse_criteria(args: &[String]) -> Result<CriteriaCommand, CliError> {
    let Some(sub) = args.first() else {
        return Ok(CriteriaCommand::List);
    };
    let rest = &args[1..];
    match sub.as_str() {
        "list" | "ls" => Ok(CriteriaCommand::List),
        "add" => {
            expect_args("criteria add", rest, 1)?;
            Ok(CriteriaCommand::Add(rest[0].parse()?))
        }
        "remove" | "rm" => {
            expect_args("criteria remove", rest, 1)?;
            Ok(CriteriaCommand::Remove(position(&rest[0])?))
        }
        "move" | "mv" => {
            expect_args("criteria move", rest, 2)?;
            Ok(CriteriaCommand::Move {
                from: position(&rest[0])?,
                to: position(&rest[1])?,
            })
        }
        other => Err(CliError::Usage(format!("unknown criteria command `{other}`"))),
    }
}

/// Parse the arguments following the program name and global options
pub fn parse_command(args: &[String]) -> Result<Command, CliError> {
    let Some(name) = args.first() else {
        return Ok(Command::Help);
    };
    let rest = &args[1..];

    let command = match name.as_str() {
        "add" => {
            expect_args("add", rest, 1)?;
            Command::Add(rest.join(" "))
        }
        "rename" => {
            expect_args("rename", rest, 2)?;
            Command::Rename {
                id: number(&rest[0])?,
                name: rest[1..].join(" "),
            }
        }
        "remove" | "rm" => {
            expect_args("remove", rest, 1)?;
            Command::Remove(number(&rest[0])?)
        }
        "title" => Command::Title(rest.join(" ")),
        "criteria" => Command::Criteria(parse_criteria(rest)?),
        "generate" => Command::Generate,
        "record" => {
            expect_args("record", rest, 3)?;
            Command::Record {
                id: number(&rest[0])?,
                team1_score: parse_score(&rest[1])?,
                team2_score: parse_score(&rest[2])?,
            }
        }
        "schedule" => Command::Schedule,
        "matrix" => Command::Matrix,
        "standings" | "table" => Command::Standings {
            json: rest.iter().any(|a| a == "--json"),
        },
        "participants" | "list" => Command::Participants,
        "reset" => Command::Reset {
            confirmed: rest.iter().any(|a| a == "--yes" || a == "-y"),
        },
        "help" | "--help" | "-h" => Command::Help,
        other => return Err(CliError::Usage(format!("unknown command `{other}`"))),
    };
    Ok(command)
}

/// Run `command` against `session` and return what should be printed
pub fn execute<S: StateStore>(session: &mut Session<S>, command: Command) -> Result<String, CliError> {
    let output = match command {
        Command::Add(name) => {
            let id = session.add_participant(&name)?;
            format!("Added #{id} {}", name.trim())
        }
        Command::Rename { id, name } => {
            if name.trim().is_empty() {
                return Err(CliError::Usage("`rename` needs a new name".to_string()));
            }
            if !session.rename_participant(id, &name) {
                return Err(CliError::UnknownParticipant(id));
            }
            format!("Renamed #{id} to {}", name.trim())
        }
        Command::Remove(id) => {
            let removed = session
                .remove_participant(id)
                .ok_or(CliError::UnknownParticipant(id))?;
            format!("Removed #{id} and {removed} match(es)")
        }
        Command::Title(title) => {
            session.set_title(&title);
            match session.state().title() {
                "" => "Title cleared".to_string(),
                title => format!("Title set to {title}"),
            }
        }
        Command::Criteria(sub) => return execute_criteria(session, sub),
        Command::Generate => {
            let matches = session.generate_schedule()?;
            let rounds = round_count(session.state().participants().len());
            format!("Scheduled {matches} matches over {rounds} rounds")
        }
        Command::Record {
            id,
            team1_score,
            team2_score,
        } => {
            if !session.record_result(id, team1_score, team2_score) {
                return Err(CliError::UnknownMatch(id));
            }
            let state = session.state();
            match state.find_match(id) {
                Some(m) => {
                    let name = |pid| state.participant(pid).map_or("?", |p| p.name.as_str());
                    let side = |s: Option<u32>| s.map_or_else(|| "-".to_string(), |s| s.to_string());
                    format!(
                        "Recorded #{id}: {} {} - {} {}",
                        name(m.team1_id),
                        side(m.team1_score),
                        side(m.team2_score),
                        name(m.team2_id)
                    )
                }
                None => format!("Recorded #{id}"),
            }
        }
        Command::Schedule => report::schedule_report(session.state()),
        Command::Matrix => report::matrix_report(session.state()),
        Command::Standings { json: true } => serde_json::to_string_pretty(&session.standings())?,
        Command::Standings { json: false } => report::standings_report(session.state()),
        Command::Participants => report::participants_report(session.state()),
        Command::Reset { confirmed: false } => {
            return Err(CliError::Usage(
                "`reset` discards the whole league; run `reset --yes` to confirm".to_string(),
            ))
        }
        Command::Reset { confirmed: true } => {
            session.reset();
            "League reset".to_string()
        }
        Command::Help => usage(),
    };
    Ok(output)
}

fn execute_criteria<S: StateStore>(
    session: &mut Session<S>,
    command: CriteriaCommand,
) -> Result<String, CliError> {
    match command {
        CriteriaCommand::List => {}
        CriteriaCommand::Add(criterion) => {
            if !session.add_criterion(criterion) {
                return Ok(format!("{} is already in the chain", criterion.label()));
            }
        }
        CriteriaCommand::Remove(pos) => {
            session
                .remove_criterion(pos - 1)
                .ok_or(CliError::InvalidPosition(pos))?;
        }
        CriteriaCommand::Move { from, to } => {
            if from > session.state().criteria().len() {
                return Err(CliError::InvalidPosition(from));
            }
            session.move_criterion(from - 1, to - 1);
        }
    }
    Ok(report::criteria_report(session.state()))
}

pub fn usage() -> String {
    let mut text = String::from("Round-robin league manager\n\n");
    text.push_str("Usage:\n");
    text.push_str("  tournament [--config <path>] [--data <path>] <command>\n\n");
    text.push_str("Commands:\n");
    for (command, about) in [
        ("add <name>", "Add a participant"),
        ("rename <id> <name>", "Rename a participant"),
        ("remove <id>", "Remove a participant and their matches"),
        ("title [text]", "Set the league title (empty clears it)"),
        ("criteria [list]", "Show the ranking criteria"),
        ("criteria add <key>", "Append a criterion"),
        ("criteria remove <pos>", "Remove the criterion at a position"),
        ("criteria move <from> <to>", "Move a criterion"),
        ("generate", "Generate a fresh round-robin schedule"),
        ("record <match> <s1|-> <s2|->", "Record or clear a result"),
        ("schedule", "Show matches by round"),
        ("matrix", "Show the results matrix"),
        ("standings [--json]", "Show the standings table"),
        ("participants", "List participants"),
        ("reset --yes", "Discard the whole league"),
        ("help", "Show this message"),
    ] {
        text.push_str(&format!("  {command:<30} {about}\n"));
    }
    text.push_str("\nCriteria keys: ");
    let keys: Vec<&str> = Criterion::ALL.iter().map(|c| c.key()).collect();
    text.push_str(&keys.join(", "));
    text.push('\n');
    text
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
