//! Error type shared by the league engine and its stores

use thiserror::Error;

/// Errors surfaced by league operations.
///
/// Stale ids (a match or participant that no longer exists) are not errors:
/// the mutators treat them as no-ops and report it through their return value.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("at least 2 participants are required to generate a schedule (found {found})")]
    InsufficientParticipants { found: usize },

    #[error("participant name must not be empty")]
    EmptyName,

    #[error("participant `{0}` already exists")]
    DuplicateName(String),

    #[error("failed to serialize tournament state: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = LeagueError> = std::result::Result<T, E>;
