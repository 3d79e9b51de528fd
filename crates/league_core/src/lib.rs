//! Round-robin league engine
//!
//! This crate provides:
//! - Round-robin schedule generation (circle method, byes for odd fields)
//! - Result recording with cascading participant removal
//! - Per-participant statistics and head-to-head lookups
//! - Standings ordered by a user-defined chain of tie-break criteria
//! - A lenient save/load codec and a session that persists every change
//!
//! # Usage
//!
//! ```
//! use league_core::{Criterion, MemoryStore, Session};
//!
//! let mut session = Session::open(MemoryStore::new());
//! for name in ["Ajax", "Benfica", "Celtic"] {
//!     session.add_participant(name).unwrap();
//! }
//! session.generate_schedule().unwrap();
//! session.add_criterion(Criterion::HeadToHead);
//!
//! let first = session.state().matches()[0].id;
//! session.record_result(first, Some(2), Some(1));
//!
//! let table = session.standings();
//! assert_eq!(table.len(), 3);
//! ```

pub mod criteria;
mod error;
pub mod matches;
pub mod matrix;
pub mod persistence;
pub mod ranking;
pub mod schedule;
mod session;
pub mod state;
pub mod stats;
mod store;
pub mod types;

pub use criteria::{move_criterion, CriteriaChain, Criterion, Direction, UnknownCriterion};
pub use error::{LeagueError, Result};
pub use matches::Progress;
pub use matrix::{results_matrix, Cell, ResultsMatrix};
pub use ranking::{rank, Standing};
pub use schedule::generate_schedule;
pub use session::{Change, Session};
pub use state::TournamentState;
pub use stats::{compute_stats, head_to_head, HeadToHead, Stats};
pub use store::{MemoryStore, StateStore};
pub use types::{Match, MatchId, Outcome, Participant, ParticipantId};
