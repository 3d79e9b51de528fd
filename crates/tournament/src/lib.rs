//! Round-robin league manager
//!
//! This crate provides the pieces around the `league_core` engine:
//! - A JSON file store so a league survives between runs
//! - Plain-text reports for participants, schedule, results matrix and standings
//! - Configuration from `league.toml`
//! - Command parsing and dispatch for the `tournament` binary
//!
//! # Usage
//!
//! ```bash
//! # Enter a league and generate its schedule
//! cargo run -p tournament -- add "Ajax"
//! cargo run -p tournament -- add "Benfica"
//! cargo run -p tournament -- generate
//!
//! # Record match #1 as 2-1 and show the table
//! cargo run -p tournament -- record 1 2 1
//! cargo run -p tournament -- standings
//! ```

pub mod cli;
mod config;
mod file_store;
pub mod report;

pub use cli::{execute, parse_command, usage, CliError, Command, CriteriaCommand, GlobalOptions};
pub use config::{ConfigError, LeagueConfig, CONFIG_FILE, DATA_ENV};
pub use file_store::FileStore;
