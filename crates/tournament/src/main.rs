//! League CLI
//!
//! Manage a round-robin league stored in a JSON file.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use tournament::{
    execute, parse_command, usage, CliError, FileStore, GlobalOptions, LeagueConfig, CONFIG_FILE,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<ExitCode> {
    let (options, rest) = match GlobalOptions::extract(args) {
        Ok(parsed) => parsed,
        Err(e) => return Ok(usage_error(&e)),
    };

    let config_path = options
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let mut config = LeagueConfig::load(&config_path)?;
    config.apply_env();
    if let Some(data) = options.data {
        config.data_path = data;
    }
    init_logging(&config.log_filter);
    debug!(config = %config_path.display(), data = %config.data_path.display(), "starting");

    let command = match parse_command(&rest) {
        Ok(command) => command,
        Err(e) => return Ok(usage_error(&e)),
    };

    let store = FileStore::new(&config.data_path);
    let mut session = tournament_session(store, &config);

    match execute(&mut session, command) {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ CliError::Usage(_)) => Ok(usage_error(&e)),
        Err(e) => Err(e).with_context(|| format!("league at {}", config.data_path.display())),
    }
}

fn tournament_session(store: FileStore, config: &LeagueConfig) -> league_core::Session<FileStore> {
    let mut session = league_core::Session::open_with_defaults(store, config.initial_state());
    session.subscribe(|change, state| {
        debug!(
            ?change,
            participants = state.participants().len(),
            matches = state.matches().len(),
            "league updated"
        );
    });
    session
}

fn usage_error(error: &CliError) -> ExitCode {
    eprintln!("Error: {error}\n");
    eprint!("{}", usage());
    ExitCode::from(2)
}

fn main() -> Result<ExitCode> {
    run(std::env::args().skip(1).collect())
}
