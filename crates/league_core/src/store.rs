//! Storage backends for the saved state
//!
//! A store only moves the serialized blob around; encoding and the lenient
//! decoding live in [`crate::persistence`].

use tracing::warn;

use crate::error::Result;
use crate::persistence;
use crate::state::TournamentState;

/// Somewhere the tournament state lives between sessions
pub trait StateStore {
    /// The saved blob, or `None` when nothing has been saved yet
    fn read(&self) -> Result<Option<String>>;

    fn write(&mut self, blob: &str) -> Result<()>;

    /// Forget the saved state entirely
    fn clear(&mut self) -> Result<()>;

    /// Restore the saved state merged onto `defaults`.
    ///
    /// Never fails: a store that cannot be read yields `defaults`.
    fn load(&self, defaults: TournamentState) -> TournamentState {
        match self.read() {
            Ok(Some(blob)) => persistence::load_with_defaults(&blob, defaults),
            Ok(None) => defaults,
            Err(err) => {
                warn!(error = %err, "could not read saved state, starting fresh");
                defaults
            }
        }
    }

    fn save(&mut self, state: &TournamentState) -> Result<()> {
        let blob = persistence::save(state)?;
        self.write(&blob)
    }
}

/// Keeps the serialized blob in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing blob
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl StateStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn write(&mut self, blob: &str) -> Result<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.blob = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
