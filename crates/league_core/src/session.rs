//! An owned league session: state, storage and change subscribers
//!
//! Every effective mutation is saved through the store and then announced to
//! subscribers, which is where a presentation layer hooks in to re-render.

use std::fmt;
use tracing::{info, warn};

use crate::criteria::Criterion;
use crate::error::Result;
use crate::matrix::ResultsMatrix;
use crate::ranking::Standing;
use crate::state::TournamentState;
use crate::store::StateStore;
use crate::types::{MatchId, ParticipantId};

/// What a mutation changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    ParticipantAdded(ParticipantId),
    ParticipantRenamed(ParticipantId),
    ParticipantRemoved {
        id: ParticipantId,
        matches_removed: usize,
    },
    TitleChanged,
    CriteriaChanged,
    ScheduleGenerated {
        matches: usize,
    },
    ResultRecorded(MatchId),
    Reset,
}

type Subscriber = Box<dyn FnMut(&Change, &TournamentState)>;

/// A league being worked on, backed by a store
pub struct Session<S: StateStore> {
    state: TournamentState,
    store: S,
    defaults: TournamentState,
    subscribers: Vec<Subscriber>,
}

impl<S: StateStore> fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<S: StateStore> Session<S> {
    /// Load whatever `store` holds, or start an empty league
    pub fn open(store: S) -> Self {
        Self::open_with_defaults(store, TournamentState::new())
    }

    /// Load from `store`, merging onto `defaults`. `defaults` is also what
    /// [`Session::reset`] returns to.
    pub fn open_with_defaults(store: S, defaults: TournamentState) -> Self {
        let state = store.load(defaults.clone());
        Self {
            state,
            store,
            defaults,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &TournamentState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a callback run after every change
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&Change, &TournamentState) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    pub fn standings(&self) -> Vec<Standing> {
        self.state.standings()
    }

    pub fn results_matrix(&self) -> ResultsMatrix {
        self.state.results_matrix()
    }

    pub fn add_participant(&mut self, name: &str) -> Result<ParticipantId> {
        let id = self.state.add_participant(name)?;
        self.commit(Change::ParticipantAdded(id));
        Ok(id)
    }

    pub fn rename_participant(&mut self, id: ParticipantId, name: &str) -> bool {
        let renamed = self.state.rename_participant(id, name);
        if renamed {
            self.commit(Change::ParticipantRenamed(id));
        }
        renamed
    }

    /// Remove a participant and their matches. Returns how many matches
    /// went with them, or `None` for an unknown id.
    pub fn remove_participant(&mut self, id: ParticipantId) -> Option<usize> {
        let before = self.state.matches().len();
        self.state.remove_participant(id)?;
        let matches_removed = before - self.state.matches().len();
        self.commit(Change::ParticipantRemoved {
            id,
            matches_removed,
        });
        Some(matches_removed)
    }

    pub fn set_title(&mut self, title: &str) {
        self.state.set_title(title);
        self.commit(Change::TitleChanged);
    }

    pub fn add_criterion(&mut self, criterion: Criterion) -> bool {
        let added = self.state.add_criterion(criterion);
        if added {
            self.commit(Change::CriteriaChanged);
        }
        added
    }

    pub fn remove_criterion(&mut self, index: usize) -> Option<Criterion> {
        let removed = self.state.remove_criterion(index)?;
        self.commit(Change::CriteriaChanged);
        Some(removed)
    }

    pub fn move_criterion(&mut self, from: usize, to: usize) -> bool {
        let moved = self.state.move_criterion(from, to);
        if moved {
            self.commit(Change::CriteriaChanged);
        }
        moved
    }

    pub fn generate_schedule(&mut self) -> Result<usize> {
        let matches = self.state.generate_schedule()?;
        self.commit(Change::ScheduleGenerated { matches });
        Ok(matches)
    }

    pub fn record_result(
        &mut self,
        match_id: MatchId,
        team1_score: Option<u32>,
        team2_score: Option<u32>,
    ) -> bool {
        let recorded = self.state.record_result(match_id, team1_score, team2_score);
        if recorded {
            self.commit(Change::ResultRecorded(match_id));
        }
        recorded
    }

    /// Drop everything and start over from the defaults
    pub fn reset(&mut self) {
        self.state = self.defaults.clone();
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "failed to clear saved state");
        }
        info!("league reset");
        self.notify(&Change::Reset);
    }

    fn commit(&mut self, change: Change) {
        if let Err(err) = self.store.save(&self.state) {
            warn!(error = %err, ?change, "failed to save league state");
        }
        self.notify(&change);
    }

    fn notify(&mut self, change: &Change) {
        for subscriber in &mut self.subscribers {
            subscriber(change, &self.state);
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
