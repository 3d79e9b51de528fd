//! Queries over a match list
//!
//! Mutation lives on [`crate::TournamentState`]; these helpers only read.

use std::collections::BTreeMap;

use crate::types::{Match, MatchId, ParticipantId};

/// Completed vs total match counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

pub fn find_match(matches: &[Match], id: MatchId) -> Option<&Match> {
    matches.iter().find(|m| m.id == id)
}

/// Matches scheduled in `round`, in schedule order
pub fn matches_in_round(matches: &[Match], round: u32) -> Vec<&Match> {
    matches.iter().filter(|m| m.round == round).collect()
}

/// Matches involving `participant`, in schedule order
pub fn matches_for(matches: &[Match], participant: ParticipantId) -> Vec<&Match> {
    matches.iter().filter(|m| m.involves(participant)).collect()
}

/// The first match pairing `a` and `b`, regardless of sides
pub fn match_between(matches: &[Match], a: ParticipantId, b: ParticipantId) -> Option<&Match> {
    matches.iter().find(|m| m.is_between(a, b))
}

/// Matches grouped by round, rounds ascending
pub fn group_by_round(matches: &[Match]) -> BTreeMap<u32, Vec<&Match>> {
    let mut rounds: BTreeMap<u32, Vec<&Match>> = BTreeMap::new();
    for m in matches {
        rounds.entry(m.round).or_default().push(m);
    }
    rounds
}

pub fn progress(matches: &[Match]) -> Progress {
    Progress {
        completed: matches.iter().filter(|m| m.completed).count(),
        total: matches.len(),
    }
}

#[cfg(test)]
#[path = "matches_tests.rs"]
mod matches_tests;
