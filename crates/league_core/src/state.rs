//! The tournament aggregate: participants, schedule, criteria and title

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::criteria::{self, CriteriaChain, Criterion};
use crate::error::{LeagueError, Result};
use crate::matches::{self, Progress};
use crate::matrix::{results_matrix, ResultsMatrix};
use crate::ranking::{rank, Standing};
use crate::schedule::generate_schedule;
use crate::stats::{compute_stats, head_to_head, HeadToHead, Stats};
use crate::types::{Match, MatchId, Participant, ParticipantId};

/// Complete state of one league.
///
/// `next_match_id` always exceeds every match id present, so ids are never
/// handed out twice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentState {
    #[serde(rename = "tournamentTitle")]
    pub(crate) title: String,
    pub(crate) participants: Vec<Participant>,
    pub(crate) matches: Vec<Match>,
    pub(crate) criteria: CriteriaChain,
    pub(crate) next_match_id: MatchId,
    pub(crate) next_participant_id: ParticipantId,
}

impl Default for TournamentState {
    fn default() -> Self {
        Self::new()
    }
}

impl TournamentState {
    pub fn new() -> Self {
        Self::with_criteria(CriteriaChain::default())
    }

    /// Empty league ranked by `criteria`
    pub fn with_criteria(criteria: CriteriaChain) -> Self {
        Self {
            title: String::new(),
            participants: Vec::new(),
            matches: Vec::new(),
            criteria,
            next_match_id: MatchId::FIRST,
            next_participant_id: ParticipantId::FIRST,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn criteria(&self) -> &CriteriaChain {
        &self.criteria
    }

    pub fn next_match_id(&self) -> MatchId {
        self.next_match_id
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn participant_by_name(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Store a trimmed title
    pub fn set_title(&mut self, title: &str) {
        self.title = title.trim().to_string();
    }

    // ---------------------------------------------------------------------
    // Participants
    // ---------------------------------------------------------------------

    /// Add a participant under a trimmed, non-empty, unused name
    pub fn add_participant(&mut self, name: &str) -> Result<ParticipantId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LeagueError::EmptyName);
        }
        if self.participant_by_name(name).is_some() {
            return Err(LeagueError::DuplicateName(name.to_string()));
        }

        let id = self.next_participant_id.advance();
        self.participants.push(Participant::new(id, name));
        debug!(%id, participant = name, "participant added");
        Ok(id)
    }

    /// Rename in place. Empty names and unknown ids are ignored.
    pub fn rename_participant(&mut self, id: ParticipantId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.participants.iter_mut().find(|p| p.id == id) {
            Some(participant) => {
                participant.name = name.to_string();
                true
            }
            None => {
                debug!(%id, "rename ignored: unknown participant");
                false
            }
        }
    }

    /// Remove a participant together with every match they appear in
    pub fn remove_participant(&mut self, id: ParticipantId) -> Option<Participant> {
        let Some(index) = self.participants.iter().position(|p| p.id == id) else {
            debug!(%id, "remove ignored: unknown participant");
            return None;
        };
        let removed = self.participants.remove(index);

        let before = self.matches.len();
        self.matches.retain(|m| !m.involves(id));
        debug!(%id, matches_removed = before - self.matches.len(), "participant removed");

        Some(removed)
    }

    // ---------------------------------------------------------------------
    // Criteria
    // ---------------------------------------------------------------------

    pub fn add_criterion(&mut self, criterion: Criterion) -> bool {
        self.criteria.add(criterion)
    }

    pub fn remove_criterion(&mut self, index: usize) -> Option<Criterion> {
        self.criteria.remove(index)
    }

    /// Reorder the chain; returns false when nothing moved
    pub fn move_criterion(&mut self, from: usize, to: usize) -> bool {
        let moved = criteria::move_criterion(&self.criteria, from, to);
        if moved == self.criteria {
            return false;
        }
        self.criteria = moved;
        true
    }

    pub fn set_criteria(&mut self, criteria: CriteriaChain) {
        self.criteria = criteria;
    }

    // ---------------------------------------------------------------------
    // Schedule and results
    // ---------------------------------------------------------------------

    /// Replace the schedule with a fresh round robin over all participants.
    ///
    /// Returns the number of matches generated. On error the current
    /// schedule is kept.
    pub fn generate_schedule(&mut self) -> Result<usize> {
        let mut next_id = self.next_match_id;
        let matches = generate_schedule(&self.participants, &mut next_id)?;
        self.next_match_id = next_id;
        self.matches = matches;
        Ok(self.matches.len())
    }

    /// Set both scores of a match. Unknown ids are ignored.
    pub fn record_result(
        &mut self,
        match_id: MatchId,
        team1_score: Option<u32>,
        team2_score: Option<u32>,
    ) -> bool {
        match self.matches.iter_mut().find(|m| m.id == match_id) {
            Some(m) => {
                m.set_scores(team1_score, team2_score);
                true
            }
            None => {
                debug!(%match_id, "result ignored: unknown match");
                false
            }
        }
    }

    pub fn find_match(&self, id: MatchId) -> Option<&Match> {
        matches::find_match(&self.matches, id)
    }

    pub fn matches_in_round(&self, round: u32) -> Vec<&Match> {
        matches::matches_in_round(&self.matches, round)
    }

    pub fn matches_for(&self, participant: ParticipantId) -> Vec<&Match> {
        matches::matches_for(&self.matches, participant)
    }

    pub fn match_between(&self, a: ParticipantId, b: ParticipantId) -> Option<&Match> {
        matches::match_between(&self.matches, a, b)
    }

    pub fn rounds(&self) -> BTreeMap<u32, Vec<&Match>> {
        matches::group_by_round(&self.matches)
    }

    pub fn progress(&self) -> Progress {
        matches::progress(&self.matches)
    }

    // ---------------------------------------------------------------------
    // Derived views
    // ---------------------------------------------------------------------

    pub fn stats(&self) -> HashMap<ParticipantId, Stats> {
        compute_stats(&self.participants, &self.matches)
    }

    pub fn head_to_head(&self, a: ParticipantId, b: ParticipantId) -> HeadToHead {
        head_to_head(&self.matches, a, b)
    }

    /// Standings under the current criteria chain
    pub fn standings(&self) -> Vec<Standing> {
        rank(&self.participants, &self.matches, &self.criteria)
    }

    pub fn results_matrix(&self) -> ResultsMatrix {
        results_matrix(&self.participants, &self.matches)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
