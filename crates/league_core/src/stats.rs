//! Per-participant statistics derived from completed matches

use serde::Serialize;
use std::collections::HashMap;

use crate::types::{Match, Outcome, Participant, ParticipantId};

/// Points awarded for a win
pub const POINTS_PER_WIN: u32 = 3;
/// Points awarded for a draw
pub const POINTS_PER_DRAW: u32 = 1;

/// Aggregate record of one participant. Recomputed on demand, never stored.
///
/// Goal totals are kept wider than a single score so that summing any
/// number of recorded scores cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "StatsRow")]
pub struct Stats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    /// Completed matches played
    pub matches: u32,
}

impl Stats {
    /// Wins per match played (0 before the first match)
    pub fn win_rate(&self) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.wins as f64 / self.matches as f64
    }

    pub fn goal_diff(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    pub fn points(&self) -> u32 {
        self.wins * POINTS_PER_WIN + self.draws * POINTS_PER_DRAW
    }

    fn record(&mut self, scored: u32, conceded: u32) {
        self.matches += 1;
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);
        match Outcome::from_scores(scored, conceded) {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Serialized form of [`Stats`], carrying the derived figures alongside the counters
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsRow {
    wins: u32,
    losses: u32,
    draws: u32,
    goals_for: u64,
    goals_against: u64,
    matches: u32,
    win_rate: f64,
    goal_diff: i64,
    points: u32,
}

impl From<Stats> for StatsRow {
    fn from(stats: Stats) -> Self {
        Self {
            wins: stats.wins,
            losses: stats.losses,
            draws: stats.draws,
            goals_for: stats.goals_for,
            goals_against: stats.goals_against,
            matches: stats.matches,
            win_rate: stats.win_rate(),
            goal_diff: stats.goal_diff(),
            points: stats.points(),
        }
    }
}

/// Fold every completed match into per-participant statistics.
///
/// Every participant gets an entry, even with no matches played. Matches
/// that reference an unknown participant are skipped entirely.
pub fn compute_stats(participants: &[Participant], matches: &[Match]) -> HashMap<ParticipantId, Stats> {
    let mut stats: HashMap<ParticipantId, Stats> = participants
        .iter()
        .map(|p| (p.id, Stats::default()))
        .collect();

    for m in matches {
        let Some((score1, score2)) = m.final_score() else {
            continue;
        };
        if !stats.contains_key(&m.team1_id) || !stats.contains_key(&m.team2_id) {
            continue;
        }
        if let Some(team1) = stats.get_mut(&m.team1_id) {
            team1.record(score1, score2);
        }
        if let Some(team2) = stats.get_mut(&m.team2_id) {
            team2.record(score2, score1);
        }
    }

    stats
}

/// Direct-match result between two participants, relative to the first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadToHead {
    AWin,
    BWin,
    /// Drawn, or no completed match between them
    None,
}

/// Look up the completed match between `a` and `b` in either orientation.
///
/// Only the first completed match found is considered; a schedule holds at
/// most one match per pair.
pub fn head_to_head(matches: &[Match], a: ParticipantId, b: ParticipantId) -> HeadToHead {
    let outcome = matches
        .iter()
        .filter(|m| m.completed && m.is_between(a, b))
        .find_map(|m| m.outcome_for(a));

    match outcome {
        Some(Outcome::Win) => HeadToHead::AWin,
        Some(Outcome::Loss) => HeadToHead::BWin,
        Some(Outcome::Draw) | None => HeadToHead::None,
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
