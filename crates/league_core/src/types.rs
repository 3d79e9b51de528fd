//! Participants, matches and their identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub u64);

/// Sequential identifier of a match; never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub u64);

macro_rules! id_impls {
    ($ty:ident) => {
        impl $ty {
            pub const FIRST: $ty = $ty(1);

            /// Return the current value and step the counter forward
            pub fn advance(&mut self) -> $ty {
                let current = *self;
                self.0 += 1;
                current
            }

            /// The id following `self`
            pub fn successor(self) -> $ty {
                $ty(self.0 + 1)
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::FIRST
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map($ty)
            }
        }
    };
}

id_impls!(ParticipantId);
id_impls!(MatchId);

/// A league entrant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Result of a match from one side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Outcome for a side that scored `scored` and conceded `conceded`
    pub fn from_scores(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// The same result seen from the opponent's side
    pub fn flip(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// One-letter form used in tables (W/D/L)
    pub fn symbol(self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Draw => 'D',
            Outcome::Loss => 'L',
        }
    }
}

/// A scheduled fixture between two participants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    /// 1-based round number
    #[serde(default = "first_round")]
    pub round: u32,
    pub team1_id: ParticipantId,
    pub team2_id: ParticipantId,
    pub team1_score: Option<u32>,
    pub team2_score: Option<u32>,
    /// True iff both scores are present
    #[serde(default)]
    pub completed: bool,
}

fn first_round() -> u32 {
    1
}

impl Match {
    pub fn new(id: MatchId, round: u32, team1_id: ParticipantId, team2_id: ParticipantId) -> Self {
        Self {
            id,
            round,
            team1_id,
            team2_id,
            team1_score: None,
            team2_score: None,
            completed: false,
        }
    }

    /// Set both scores at once; `completed` follows.
    pub fn set_scores(&mut self, team1_score: Option<u32>, team2_score: Option<u32>) {
        self.team1_score = team1_score;
        self.team2_score = team2_score;
        self.sync_completed();
    }

    /// Recompute `completed` from the scores
    pub fn sync_completed(&mut self) {
        self.completed = self.team1_score.is_some() && self.team2_score.is_some();
    }

    /// Final score as (team1, team2), only for completed matches
    pub fn final_score(&self) -> Option<(u32, u32)> {
        if !self.completed {
            return None;
        }
        Some((self.team1_score?, self.team2_score?))
    }

    pub fn involves(&self, participant: ParticipantId) -> bool {
        self.team1_id == participant || self.team2_id == participant
    }

    /// Whether this match pairs `a` and `b`, in either orientation
    pub fn is_between(&self, a: ParticipantId, b: ParticipantId) -> bool {
        (self.team1_id == a && self.team2_id == b) || (self.team1_id == b && self.team2_id == a)
    }

    /// Goals (scored, conceded) for `participant`, if the match is completed
    /// and they took part in it.
    pub fn score_for(&self, participant: ParticipantId) -> Option<(u32, u32)> {
        let (s1, s2) = self.final_score()?;
        if participant == self.team1_id {
            Some((s1, s2))
        } else if participant == self.team2_id {
            Some((s2, s1))
        } else {
            None
        }
    }

    /// Outcome for `participant`, if the match is completed and they played
    pub fn outcome_for(&self, participant: ParticipantId) -> Option<Outcome> {
        self.score_for(participant)
            .map(|(scored, conceded)| Outcome::from_scores(scored, conceded))
    }

    /// The other side of the fixture
    pub fn opponent_of(&self, participant: ParticipantId) -> Option<ParticipantId> {
        if participant == self.team1_id {
            Some(self.team2_id)
        } else if participant == self.team2_id {
            Some(self.team1_id)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
