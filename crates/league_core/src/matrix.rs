//! Cross table of pairwise results

use serde::Serialize;
use std::collections::HashMap;

use crate::types::{Match, Outcome, Participant, ParticipantId};

/// One cell of the cross table, seen from the row participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    /// Row and column are the same participant
    Own,
    /// No completed match between the two yet
    Pending,
    Played {
        scored: u32,
        conceded: u32,
        outcome: Outcome,
    },
}

/// Square grid indexed like the participant list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsMatrix {
    pub participants: Vec<Participant>,
    pub cells: Vec<Vec<Cell>>,
}

impl ResultsMatrix {
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Build the cross table. A later completed match for the same pair
/// overwrites an earlier one.
pub fn results_matrix(participants: &[Participant], matches: &[Match]) -> ResultsMatrix {
    let mut results: HashMap<(ParticipantId, ParticipantId), (u32, u32)> = HashMap::new();
    for m in matches {
        if let Some((s1, s2)) = m.final_score() {
            results.insert((m.team1_id, m.team2_id), (s1, s2));
            results.insert((m.team2_id, m.team1_id), (s2, s1));
        }
    }

    let cells = participants
        .iter()
        .map(|row| {
            participants
                .iter()
                .map(|col| {
                    if row.id == col.id {
                        return Cell::Own;
                    }
                    match results.get(&(row.id, col.id)) {
                        Some(&(scored, conceded)) => Cell::Played {
                            scored,
                            conceded,
                            outcome: Outcome::from_scores(scored, conceded),
                        },
                        None => Cell::Pending,
                    }
                })
                .collect()
        })
        .collect();

    ResultsMatrix {
        participants: participants.to_vec(),
        cells,
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod matrix_tests;
