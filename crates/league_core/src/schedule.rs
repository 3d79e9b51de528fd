//! Round-robin schedule generation using the circle method
//!
//! Slot 0 stays fixed while the remaining slots rotate one step per round,
//! which pairs every participant with every other exactly once. An odd field
//! gets an extra bye slot; pairings against it are skipped.

use tracing::info;

use crate::error::{LeagueError, Result};
use crate::types::{Match, MatchId, Participant, ParticipantId};

/// Generate a full round-robin schedule.
///
/// Match ids are drawn from `next_id`, which is left pointing past the last
/// id handed out. On error nothing is consumed.
pub fn generate_schedule(participants: &[Participant], next_id: &mut MatchId) -> Result<Vec<Match>> {
    if participants.len() < 2 {
        return Err(LeagueError::InsufficientParticipants {
            found: participants.len(),
        });
    }

    // None marks the bye slot
    let mut slots: Vec<Option<ParticipantId>> = participants.iter().map(|p| Some(p.id)).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }

    let n = slots.len();
    let num_rounds = n - 1;
    let pairs_per_round = n / 2;
    let mut matches = Vec::with_capacity(participants.len() * (participants.len() - 1) / 2);

    for round in 1..=num_rounds {
        for i in 0..pairs_per_round {
            if let (Some(team1), Some(team2)) = (slots[i], slots[n - 1 - i]) {
                matches.push(Match::new(next_id.advance(), round as u32, team1, team2));
            }
        }
        rotate(&mut slots);
    }

    info!(
        participants = participants.len(),
        rounds = num_rounds,
        matches = matches.len(),
        "generated round-robin schedule"
    );

    Ok(matches)
}

/// Move the last slot to index 1, keeping the anchor at index 0 in place
fn rotate(slots: &mut [Option<ParticipantId>]) {
    if slots.len() > 2 {
        slots[1..].rotate_right(1);
    }
}

/// Number of rounds a schedule for `participants` entrants spans
pub fn round_count(participants: usize) -> usize {
    match participants {
        0 | 1 => 0,
        n if n % 2 == 0 => n - 1,
        n => n,
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
