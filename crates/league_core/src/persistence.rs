//! Saving and restoring the tournament state
//!
//! The saved form is a JSON object. Loading is best effort: every top-level
//! field is decoded on its own and merged onto a fresh state, so a damaged
//! field costs only that field. Loading never fails.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::warn;

use crate::criteria::{CriteriaChain, Criterion};
use crate::error::Result;
use crate::state::TournamentState;
use crate::types::{Match, MatchId, Participant, ParticipantId};

/// Serialize the whole state
pub fn save(state: &TournamentState) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}

/// Serialize with indentation, for files meant to be read by people
pub fn save_pretty(state: &TournamentState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Restore a state from `blob`, falling back to defaults for anything
/// missing or malformed.
pub fn load(blob: &str) -> TournamentState {
    load_with_defaults(blob, TournamentState::new())
}

/// Like [`load`], merging onto `defaults` instead of a fresh state
pub fn load_with_defaults(blob: &str, defaults: TournamentState) -> TournamentState {
    let fields = match serde_json::from_str::<Value>(blob) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            warn!(kind = json_kind(&other), "saved state is not an object, starting fresh");
            return defaults;
        }
        Err(err) => {
            warn!(error = %err, "saved state is unreadable, starting fresh");
            return defaults;
        }
    };

    let mut state = defaults;

    if let Some(title) = field::<String>(&fields, "tournamentTitle") {
        state.title = title;
    }
    if let Some(items) = list_field(&fields, "participants") {
        state.participants = decode_participants(items);
    }
    if let Some(items) = list_field(&fields, "matches") {
        state.matches = decode_matches(items, &state.participants);
    }
    if let Some(items) = list_field(&fields, "criteria") {
        state.criteria = decode_criteria(items);
    }
    if let Some(next) = field::<MatchId>(&fields, "nextMatchId") {
        state.next_match_id = next;
    }
    if let Some(next) = field::<ParticipantId>(&fields, "nextParticipantId") {
        state.next_participant_id = next;
    }

    repair_counters(&mut state);
    state
}

fn field<T: DeserializeOwned>(fields: &Map<String, Value>, key: &str) -> Option<T> {
    let value = fields.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            warn!(field = key, error = %err, "ignoring malformed saved field");
            None
        }
    }
}

fn list_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a [Value]> {
    match fields.get(key)? {
        Value::Array(items) => Some(items),
        other => {
            warn!(field = key, kind = json_kind(other), "ignoring saved field: expected a list");
            None
        }
    }
}

/// Keep well-formed participants with a usable name and an unseen id
fn decode_participants(items: &[Value]) -> Vec<Participant> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(|item| decode_item::<Participant>(item, "participants"))
        .filter(|p| !p.name.trim().is_empty() && seen.insert(p.id))
        .collect()
}

/// Keep well-formed matches with an unseen id whose sides both exist.
/// `completed` is recomputed from the scores.
fn decode_matches(items: &[Value], participants: &[Participant]) -> Vec<Match> {
    let known: HashSet<ParticipantId> = participants.iter().map(|p| p.id).collect();
    let mut seen = HashSet::new();
    let mut dropped = 0usize;

    let matches = items
        .iter()
        .filter_map(|item| decode_item::<Match>(item, "matches"))
        .filter_map(|mut m| {
            let usable = m.round >= 1
                && m.team1_id != m.team2_id
                && known.contains(&m.team1_id)
                && known.contains(&m.team2_id)
                && seen.insert(m.id);
            if !usable {
                dropped += 1;
                return None;
            }
            m.sync_completed();
            Some(m)
        })
        .collect();

    if dropped > 0 {
        warn!(dropped, "dropped saved matches with unknown or repeated references");
    }
    matches
}

/// Known criteria in saved order; unknown keys and repeats are skipped
fn decode_criteria(items: &[Value]) -> CriteriaChain {
    CriteriaChain::from_criteria(
        items
            .iter()
            .filter_map(|item| decode_item::<Criterion>(item, "criteria")),
    )
}

fn decode_item<T: DeserializeOwned>(item: &Value, list: &str) -> Option<T> {
    match serde_json::from_value(item.clone()) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            warn!(field = list, error = %err, "skipping malformed saved entry");
            None
        }
    }
}

/// Make both counters exceed every id in use
fn repair_counters(state: &mut TournamentState) {
    if let Some(max) = state.matches.iter().map(|m| m.id).max() {
        if state.next_match_id <= max {
            state.next_match_id = max.successor();
        }
    }
    if let Some(max) = state.participants.iter().map(|p| p.id).max() {
        if state.next_participant_id <= max {
            state.next_participant_id = max.successor();
        }
    }
    if state.next_match_id.0 == 0 {
        state.next_match_id = MatchId::FIRST;
    }
    if state.next_participant_id.0 == 0 {
        state.next_participant_id = ParticipantId::FIRST;
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "persistence_tests.rs"]
mod persistence_tests;
