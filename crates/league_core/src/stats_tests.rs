use super::*;
use crate::types::MatchId;

const A: ParticipantId = ParticipantId(1);
const B: ParticipantId = ParticipantId(2);
const C: ParticipantId = ParticipantId(3);

fn players() -> Vec<Participant> {
    vec![
        Participant::new(A, "A"),
        Participant::new(B, "B"),
        Participant::new(C, "C"),
    ]
}

fn played(id: u64, t1: ParticipantId, t2: ParticipantId, s1: u32, s2: u32) -> Match {
    let mut m = Match::new(MatchId(id), 1, t1, t2);
    m.set_scores(Some(s1), Some(s2));
    m
}

#[test]
fn test_single_win() {
    let stats = compute_stats(&players(), &[played(1, A, B, 3, 1)]);

    let a = stats[&A];
    assert_eq!((a.wins, a.draws, a.losses), (1, 0, 0));
    assert_eq!((a.goals_for, a.goals_against), (3, 1));

    let b = stats[&B];
    assert_eq!((b.wins, b.draws, b.losses), (0, 0, 1));
    assert_eq!((b.goals_for, b.goals_against), (1, 3));

    assert_eq!(stats[&C], Stats::default());
}

#[test]
fn test_draw_counts_for_both() {
    let stats = compute_stats(&players(), &[played(1, A, C, 2, 2)]);
    assert_eq!(stats[&A].draws, 1);
    assert_eq!(stats[&C].draws, 1);
    assert_eq!(stats[&A].points(), 1);
    assert_eq!(stats[&C].matches, 1);
}

#[test]
fn test_incomplete_matches_ignored() {
    let mut partial = Match::new(MatchId(2), 1, A, C);
    partial.set_scores(Some(4), None);
    let pending = Match::new(MatchId(3), 2, B, C);

    let stats = compute_stats(&players(), &[partial, pending]);
    assert!(stats.values().all(|s| *s == Stats::default()));
}

#[test]
fn test_unknown_participant_match_skipped() {
    let stray = played(1, A, ParticipantId(99), 5, 0);
    let stats = compute_stats(&players(), &[stray]);
    assert_eq!(stats[&A].matches, 0);
    assert!(!stats.contains_key(&ParticipantId(99)));
}

#[test]
fn test_derived_values() {
    let matches = [
        played(1, A, B, 3, 1),
        played(2, A, C, 0, 2),
        played(3, B, A, 1, 1),
    ];
    let a = compute_stats(&players(), &matches)[&A];

    assert_eq!(a.matches, 3);
    assert_eq!((a.wins, a.draws, a.losses), (1, 1, 1));
    assert_eq!(a.goal_diff(), 0);
    assert_eq!(a.points(), 4);
    assert!((a.win_rate() - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(Stats::default().win_rate(), 0.0);
}

#[test]
fn test_compute_stats_idempotent() {
    let matches = [played(1, A, B, 3, 1), played(2, C, B, 0, 0)];
    let first = compute_stats(&players(), &matches);
    let second = compute_stats(&players(), &matches);
    assert_eq!(first, second);
}

#[test]
fn test_head_to_head_orientation() {
    let matches = [played(1, B, A, 0, 2)];
    assert_eq!(head_to_head(&matches, A, B), HeadToHead::AWin);
    assert_eq!(head_to_head(&matches, B, A), HeadToHead::BWin);
}

#[test]
fn test_head_to_head_none_cases() {
    let matches = [played(1, A, B, 1, 1), Match::new(MatchId(2), 2, A, C)];
    assert_eq!(head_to_head(&matches, A, B), HeadToHead::None, "draw");
    assert_eq!(head_to_head(&matches, A, C), HeadToHead::None, "not played");
    assert_eq!(head_to_head(&matches, B, C), HeadToHead::None, "no fixture");
}

#[test]
fn test_head_to_head_uses_first_completed() {
    let matches = [
        Match::new(MatchId(1), 1, A, B),
        played(2, A, B, 0, 1),
        played(3, A, B, 5, 0),
    ];
    assert_eq!(head_to_head(&matches, A, B), HeadToHead::BWin);
}

#[test]
fn test_huge_scores_accumulate_without_overflow() {
    let matches = [played(1, A, B, u32::MAX, 0), played(2, A, B, 1, 0)];
    let stats = compute_stats(&players(), &matches);

    let a = stats[&A];
    assert_eq!(a.goals_for, u64::from(u32::MAX) + 1);
    assert_eq!(a.goal_diff(), i64::from(u32::MAX) + 1);
    assert_eq!(stats[&B].goal_diff(), -(i64::from(u32::MAX) + 1));
}

#[test]
fn test_serialized_stats_include_derived_figures() {
    let stats = compute_stats(&players(), &[played(1, A, B, 3, 1), played(2, A, C, 0, 0)]);
    let json = serde_json::to_value(stats[&A]).unwrap();

    assert_eq!(json["wins"], 1);
    assert_eq!(json["draws"], 1);
    assert_eq!(json["goalsFor"], 3);
    assert_eq!(json["goalsAgainst"], 1);
    assert_eq!(json["goalDiff"], 2);
    assert_eq!(json["winRate"], 0.5);
    assert_eq!(json["points"], 4);
}
