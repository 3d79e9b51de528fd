use super::*;

fn league(names: &[&str]) -> TournamentState {
    let mut state = TournamentState::new();
    for name in names {
        state.add_participant(name).unwrap();
    }
    state
}

#[test]
fn test_add_participant_rules() {
    let mut state = TournamentState::new();
    let id = state.add_participant("  Alice ").unwrap();
    assert_eq!(state.participant(id).unwrap().name, "Alice");

    assert!(matches!(state.add_participant("   "), Err(LeagueError::EmptyName)));
    assert!(matches!(
        state.add_participant("Alice"),
        Err(LeagueError::DuplicateName(name)) if name == "Alice"
    ));
    // Names are case sensitive
    assert!(state.add_participant("alice").is_ok());
    assert_eq!(state.participants().len(), 2);
}

#[test]
fn test_participant_ids_unique() {
    let mut state = league(&["A", "B"]);
    let b = state.participant_by_name("B").unwrap().id;
    state.remove_participant(b);
    let c = state.add_participant("C").unwrap();
    assert_ne!(b, c, "ids are not reused after removal");
}

#[test]
fn test_rename_participant() {
    let mut state = league(&["A"]);
    let id = state.participants()[0].id;

    assert!(state.rename_participant(id, " Anna "));
    assert_eq!(state.participant(id).unwrap().name, "Anna");
    assert!(!state.rename_participant(id, "  "));
    assert!(!state.rename_participant(ParticipantId(404), "Ghost"));
    assert_eq!(state.participant(id).unwrap().name, "Anna");
}

#[test]
fn test_generate_schedule_requires_two() {
    let mut state = league(&["Solo"]);
    let err = state.generate_schedule().unwrap_err();
    assert!(matches!(err, LeagueError::InsufficientParticipants { found: 1 }));
    assert!(state.matches().is_empty());
    assert_eq!(state.next_match_id(), MatchId::FIRST);
}

#[test]
fn test_regeneration_replaces_and_never_reuses_ids() {
    let mut state = league(&["A", "B", "C", "D"]);
    assert_eq!(state.generate_schedule().unwrap(), 6);
    let first_ids: Vec<MatchId> = state.matches().iter().map(|m| m.id).collect();

    assert_eq!(state.generate_schedule().unwrap(), 6);
    assert_eq!(state.matches().len(), 6);
    assert!(state.matches().iter().all(|m| !first_ids.contains(&m.id)));
    assert_eq!(state.next_match_id(), MatchId(13));
}

#[test]
fn test_record_result() {
    let mut state = league(&["A", "B"]);
    state.generate_schedule().unwrap();
    let id = state.matches()[0].id;

    assert!(state.record_result(id, Some(2), None));
    assert!(!state.find_match(id).unwrap().completed);

    assert!(state.record_result(id, Some(2), Some(2)));
    assert!(state.find_match(id).unwrap().completed);

    assert!(!state.record_result(MatchId(999), Some(1), Some(0)));
    assert_eq!(state.progress(), Progress { completed: 1, total: 1 });
}

#[test]
fn test_remove_participant_cascades() {
    let mut state = league(&["A", "B", "C", "D"]);
    state.generate_schedule().unwrap();
    let c = state.participant_by_name("C").unwrap().id;

    // Record two of C's three matches
    let c_matches: Vec<MatchId> = state.matches_for(c).iter().map(|m| m.id).collect();
    state.record_result(c_matches[0], Some(1), Some(0));
    state.record_result(c_matches[1], Some(0), Some(3));

    let removed = state.remove_participant(c).unwrap();
    assert_eq!(removed.name, "C");
    assert_eq!(state.matches().len(), 3);
    assert!(state.matches().iter().all(|m| !m.involves(c)));

    assert!(state.remove_participant(c).is_none());
    assert_eq!(state.matches().len(), 3);
}

#[test]
fn test_criteria_operations() {
    let mut state = TournamentState::new();
    assert!(state.add_criterion(Criterion::HeadToHead));
    assert!(!state.add_criterion(Criterion::Wins));
    assert!(state.move_criterion(3, 0));
    assert_eq!(state.criteria().as_slice()[0], Criterion::HeadToHead);
    assert!(!state.move_criterion(1, 1));
    assert_eq!(state.remove_criterion(0), Some(Criterion::HeadToHead));
    assert_eq!(state.criteria(), &CriteriaChain::default());
}

#[test]
fn test_queries_and_views() {
    let mut state = league(&["A", "B", "C"]);
    state.set_title("  Spring Cup ");
    assert_eq!(state.title(), "Spring Cup");

    state.generate_schedule().unwrap();
    assert_eq!(state.rounds().len(), 3);
    assert_eq!(state.matches_in_round(1).len(), 1);

    let a = state.participant_by_name("A").unwrap().id;
    let b = state.participant_by_name("B").unwrap().id;
    let ab = state.match_between(b, a).unwrap().id;
    state.record_result(ab, Some(3), Some(1));

    let (first, second) = {
        let m = state.find_match(ab).unwrap();
        (m.team1_id, m.team2_id)
    };
    assert_eq!((first, second), (a, b));
    assert_eq!(state.head_to_head(a, b), HeadToHead::AWin);
    assert_eq!(state.stats()[&a].wins, 1);
    assert_eq!(state.standings()[0].participant.name, "A");
    assert_eq!(state.results_matrix().participants.len(), 3);
}
