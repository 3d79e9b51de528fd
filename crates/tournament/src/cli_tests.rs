use super::*;
use league_core::MemoryStore;

fn args(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

fn run(session: &mut Session<MemoryStore>, line: &str) -> Result<String, CliError> {
    execute(session, parse_command(&args(line))?)
}

fn session_with(names: &[&str]) -> Session<MemoryStore> {
    let mut session = Session::open(MemoryStore::new());
    for name in names {
        session.add_participant(name).unwrap();
    }
    session
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_global_options_before_command() {
    let (options, rest) =
        GlobalOptions::extract(args("--data cup.json --config=league.toml standings --json")).unwrap();
    assert_eq!(options.data, Some(PathBuf::from("cup.json")));
    assert_eq!(options.config, Some(PathBuf::from("league.toml")));
    assert_eq!(rest, args("standings --json"));
}

#[test]
fn test_global_options_after_command_stay_with_it() {
    let (options, rest) = GlobalOptions::extract(args("add Team --data x")).unwrap();
    assert_eq!(options, GlobalOptions::default());
    assert_eq!(rest, args("add Team --data x"));

    let mut session = Session::open(MemoryStore::new());
    execute(&mut session, parse_command(&rest).unwrap()).unwrap();
    assert_eq!(session.state().participants()[0].name, "Team --data x");
}

#[test]
fn test_global_options_only() {
    let (options, rest) = GlobalOptions::extract(args("--data cup.json")).unwrap();
    assert_eq!(options.data, Some(PathBuf::from("cup.json")));
    assert!(rest.is_empty());
}

#[test]
fn test_global_option_without_value() {
    assert!(matches!(
        GlobalOptions::extract(args("--data")),
        Err(CliError::Usage(_))
    ));
}

#[test]
fn test_parse_commands() {
    assert_eq!(parse_command(&[]).unwrap(), Command::Help);
    assert_eq!(
        parse_command(&args("add Real Madrid")).unwrap(),
        Command::Add("Real Madrid".to_string())
    );
    assert_eq!(
        parse_command(&args("record 4 2 -")).unwrap(),
        Command::Record {
            id: MatchId(4),
            team1_score: Some(2),
            team2_score: None,
        }
    );
    assert_eq!(
        parse_command(&args("criteria move 3 1")).unwrap(),
        Command::Criteria(CriteriaCommand::Move { from: 3, to: 1 })
    );
    assert_eq!(
        parse_command(&args("criteria add head_to_head")).unwrap(),
        Command::Criteria(CriteriaCommand::Add(Criterion::HeadToHead))
    );
    assert_eq!(
        parse_command(&args("standings --json")).unwrap(),
        Command::Standings { json: true }
    );
}

#[test]
fn test_parse_errors() {
    assert!(matches!(parse_command(&args("add")), Err(CliError::Usage(_))));
    assert!(matches!(parse_command(&args("frobnicate")), Err(CliError::Usage(_))));
    assert!(matches!(
        parse_command(&args("remove abc")),
        Err(CliError::InvalidNumber(_))
    ));
    assert!(matches!(
        parse_command(&args("criteria add elo")),
        Err(CliError::UnknownCriterion(_))
    ));
    assert!(matches!(
        parse_command(&args("criteria remove 0")),
        Err(CliError::InvalidPosition(0))
    ));
}

#[test]
fn test_scores_are_validated() {
    assert_eq!(parse_score("3").unwrap(), Some(3));
    assert_eq!(parse_score("-").unwrap(), None);
    assert_eq!(parse_score("").unwrap(), None);
    assert!(matches!(parse_score("-1"), Err(CliError::InvalidScore(_))));
    assert!(matches!(parse_score("two"), Err(CliError::InvalidScore(_))));
    assert!(matches!(parse_score("1.5"), Err(CliError::InvalidScore(_))));
    assert!(matches!(
        parse_command(&args("record 1 -2 0")),
        Err(CliError::InvalidScore(_))
    ));
}

// =============================================================================
// Execution
// =============================================================================

#[test]
fn test_add_and_list() {
    let mut session = Session::open(MemoryStore::new());
    assert_eq!(run(&mut session, "add Ajax").unwrap(), "Added #1 Ajax");
    assert!(matches!(
        run(&mut session, "add Ajax"),
        Err(CliError::League(LeagueError::DuplicateName(_)))
    ));

    let listing = run(&mut session, "participants").unwrap();
    assert!(listing.contains("Ajax"));
}

#[test]
fn test_generate_needs_two_participants() {
    let mut session = session_with(&["Solo"]);
    assert!(matches!(
        run(&mut session, "generate"),
        Err(CliError::League(LeagueError::InsufficientParticipants { found: 1 }))
    ));
}

#[test]
fn test_generate_and_record() {
    let mut session = session_with(&["A", "B", "C"]);
    assert_eq!(
        run(&mut session, "generate").unwrap(),
        "Scheduled 3 matches over 3 rounds"
    );

    // Round 1 of three entrants is B vs C
    assert_eq!(
        run(&mut session, "record 1 2 1").unwrap(),
        "Recorded #1: B 2 - 1 C"
    );
    assert!(matches!(
        run(&mut session, "record 99 1 0"),
        Err(CliError::UnknownMatch(MatchId(99)))
    ));

    let table = run(&mut session, "standings").unwrap();
    let b_line = table.lines().position(|l| l.contains(" B ")).unwrap();
    let c_line = table.lines().position(|l| l.contains(" C ")).unwrap();
    assert!(b_line < c_line);
}

#[test]
fn test_standings_json() {
    let mut session = session_with(&["A", "B"]);
    run(&mut session, "generate").unwrap();
    run(&mut session, "record 1 1 0").unwrap();

    let json = run(&mut session, "standings --json").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["participant"]["name"], "A");
    assert_eq!(value[0]["position"], 1);
    assert_eq!(value[0]["stats"]["wins"], 1);
    assert_eq!(value[0]["stats"]["goalDiff"], 1);
    assert_eq!(value[0]["stats"]["points"], 3);
    assert_eq!(value[1]["stats"]["winRate"], 0.0);
}

#[test]
fn test_rename_and_remove() {
    let mut session = session_with(&["A", "B", "C"]);
    run(&mut session, "generate").unwrap();

    assert_eq!(run(&mut session, "rename 2 Bravo").unwrap(), "Renamed #2 to Bravo");
    assert!(matches!(
        run(&mut session, "rename 9 Nobody"),
        Err(CliError::UnknownParticipant(ParticipantId(9)))
    ));
    assert_eq!(
        run(&mut session, "remove 3").unwrap(),
        "Removed #3 and 2 match(es)"
    );
    assert_eq!(session.state().matches().len(), 1);
}

#[test]
fn test_criteria_commands() {
    let mut session = Session::open(MemoryStore::new());

    let listing = run(&mut session, "criteria add points").unwrap();
    assert!(listing.contains("4. Points"));
    assert_eq!(
        run(&mut session, "criteria add points").unwrap(),
        "Points (W3 D1 L0) is already in the chain"
    );

    run(&mut session, "criteria move 4 1").unwrap();
    assert_eq!(session.state().criteria().as_slice()[0], Criterion::Points);

    run(&mut session, "criteria remove 1").unwrap();
    assert!(!session.state().criteria().contains(Criterion::Points));

    assert!(matches!(
        run(&mut session, "criteria remove 9"),
        Err(CliError::InvalidPosition(9))
    ));
    assert!(matches!(
        run(&mut session, "criteria move 9 1"),
        Err(CliError::InvalidPosition(9))
    ));
}

#[test]
fn test_title() {
    let mut session = Session::open(MemoryStore::new());
    assert_eq!(
        run(&mut session, "title Winter Cup").unwrap(),
        "Title set to Winter Cup"
    );
    assert_eq!(run(&mut session, "title").unwrap(), "Title cleared");
}

#[test]
fn test_reset_requires_confirmation() {
    let mut session = session_with(&["A", "B"]);
    assert!(matches!(run(&mut session, "reset"), Err(CliError::Usage(_))));
    assert_eq!(session.state().participants().len(), 2);

    assert_eq!(run(&mut session, "reset --yes").unwrap(), "League reset");
    assert!(session.state().participants().is_empty());
    assert_eq!(session.store().blob(), None);
}

#[test]
fn test_help_lists_every_command() {
    let text = usage();
    for command in [
        "add", "rename", "remove", "title", "criteria", "generate", "record", "schedule", "matrix",
        "standings", "participants", "reset", "help",
    ] {
        assert!(text.contains(&format!("  {command}")), "{command}");
    }
}
