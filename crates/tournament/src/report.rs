//! Plain-text rendering of a league

use league_core::{Cell, Match, ParticipantId, TournamentState};

const NAME_WIDTH: usize = 20;

fn heading(state: &TournamentState, report: &mut String) {
    if !state.title().is_empty() {
        report.push_str(&format!("=== {} ===\n\n", state.title()));
    }
}

fn name_of(state: &TournamentState, id: ParticipantId) -> &str {
    state.participant(id).map_or("?", |p| p.name.as_str())
}

fn score_text(m: &Match) -> String {
    let side = |score: Option<u32>| score.map_or_else(|| "?".to_string(), |s| s.to_string());
    match (m.team1_score, m.team2_score) {
        (None, None) => "vs".to_string(),
        (s1, s2) => format!("{} - {}", side(s1), side(s2)),
    }
}

fn signed(value: i64) -> String {
    if value >= 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

/// Numbered participant list in entry order
pub fn participants_report(state: &TournamentState) -> String {
    let mut report = String::new();
    heading(state, &mut report);

    if state.participants().is_empty() {
        report.push_str("No participants yet.\n");
        return report;
    }

    report.push_str(&format!("Participants ({}):\n", state.participants().len()));
    for p in state.participants() {
        report.push_str(&format!("  #{:<4} {}\n", p.id, p.name));
    }
    report
}

/// Fixtures grouped by round with their scores
pub fn schedule_report(state: &TournamentState) -> String {
    let mut report = String::new();
    heading(state, &mut report);

    let rounds = state.rounds();
    if rounds.is_empty() {
        report.push_str("No matches scheduled.\n");
        return report;
    }

    for (round, matches) in &rounds {
        report.push_str(&format!("Round {round}\n"));
        for m in matches {
            report.push_str(&format!(
                "  [#{:<3}] {:<w$} {:^7} {}\n",
                m.id,
                name_of(state, m.team1_id),
                score_text(m),
                name_of(state, m.team2_id),
                w = NAME_WIDTH
            ));
        }
        report.push('\n');
    }

    let progress = state.progress();
    report.push_str(&format!("Completed {}/{}\n", progress.completed, progress.total));
    report
}

/// Cross table: each row shows that participant's result against each column
pub fn matrix_report(state: &TournamentState) -> String {
    let mut report = String::new();
    heading(state, &mut report);

    let matrix = state.results_matrix();
    if matrix.is_empty() {
        report.push_str("No participants yet.\n");
        return report;
    }

    report.push_str(&format!("{:<w$}", "", w = NAME_WIDTH + 4));
    for col in 1..=matrix.participants.len() {
        report.push_str(&format!(" {col:>7}"));
    }
    report.push('\n');
    report.push_str(&"-".repeat(NAME_WIDTH + 4 + 8 * matrix.participants.len()));
    report.push('\n');

    for (row, p) in matrix.participants.iter().enumerate() {
        report.push_str(&format!("{:>2}. {:<w$}", row + 1, p.name, w = NAME_WIDTH));
        for cells in &matrix.cells[row] {
            let text = match cells {
                Cell::Own | Cell::Pending => "-".to_string(),
                Cell::Played {
                    scored,
                    conceded,
                    outcome,
                } => format!("{} {}-{}", outcome.symbol(), scored, conceded),
            };
            report.push_str(&format!(" {text:>7}"));
        }
        report.push('\n');
    }
    report
}

/// Standings table under the current criteria chain
pub fn standings_report(state: &TournamentState) -> String {
    let mut report = String::new();
    heading(state, &mut report);

    report.push_str(&format!(
        "{:>3} {:<w$} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>6} {:>4}\n",
        "Pos",
        "Name",
        "P",
        "W",
        "D",
        "L",
        "GF",
        "GA",
        "GD",
        "Win%",
        "Pts",
        w = NAME_WIDTH
    ));
    report.push_str(&"-".repeat(NAME_WIDTH + 47));
    report.push('\n');

    for row in state.standings() {
        let s = &row.stats;
        report.push_str(&format!(
            "{:>3} {:<w$} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>6.1} {:>4}\n",
            row.position,
            row.participant.name,
            s.matches,
            s.wins,
            s.draws,
            s.losses,
            s.goals_for,
            s.goals_against,
            signed(s.goal_diff()),
            s.win_rate() * 100.0,
            s.points(),
            w = NAME_WIDTH
        ));
    }

    let chain: Vec<&str> = state.criteria().iter().map(|c| c.label()).collect();
    if chain.is_empty() {
        report.push_str("\nRanked by: entry order\n");
    } else {
        report.push_str(&format!("\nRanked by: {}\n", chain.join(", ")));
    }
    report
}

/// The active criteria chain, numbered from 1, then what can still be added
pub fn criteria_report(state: &TournamentState) -> String {
    let mut report = String::from("Ranking criteria:\n");
    if state.criteria().is_empty() {
        report.push_str("  (none, entry order)\n");
    }
    for (i, criterion) in state.criteria().iter().enumerate() {
        report.push_str(&format!("  {}. {} ({})\n", i + 1, criterion.label(), criterion.key()));
    }

    let available = state.criteria().available();
    if !available.is_empty() {
        report.push_str("\nAvailable:\n");
        for criterion in available {
            report.push_str(&format!("  {:<14} {}\n", criterion.key(), criterion.label()));
        }
    }
    report
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
