//! Ranking criteria and the user-ordered criteria chain

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A ranking factor that can take part in the criteria chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    Wins,
    WinRate,
    GoalDiff,
    GoalsFor,
    GoalsAgainst,
    Points,
    HeadToHead,
}

/// How a criterion orders two participants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Higher value ranks higher
    Descending,
    /// Lower value ranks higher
    Ascending,
    /// Decided by the direct match between the two participants
    Pairwise,
}

impl Criterion {
    /// Every supported criterion, in selection order
    pub const ALL: [Criterion; 7] = [
        Criterion::Wins,
        Criterion::WinRate,
        Criterion::GoalDiff,
        Criterion::GoalsFor,
        Criterion::GoalsAgainst,
        Criterion::Points,
        Criterion::HeadToHead,
    ];

    /// Key used in saved state, config files and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Criterion::Wins => "wins",
            Criterion::WinRate => "winRate",
            Criterion::GoalDiff => "goalDiff",
            Criterion::GoalsFor => "goalsFor",
            Criterion::GoalsAgainst => "goalsAgainst",
            Criterion::Points => "points",
            Criterion::HeadToHead => "headToHead",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Wins => "Wins",
            Criterion::WinRate => "Win rate",
            Criterion::GoalDiff => "Goal difference",
            Criterion::GoalsFor => "Goals for",
            Criterion::GoalsAgainst => "Goals against",
            Criterion::Points => "Points (W3 D1 L0)",
            Criterion::HeadToHead => "Head-to-head",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Criterion::GoalsAgainst => Direction::Ascending,
            Criterion::HeadToHead => Direction::Pairwise,
            _ => Direction::Descending,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown criterion key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown criterion `{0}`")]
pub struct UnknownCriterion(pub String);

impl FromStr for Criterion {
    type Err = UnknownCriterion;

    /// Accepts the camelCase key as well as snake_case and any letter case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Criterion::ALL
            .into_iter()
            .find(|c| c.key().to_lowercase() == wanted)
            .ok_or_else(|| UnknownCriterion(s.to_string()))
    }
}

/// Ordered, duplicate-free list of criteria applied in priority order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CriteriaChain(Vec<Criterion>);

impl Default for CriteriaChain {
    fn default() -> Self {
        Self(vec![Criterion::Wins, Criterion::WinRate, Criterion::GoalDiff])
    }
}

impl CriteriaChain {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a chain, keeping only the first occurrence of each criterion
    pub fn from_criteria(criteria: impl IntoIterator<Item = Criterion>) -> Self {
        let mut chain = Self::empty();
        for criterion in criteria {
            chain.add(criterion);
        }
        chain
    }

    pub fn as_slice(&self) -> &[Criterion] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Criterion> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, criterion: Criterion) -> bool {
        self.0.contains(&criterion)
    }

    /// Append a criterion. Returns false if it is already in the chain.
    pub fn add(&mut self, criterion: Criterion) -> bool {
        if self.contains(criterion) {
            return false;
        }
        self.0.push(criterion);
        true
    }

    /// Remove the criterion at `index`
    pub fn remove(&mut self, index: usize) -> Option<Criterion> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Criteria not yet in the chain, in registry order
    pub fn available(&self) -> Vec<Criterion> {
        Criterion::ALL
            .into_iter()
            .filter(|c| !self.contains(*c))
            .collect()
    }
}

impl<'a> IntoIterator for &'a CriteriaChain {
    type Item = Criterion;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Criterion>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// Move the criterion at `from` so that it ends up at `to`.
///
/// `to` past the end places the criterion last. An out-of-range `from`
/// returns the chain unchanged.
pub fn move_criterion(chain: &CriteriaChain, from: usize, to: usize) -> CriteriaChain {
    let mut items = chain.0.clone();
    if from >= items.len() {
        return chain.clone();
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
    CriteriaChain(items)
}

#[cfg(test)]
#[path = "criteria_tests.rs"]
mod criteria_tests;
