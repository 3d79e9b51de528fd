//! Standings: participants ordered by the criteria chain
//!
//! Each pair is compared criterion by criterion until one separates them.
//! Head-to-head is resolved pairwise at comparison time, so three or more
//! participants tied in a win cycle have no transitive order; the result then
//! depends on the merge order and is accepted as is.

use serde::Serialize;
use std::cmp::Ordering;

use crate::criteria::{CriteriaChain, Criterion};
use crate::stats::{compute_stats, head_to_head, HeadToHead, Stats};
use crate::types::{Match, Participant};

/// One row of the standings table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based table position
    pub position: usize,
    pub participant: Participant,
    pub stats: Stats,
}

/// Rank `participants` using `chain`.
///
/// Participants tied on every criterion keep their input order.
pub fn rank(participants: &[Participant], matches: &[Match], chain: &CriteriaChain) -> Vec<Standing> {
    let stats = compute_stats(participants, matches);

    let mut rows: Vec<(Participant, Stats)> = participants
        .iter()
        .map(|p| (p.clone(), stats.get(&p.id).copied().unwrap_or_default()))
        .collect();

    merge_sort_by(&mut rows, |(pa, sa), (pb, sb)| {
        chain
            .iter()
            .map(|criterion| compare(criterion, pa, sa, pb, sb, matches))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    });

    rows.into_iter()
        .enumerate()
        .map(|(i, (participant, stats))| Standing {
            position: i + 1,
            participant,
            stats,
        })
        .collect()
}

/// Order of `a` relative to `b` under one criterion; `Less` means `a` ranks higher
pub fn compare(
    criterion: Criterion,
    a: &Participant,
    sa: &Stats,
    b: &Participant,
    sb: &Stats,
    matches: &[Match],
) -> Ordering {
    match criterion {
        Criterion::Wins => sb.wins.cmp(&sa.wins),
        Criterion::WinRate => sb.win_rate().total_cmp(&sa.win_rate()),
        Criterion::GoalDiff => sb.goal_diff().cmp(&sa.goal_diff()),
        Criterion::GoalsFor => sb.goals_for.cmp(&sa.goals_for),
        Criterion::GoalsAgainst => sa.goals_against.cmp(&sb.goals_against),
        Criterion::Points => sb.points().cmp(&sa.points()),
        Criterion::HeadToHead => match head_to_head(matches, a.id, b.id) {
            HeadToHead::AWin => Ordering::Less,
            HeadToHead::BWin => Ordering::Greater,
            HeadToHead::None => Ordering::Equal,
        },
    }
}

/// Stable top-down merge sort.
///
/// `slice::sort_by` may panic when the comparator is not a total order,
/// which head-to-head cycles produce; this one never does.
fn merge_sort_by<T: Clone, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }
    let mut buffer = items.to_vec();
    sort_range(items, &mut buffer, &mut compare);
}

fn sort_range<T: Clone, F>(items: &mut [T], buffer: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        let (left_buf, right_buf) = buffer.split_at_mut(mid);
        sort_range(left, left_buf, compare);
        sort_range(right, right_buf, compare);
    }

    buffer[..len].clone_from_slice(items);
    let (left, right) = buffer[..len].split_at(mid);
    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        // Take from the right run only when it strictly ranks higher
        let take_right = i == left.len()
            || (j < right.len() && compare(&right[j], &left[i]) == Ordering::Less);
        if take_right {
            *slot = right[j].clone();
            j += 1;
        } else {
            *slot = left[i].clone();
            i += 1;
        }
    }
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod ranking_tests;
