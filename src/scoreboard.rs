//! Win determination and end-of-game views
//!
//! This module holds the pure functions computed over the final roster:
//! the winning subset, the descending standings for the game-over screen,
//! and the per-kind tally of resolved boxes.

use std::cmp::Reverse;

use enum_map::EnumMap;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    boxes::{
        catalog::{BoxCatalog, BoxKind},
        id::BoxId,
    },
    group::Group,
};

/// Returns the ids of the groups holding the session's best score
///
/// Every group whose score equals the maximum is a winner, so ties produce
/// multiple winners and a three-way tie returns all three. There is no
/// tiebreaker. The result is empty only for an empty roster.
pub fn compute_winners(groups: &[Group]) -> Vec<usize> {
    let Some(best) = groups.iter().map(|group| group.score).max() else {
        return Vec::new();
    };
    groups
        .iter()
        .filter(|group| group.score == best)
        .map(|group| group.id)
        .collect()
}

/// Returns the roster ordered by descending score
///
/// Groups with equal scores keep their roster order.
pub fn standings(groups: &[Group]) -> Vec<&Group> {
    groups
        .iter()
        .sorted_by_key(|group| Reverse(group.score))
        .collect()
}

/// Statistics over the boxes resolved during a session
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Total boxes resolved
    pub opened_total: usize,
    /// Resolved boxes broken down by kind
    pub opened_by_kind: EnumMap<BoxKind, usize>,
}

/// Tallies an opened-id set against the catalog
pub fn summarize(catalog: &BoxCatalog, opened: impl Iterator<Item = BoxId>) -> Summary {
    let mut opened_by_kind: EnumMap<BoxKind, usize> = EnumMap::default();
    let mut opened_total = 0;

    for id in opened {
        if let Some(definition) = catalog.get(id) {
            opened_by_kind[definition.kind()] += 1;
            opened_total += 1;
        }
    }

    Summary {
        opened_total,
        opened_by_kind,
    }
}
