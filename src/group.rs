//! Group records and roster construction
//!
//! This module defines the per-group session record and the construction of
//! a fresh roster from the configured display pool. Group identity is the
//! position in the roster, which is also the turn order.

use serde::{Deserialize, Serialize};

use crate::config::GroupProfile;

/// One competing group's session record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Position-derived identity, unique within the session
    pub id: usize,
    /// Display name taken from the configured pool
    pub name: String,
    /// Color tag taken from the configured pool
    pub color_tag: String,
    /// Accumulated score; changes only through resolved boxes
    pub score: i64,
    /// Number of turns this group has used so far
    pub turns_used: usize,
}

impl Group {
    /// Creates a fresh group from a pool entry
    fn from_profile(id: usize, profile: &GroupProfile) -> Self {
        Self {
            id,
            name: profile.name.clone(),
            color_tag: profile.color_tag.clone(),
            score: 0,
            turns_used: 0,
        }
    }

    /// Whether the group has used its whole turn quota
    pub fn is_exhausted(&self, max_turns: usize) -> bool {
        self.turns_used >= max_turns
    }
}

/// Builds a session roster from the head of the configured pool
///
/// The caller guarantees the pool covers `count` entries; ids are assigned
/// from position and double as the turn order.
pub(crate) fn roster(pool: &[GroupProfile], count: usize) -> Vec<Group> {
    pool.iter()
        .take(count)
        .enumerate()
        .map(|(id, profile)| Group::from_profile(id, profile))
        .collect()
}
