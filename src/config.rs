//! Session configuration
//!
//! This module defines the configuration knobs of a game session: the turn
//! quota per group and the ordered display pool that assigns a name and a
//! color tag to each group position. The pool replaces bare parallel arrays
//! with a validated mapping so a session request can never index past the
//! configured entries.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::constants::{
    group::{MAX_COLOR_TAG_LENGTH, MAX_NAME_LENGTH},
    session::{DEFAULT_MAX_TURNS_PER_GROUP, MAX_GROUP_COUNT},
};

/// Display identity assigned to a group position at session start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GroupProfile {
    /// Display name for the group
    #[garde(length(chars, min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,
    /// Opaque color tag handed through to the presentation layer
    #[garde(length(chars, min = 1, max = MAX_COLOR_TAG_LENGTH))]
    pub color_tag: String,
}

impl GroupProfile {
    /// Creates a profile from a name and a color tag
    pub fn new(name: impl Into<String>, color_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color_tag: color_tag.into(),
        }
    }
}

/// Global configuration options for a game session
///
/// Options are validated once when the game is constructed; afterwards they
/// are read-only for the rest of the process.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GameOptions {
    /// Number of turns each group gets before the session ends
    #[garde(range(min = 1))]
    pub max_turns_per_group: usize,
    /// Ordered pool of display identities, indexed by group position
    ///
    /// Must cover the largest supported group count so a session request
    /// can never run out of entries.
    #[garde(length(min = MAX_GROUP_COUNT), dive)]
    pub group_pool: Vec<GroupProfile>,
}

impl Default for GameOptions {
    /// The classroom defaults: six turns per group and the Kelompok A-D pool
    fn default() -> Self {
        Self {
            max_turns_per_group: DEFAULT_MAX_TURNS_PER_GROUP,
            group_pool: vec![
                GroupProfile::new("Kelompok A", "bg-rose-500"),
                GroupProfile::new("Kelompok B", "bg-blue-500"),
                GroupProfile::new("Kelompok C", "bg-emerald-500"),
                GroupProfile::new("Kelompok D", "bg-amber-500"),
            ],
        }
    }
}
