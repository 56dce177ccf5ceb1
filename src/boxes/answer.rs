//! Answer keys and answer matching
//!
//! This module defines the expected-answer value attached to question boxes
//! and the comparison applied to player submissions. Matching is strict:
//! the submission is trimmed of surrounding whitespace and compared exactly
//! against the key's string form, with no numeric tolerance and no case
//! folding.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The expected answer attached to a question box
///
/// Most of the built-in material uses numeric keys, but textual keys are
/// supported; either way the comparison happens on the string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum AnswerKey {
    /// A numeric answer (`-5`, `300000`, ...)
    Number(i64),
    /// A textual answer compared verbatim
    Text(String),
}

/// Normalizes a submission for comparison
///
/// Only leading and trailing whitespace is removed.
fn normalize(submission: &str) -> &str {
    submission.trim()
}

impl AnswerKey {
    /// Checks a player's free-text submission against this key
    ///
    /// # Arguments
    ///
    /// * `submission` - The raw text the player typed
    ///
    /// # Returns
    ///
    /// `true` if the trimmed submission equals the key's string form
    pub fn matches(&self, submission: &str) -> bool {
        normalize(submission) == self.to_string()
    }
}

impl Display for AnswerKey {
    /// Formats the key the way it must be typed to count as correct
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for AnswerKey {
    /// Builds a textual key from a string slice
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
