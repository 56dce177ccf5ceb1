//! Box identity
//!
//! This module provides the identifier type for boxes in the content table.
//! Ids are small positive integers chosen by the content author; they are
//! what the presentation layer hands back when a box is clicked.

use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// A stable identifier for a box in the content table
///
/// Ids are unique within a catalog and never reused during a session. They
/// serialize as plain numbers so content tables stay hand-editable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BoxId(u32);

impl BoxId {
    /// Wraps a raw id value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw id value
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Display for BoxId {
    /// Formats the id as its decimal value
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BoxId {
    /// Wraps a raw id value (same as `new()`)
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl FromStr for BoxId {
    type Err = ParseIntError;

    /// Parses an id from its decimal string representation
    ///
    /// # Errors
    ///
    /// Returns a `ParseIntError` if the string is not a valid decimal
    /// number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
