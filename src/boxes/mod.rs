//! Box content domain
//!
//! This module contains everything about the content the game is played
//! over: box identity, answer keys and matching, the validated content
//! table, and the built-in classroom deck.

pub mod answer;
pub mod builtin;
pub mod catalog;
pub mod id;
