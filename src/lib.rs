//! # Kotak Game Library
//!
//! This library provides the core logic for the kotak classroom quiz game:
//! groups take turns opening numbered boxes that hide a math question, a
//! bonus, or a zonk penalty, scoring points until every group has used its
//! turn quota; the group(s) with the highest score win.
//!
//! The crate owns exactly two things: the turn-rotation and scoring state
//! machine ([`game::Game`]) and the immutable box content table
//! ([`boxes::catalog::BoxCatalog`]), injected at startup so content can be
//! swapped without touching the game logic. Rendering is a collaborator
//! concern: a presentation layer feeds [`game::IncomingMessage`] events in
//! and renders from [`game::Snapshot`] values out. Everything is
//! single-threaded and synchronous; each operation runs to completion
//! before the next event is accepted.
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod boxes;
pub mod config;
pub mod constants;
pub mod game;
pub mod group;
pub mod scoreboard;

pub use boxes::{builtin, catalog::BoxCatalog, id::BoxId};
pub use config::GameOptions;
pub use game::{Game, IncomingMessage, Outcome, Phase, Snapshot};
