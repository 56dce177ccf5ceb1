//! Core game state machine
//!
//! This module contains the single authority over a session: the group
//! roster, the turn pointer, the opened-box set, the pending box, and the
//! session phase. The presentation layer drives it with a handful of
//! operations (start a session, open a box, resolve the outcome, reset) and
//! renders from the read-only snapshot it exposes.

use std::collections::HashSet;

use garde::Validate;
use itertools::Itertools;
use once_cell_serde::sync::OnceCell;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    boxes::{
        catalog::{BoxCatalog, BoxContent, BoxDefinition},
        id::BoxId,
    },
    config::GameOptions,
    constants::session::{MAX_GROUP_COUNT, MIN_GROUP_COUNT},
    group::{self, Group},
    scoreboard::{self, Summary},
};

/// The top-level session phase
///
/// A session moves `Setup -> Playing -> GameOver` and back to `Setup` when
/// a new game is requested. No other transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a session to be configured and started
    #[default]
    Setup,
    /// Groups are taking turns opening boxes
    Playing,
    /// Every group has used its turn quota; scores are final
    GameOver,
}

/// Errors reported for calls that violate the session contract
///
/// These indicate programming errors in the collaborating presentation
/// layer, not user races; ordinary races (double clicks, stale clicks) are
/// silent no-ops instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `start_session` was called with a group count the pools are not
    /// sized for
    #[error("unsupported group count {0}, expected {MIN_GROUP_COUNT} to {MAX_GROUP_COUNT}")]
    UnsupportedGroupCount(usize),
    /// The configured display pool cannot seat the requested group count
    #[error("display pool has {pool} entries, cannot seat {requested} groups")]
    PoolExhausted {
        /// Number of groups requested
        requested: usize,
        /// Number of entries in the configured pool
        pool: usize,
    },
    /// The operation is not legal in the current phase
    #[error("operation not allowed in the {0:?} phase")]
    WrongPhase(Phase),
}

/// The outcome of a resolved box, supplied by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
pub enum Outcome {
    /// A question was answered; `true` awards the box's points, `false`
    /// awards nothing
    Answered(bool),
    /// A fixed delta applied regardless of any answer, used for bonus and
    /// zonk boxes (the caller passes the box's own point value)
    Fixed(i32),
}

/// Inbound events accepted from the presentation layer
#[derive(Debug, Clone, Deserialize)]
pub enum IncomingMessage {
    /// Start a new session with the given number of groups
    StartSession(usize),
    /// A box was clicked
    OpenBox(BoxId),
    /// The pending box was resolved with this outcome
    Resolve(Outcome),
    /// Return to setup after a finished session
    NewGame,
}

/// Record of a single resolved turn, returned for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    /// The box that was resolved
    pub box_id: BoxId,
    /// The group the turn was attributed to
    pub group_id: usize,
    /// Signed points applied to that group's score
    pub points_awarded: i32,
}

/// Read-only snapshot of the session state for rendering
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Current phase
    pub phase: Phase,
    /// Groups in turn order
    pub groups: Vec<Group>,
    /// Index of the group whose turn it is
    pub active_group_index: usize,
    /// Resolved box ids in ascending order, for marking boxes completed
    pub opened_box_ids: Vec<BoxId>,
    /// The revealed box awaiting resolution, if any
    pub pending_box: Option<BoxDefinition>,
    /// Winning group ids; present only at game over
    pub winners: Option<Vec<usize>>,
}

/// The main game session struct
///
/// All session state is owned here and mutated only by the operations
/// below, each invoked in response to a single external event. Nothing
/// blocks or spawns work; every operation runs to completion.
#[derive(Debug, Serialize, Deserialize)]
pub struct Game {
    /// The injected content table, never mutated by the game
    catalog: BoxCatalog,
    /// Validated session configuration
    options: GameOptions,
    /// Session roster; order is turn order
    groups: Vec<Group>,
    /// Index into `groups` of the group whose turn it is
    active_group: usize,
    /// Ids of the boxes resolved this session
    opened: HashSet<BoxId>,
    /// The single box currently revealed and awaiting resolution
    pending: Option<BoxId>,
    /// Current phase
    phase: Phase,

    /// Winning group ids, computed once at game over (not serialized)
    #[serde(skip)]
    winners: OnceCell<Vec<usize>>,
}

impl Game {
    /// Creates a game in the `Setup` phase from a content table and options
    ///
    /// # Arguments
    ///
    /// * `catalog` - The read-only content table to play over
    /// * `options` - Turn quota and group display pool
    ///
    /// # Errors
    ///
    /// Returns the validation report if the options are rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kotak::{Game, GameOptions, builtin};
    ///
    /// let game = Game::new(builtin::catalog(), GameOptions::default()).unwrap();
    /// ```
    pub fn new(catalog: BoxCatalog, options: GameOptions) -> Result<Self, garde::Report> {
        options.validate()?;

        Ok(Self {
            catalog,
            options,
            groups: Vec::new(),
            active_group: 0,
            opened: HashSet::new(),
            pending: None,
            phase: Phase::Setup,
            winners: OnceCell::new(),
        })
    }

    /// Starts a session with `group_count` fresh groups
    ///
    /// Groups are created in pool order with zeroed scores and turn
    /// counters; the opened set and pending box are cleared and the first
    /// group becomes active.
    ///
    /// # Errors
    ///
    /// * `Error::WrongPhase` - The session is not in `Setup`
    /// * `Error::UnsupportedGroupCount` - The count is outside the
    ///   supported range
    /// * `Error::PoolExhausted` - The display pool is smaller than the
    ///   request
    pub fn start_session(&mut self, group_count: usize) -> Result<(), Error> {
        if self.phase != Phase::Setup {
            return Err(Error::WrongPhase(self.phase));
        }
        if !(MIN_GROUP_COUNT..=MAX_GROUP_COUNT).contains(&group_count) {
            return Err(Error::UnsupportedGroupCount(group_count));
        }
        if self.options.group_pool.len() < group_count {
            return Err(Error::PoolExhausted {
                requested: group_count,
                pool: self.options.group_pool.len(),
            });
        }

        self.groups = group::roster(&self.options.group_pool, group_count);
        self.opened.clear();
        self.pending = None;
        self.active_group = 0;
        self.phase = Phase::Playing;

        debug!(group_count, "session started");
        Ok(())
    }

    /// Reveals a box for the active group
    ///
    /// This only reveals; no score or turn changes until the box is
    /// resolved. The call is a silent no-op outside the `Playing` phase,
    /// for an unknown or already-resolved id, or while another box is
    /// pending (a single box is shown at a time, and the game enforces
    /// this independently of any UI gating).
    ///
    /// # Returns
    ///
    /// The revealed definition, or `None` when the call was ignored
    pub fn open_box(&mut self, box_id: BoxId) -> Option<&BoxDefinition> {
        if self.phase != Phase::Playing
            || self.pending.is_some()
            || self.opened.contains(&box_id)
            || !self.catalog.contains(box_id)
        {
            return None;
        }

        self.pending = Some(box_id);
        debug!(%box_id, group = self.active_group, "box opened");
        self.catalog.get(box_id)
    }

    /// Applies the outcome of the pending box and advances the turn order
    ///
    /// In one step: the active group's score takes the awarded points, its
    /// turn counter increments, the box joins the opened set, and the
    /// pending slot clears. If every group has then used its quota the
    /// session is over; otherwise the turn passes to the next group with
    /// turns left. A call with no pending box is a silent no-op.
    ///
    /// # Returns
    ///
    /// A record of the resolved turn, or `None` when the call was ignored
    pub fn resolve_box(&mut self, outcome: Outcome) -> Option<TurnRecord> {
        let box_id = self.pending.take()?;

        let points_awarded = match outcome {
            Outcome::Answered(correct) => {
                if correct {
                    self.catalog.get(box_id).map_or(0, BoxDefinition::points)
                } else {
                    0
                }
            }
            Outcome::Fixed(points) => points,
        };

        let group_id = self.active_group;
        let max_turns = self.options.max_turns_per_group;

        let active = &mut self.groups[group_id];
        active.score += i64::from(points_awarded);
        active.turns_used += 1;
        self.opened.insert(box_id);

        let all_finished = self
            .groups
            .iter()
            .all(|group| group.is_exhausted(max_turns));
        if all_finished {
            self.phase = Phase::GameOver;
            info!("all turn quotas used, session over");
        } else {
            self.active_group = self.next_eligible_group();
        }

        debug!(%box_id, group = group_id, points_awarded, "box resolved");
        Some(TurnRecord {
            box_id,
            group_id,
            points_awarded,
        })
    }

    /// Finds the next group with turns left
    ///
    /// Scans circularly from the slot after the active group for at most
    /// one full cycle and returns the first index whose turn counter is
    /// below the quota. The iteration bound keeps the scan total when every
    /// group is exhausted; the index returned in that case is never acted
    /// on because the session is already over.
    fn next_eligible_group(&self) -> usize {
        let count = self.groups.len();
        let max_turns = self.options.max_turns_per_group;

        let mut candidate = (self.active_group + 1) % count;
        for _ in 0..count {
            if !self.groups[candidate].is_exhausted(max_turns) {
                break;
            }
            candidate = (candidate + 1) % count;
        }
        candidate
    }

    /// Judges a submission against the pending question's answer key
    ///
    /// The submission is trimmed and compared exactly against the key's
    /// string form.
    ///
    /// # Returns
    ///
    /// The verdict, or `None` when no box is pending or the pending box is
    /// not a question
    pub fn check_answer(&self, submission: &str) -> Option<bool> {
        match &self.pending_box()?.content {
            BoxContent::Question(question) => Some(question.expected_answer.matches(submission)),
            BoxContent::Bonus(_) | BoxContent::Zonk(_) => None,
        }
    }

    /// Clears all session state back to the pre-session defaults
    ///
    /// The content table and options are untouched; only a finished
    /// session can be reset.
    ///
    /// # Errors
    ///
    /// * `Error::WrongPhase` - The session is not in `GameOver`
    pub fn reset_to_setup(&mut self) -> Result<(), Error> {
        if self.phase != Phase::GameOver {
            return Err(Error::WrongPhase(self.phase));
        }

        self.groups.clear();
        self.opened.clear();
        self.pending = None;
        self.active_group = 0;
        self.winners = OnceCell::new();
        self.phase = Phase::Setup;

        debug!("session reset to setup");
        Ok(())
    }

    /// Routes an inbound presentation event to the matching operation
    ///
    /// Events the contract treats as silent no-ops (stale box clicks,
    /// resolving with nothing pending) stay silent here too; contract
    /// violations surface as errors.
    ///
    /// # Errors
    ///
    /// Propagates the errors of `start_session` and `reset_to_setup`.
    pub fn receive_message(&mut self, message: IncomingMessage) -> Result<(), Error> {
        match message {
            IncomingMessage::StartSession(group_count) => self.start_session(group_count),
            IncomingMessage::OpenBox(box_id) => {
                let _ = self.open_box(box_id);
                Ok(())
            }
            IncomingMessage::Resolve(outcome) => {
                let _ = self.resolve_box(outcome);
                Ok(())
            }
            IncomingMessage::NewGame => self.reset_to_setup(),
        }
    }
}

// Read-only views
impl Game {
    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Session roster in turn order; empty outside a session
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Index of the group whose turn it is
    ///
    /// While the phase is `Playing` this always points at a group with
    /// turns left.
    pub fn active_group_index(&self) -> usize {
        self.active_group
    }

    /// The group whose turn it is, when a roster exists
    pub fn active_group(&self) -> Option<&Group> {
        self.groups.get(self.active_group)
    }

    /// The definition currently revealed and awaiting resolution
    pub fn pending_box(&self) -> Option<&BoxDefinition> {
        self.pending.and_then(|id| self.catalog.get(id))
    }

    /// Whether this box is the one currently revealed
    pub fn is_open(&self, box_id: BoxId) -> bool {
        self.pending == Some(box_id)
    }

    /// Whether this box has been resolved this session
    pub fn is_completed(&self, box_id: BoxId) -> bool {
        self.opened.contains(&box_id)
    }

    /// Ids of the boxes resolved this session, in ascending order
    pub fn opened_box_ids(&self) -> Vec<BoxId> {
        self.opened.iter().copied().sorted().collect()
    }

    /// The injected content table
    pub fn catalog(&self) -> &BoxCatalog {
        &self.catalog
    }

    /// The winning group ids, available once the session is over
    ///
    /// Computed on first access and cached until the next reset. Outside
    /// `GameOver` there are no winners yet.
    pub fn winners(&self) -> Option<&[usize]> {
        if self.phase != Phase::GameOver {
            return None;
        }
        Some(
            self.winners
                .get_or_init(|| scoreboard::compute_winners(&self.groups)),
        )
    }

    /// Roster ordered by descending score, for the game-over screen
    pub fn standings(&self) -> Vec<&Group> {
        scoreboard::standings(&self.groups)
    }

    /// Resolved-box statistics for the current session
    pub fn summary(&self) -> Summary {
        scoreboard::summarize(&self.catalog, self.opened.iter().copied())
    }

    /// Builds the snapshot the presentation layer renders from
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            groups: self.groups.clone(),
            active_group_index: self.active_group,
            opened_box_ids: self.opened_box_ids(),
            pending_box: self.pending_box().cloned(),
            winners: self.winners().map(<[usize]>::to_vec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxes::builtin;

    fn playing_game(group_count: usize) -> Game {
        let mut game = Game::new(builtin::catalog(), GameOptions::default()).unwrap();
        game.start_session(group_count).unwrap();
        game
    }

    #[test]
    fn test_new_game_starts_in_setup() {
        let game = Game::new(builtin::catalog(), GameOptions::default()).unwrap();
        assert_eq!(game.phase(), Phase::Setup);
        assert!(game.groups().is_empty());
        assert!(game.pending_box().is_none());
        assert!(game.winners().is_none());
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let mut options = GameOptions::default();
        options.max_turns_per_group = 0;
        assert!(Game::new(builtin::catalog(), options).is_err());
    }

    #[test]
    fn test_start_session_creates_fresh_roster() {
        let game = playing_game(3);

        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.groups().len(), 3);
        assert_eq!(game.active_group_index(), 0);
        assert_eq!(game.active_group().unwrap().name, "Kelompok A");
        for group in game.groups() {
            assert_eq!(group.score, 0);
            assert_eq!(group.turns_used, 0);
        }
    }

    #[test]
    fn test_start_session_rejects_unsupported_counts() {
        let mut game = Game::new(builtin::catalog(), GameOptions::default()).unwrap();
        assert_eq!(
            game.start_session(1),
            Err(Error::UnsupportedGroupCount(1))
        );
        assert_eq!(
            game.start_session(5),
            Err(Error::UnsupportedGroupCount(5))
        );
        assert_eq!(game.phase(), Phase::Setup);
    }

    #[test]
    fn test_start_session_rejects_wrong_phase() {
        let mut game = playing_game(2);
        assert_eq!(
            game.start_session(2),
            Err(Error::WrongPhase(Phase::Playing))
        );
    }

    #[test]
    fn test_open_box_reveals_without_scoring() {
        let mut game = playing_game(2);

        let definition = game.open_box(BoxId::new(1)).expect("box 1 exists");
        assert_eq!(definition.title, "Suhu Udara");

        assert!(game.is_open(BoxId::new(1)));
        assert!(!game.is_completed(BoxId::new(1)));
        assert_eq!(game.groups()[0].score, 0);
        assert_eq!(game.groups()[0].turns_used, 0);
    }

    #[test]
    fn test_open_box_noops() {
        let mut game = Game::new(builtin::catalog(), GameOptions::default()).unwrap();
        // Not playing yet
        assert!(game.open_box(BoxId::new(1)).is_none());

        game.start_session(2).unwrap();
        // Unknown id
        assert!(game.open_box(BoxId::new(99)).is_none());

        // A second open while one is pending is ignored
        assert!(game.open_box(BoxId::new(1)).is_some());
        assert!(game.open_box(BoxId::new(2)).is_none());
        assert!(game.is_open(BoxId::new(1)));

        // Reopening a resolved box is ignored for the rest of the session
        game.resolve_box(Outcome::Answered(false));
        assert!(game.open_box(BoxId::new(1)).is_none());
        assert!(game.is_completed(BoxId::new(1)));
    }

    #[test]
    fn test_resolve_without_pending_is_noop() {
        let mut game = playing_game(2);
        assert!(game.resolve_box(Outcome::Answered(true)).is_none());
        assert_eq!(game.groups()[0].turns_used, 0);
    }

    #[test]
    fn test_correct_answer_awards_points_and_passes_turn() {
        // Box 1 is a 10-point question
        let mut game = playing_game(2);
        game.open_box(BoxId::new(1)).unwrap();

        let record = game.resolve_box(Outcome::Answered(true)).unwrap();
        assert_eq!(record.group_id, 0);
        assert_eq!(record.points_awarded, 10);

        assert_eq!(game.groups()[0].score, 10);
        assert_eq!(game.groups()[0].turns_used, 1);
        assert_eq!(game.active_group_index(), 1);
        assert!(game.pending_box().is_none());
    }

    #[test]
    fn test_wrong_answer_awards_nothing_but_uses_the_turn() {
        let mut game = playing_game(2);
        game.open_box(BoxId::new(1)).unwrap();

        let record = game.resolve_box(Outcome::Answered(false)).unwrap();
        assert_eq!(record.points_awarded, 0);
        assert_eq!(game.groups()[0].score, 0);
        assert_eq!(game.groups()[0].turns_used, 1);
        assert_eq!(game.active_group_index(), 1);
    }

    #[test]
    fn test_zonk_penalty_applies_regardless_of_correctness() {
        // Box 4 is a -10 zonk
        let mut game = playing_game(2);
        game.open_box(BoxId::new(4)).unwrap();

        let record = game.resolve_box(Outcome::Fixed(-10)).unwrap();
        assert_eq!(record.points_awarded, -10);
        assert_eq!(game.groups()[0].score, -10);
    }

    #[test]
    fn test_game_over_exactly_when_all_quotas_used() {
        let mut game = playing_game(2);

        // Drive both groups to five turns each, then one more turn apiece
        for id in 1..=10 {
            game.open_box(BoxId::new(id)).unwrap();
            game.resolve_box(Outcome::Answered(false)).unwrap();
        }
        assert_eq!(game.groups()[0].turns_used, 5);
        assert_eq!(game.groups()[1].turns_used, 5);
        assert_eq!(game.phase(), Phase::Playing);

        // Group 0 takes its sixth turn; group 1 still has one left
        game.open_box(BoxId::new(11)).unwrap();
        game.resolve_box(Outcome::Fixed(100)).unwrap();
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.active_group_index(), 1);

        // Group 1 takes its sixth turn and the session ends
        game.open_box(BoxId::new(12)).unwrap();
        game.resolve_box(Outcome::Answered(true)).unwrap();
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn test_rotation_skips_exhausted_groups() {
        let mut game = playing_game(3);
        // Group 1 is out of turns; the scan must land on group 2
        game.groups[1].turns_used = game.options.max_turns_per_group;

        game.open_box(BoxId::new(1)).unwrap();
        game.resolve_box(Outcome::Answered(false)).unwrap();

        assert_eq!(game.active_group_index(), 2);
        assert_eq!(game.phase(), Phase::Playing);

        // And from group 2 it wraps around back to group 0
        game.open_box(BoxId::new(2)).unwrap();
        game.resolve_box(Outcome::Answered(false)).unwrap();
        assert_eq!(game.active_group_index(), 0);
    }

    #[test]
    fn test_scan_is_bounded_when_all_groups_exhaust_together() {
        let mut game = playing_game(2);
        let quota = game.options.max_turns_per_group;
        game.groups[0].turns_used = quota - 1;
        game.groups[1].turns_used = quota;

        game.open_box(BoxId::new(1)).unwrap();
        game.resolve_box(Outcome::Answered(false)).unwrap();

        // Everyone is exhausted; the session ended rather than spinning
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn test_winners_only_at_game_over_and_ties_shared() {
        let mut game = playing_game(2);
        assert!(game.winners().is_none());

        game.groups[0].score = 40;
        game.groups[1].score = 40;
        game.groups[0].turns_used = game.options.max_turns_per_group - 1;
        game.groups[1].turns_used = game.options.max_turns_per_group;

        game.open_box(BoxId::new(1)).unwrap();
        game.resolve_box(Outcome::Answered(false)).unwrap();

        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.winners().unwrap(), &[0, 1]);
    }

    #[test]
    fn test_check_answer_judges_pending_question() {
        let mut game = playing_game(2);
        assert!(game.check_answer("-5").is_none());

        game.open_box(BoxId::new(1)).unwrap();
        assert_eq!(game.check_answer(" -5 "), Some(true));
        assert_eq!(game.check_answer("5"), Some(false));

        game.resolve_box(Outcome::Answered(true)).unwrap();

        // A zonk has no answer to judge
        game.open_box(BoxId::new(4)).unwrap();
        assert!(game.check_answer("-10").is_none());
    }

    #[test]
    fn test_reset_requires_game_over_and_clears_session() {
        let mut game = playing_game(2);
        assert_eq!(
            game.reset_to_setup(),
            Err(Error::WrongPhase(Phase::Playing))
        );

        for group in &mut game.groups {
            group.turns_used = game.options.max_turns_per_group - 1;
        }
        game.open_box(BoxId::new(1)).unwrap();
        game.resolve_box(Outcome::Answered(false)).unwrap();
        game.open_box(BoxId::new(2)).unwrap();
        game.resolve_box(Outcome::Answered(false)).unwrap();
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(game.winners().is_some());

        game.reset_to_setup().unwrap();
        assert_eq!(game.phase(), Phase::Setup);
        assert!(game.groups().is_empty());
        assert!(game.opened_box_ids().is_empty());
        assert!(game.pending_box().is_none());
        assert!(game.winners().is_none());

        // A fresh session starts clean
        game.start_session(4).unwrap();
        assert_eq!(game.groups().len(), 4);
        assert!(game.open_box(BoxId::new(1)).is_some());
    }

    #[test]
    fn test_receive_message_routes_operations() {
        let mut game = Game::new(builtin::catalog(), GameOptions::default()).unwrap();

        game.receive_message(IncomingMessage::StartSession(2)).unwrap();
        assert_eq!(game.phase(), Phase::Playing);

        game.receive_message(IncomingMessage::OpenBox(BoxId::new(5))).unwrap();
        assert!(game.is_open(BoxId::new(5)));

        game.receive_message(IncomingMessage::Resolve(Outcome::Fixed(50)))
            .unwrap();
        assert_eq!(game.groups()[0].score, 50);

        // No-op events stay silent even when ignored
        game.receive_message(IncomingMessage::OpenBox(BoxId::new(99))).unwrap();
        game.receive_message(IncomingMessage::Resolve(Outcome::Answered(true)))
            .unwrap();

        // Contract violations surface
        assert!(game.receive_message(IncomingMessage::NewGame).is_err());
    }

    #[test]
    fn test_incoming_message_deserialization() {
        let start: IncomingMessage = serde_json::from_str(r#"{"StartSession":3}"#).unwrap();
        assert!(matches!(start, IncomingMessage::StartSession(3)));

        let open: IncomingMessage = serde_json::from_str(r#"{"OpenBox":7}"#).unwrap();
        assert!(matches!(open, IncomingMessage::OpenBox(id) if id == BoxId::new(7)));

        let resolve: IncomingMessage =
            serde_json::from_str(r#"{"Resolve":{"Answered":true}}"#).unwrap();
        assert!(matches!(
            resolve,
            IncomingMessage::Resolve(Outcome::Answered(true))
        ));
    }

    #[test]
    fn test_outcome_from_conversions() {
        assert_eq!(Outcome::from(true), Outcome::Answered(true));
        assert_eq!(Outcome::from(-10), Outcome::Fixed(-10));
    }

    #[test]
    fn test_snapshot_reflects_session_state() {
        let mut game = playing_game(2);
        game.open_box(BoxId::new(5)).unwrap();

        let snapshot = game.snapshot();
        assert_eq!(snapshot.phase, Phase::Playing);
        assert_eq!(snapshot.groups.len(), 2);
        assert_eq!(snapshot.active_group_index, 0);
        assert!(snapshot.opened_box_ids.is_empty());
        assert_eq!(snapshot.pending_box.unwrap().title, "BONUS!");
        assert!(snapshot.winners.is_none());

        let serialized = serde_json::to_string(&game.snapshot()).unwrap();
        assert!(serialized.contains("\"phase\":\"Playing\""));
        // Absent winners are omitted, not null
        assert!(!serialized.contains("winners"));
    }

    #[test]
    fn test_opened_box_ids_sorted() {
        let mut game = playing_game(2);
        for id in [9, 3, 12] {
            game.open_box(BoxId::new(id)).unwrap();
            game.resolve_box(Outcome::Answered(false)).unwrap();
        }
        let ids: Vec<u32> = game.opened_box_ids().iter().map(|id| id.value()).collect();
        assert_eq!(ids, vec![3, 9, 12]);
    }

    #[test]
    fn test_game_serialization_round_trip() {
        let mut game = playing_game(2);
        game.open_box(BoxId::new(1)).unwrap();
        game.resolve_box(Outcome::Answered(true)).unwrap();
        game.open_box(BoxId::new(4)).unwrap();

        let serialized = serde_json::to_string(&game).unwrap();
        let restored: Game = serde_json::from_str(&serialized).unwrap();

        assert_eq!(restored.phase(), Phase::Playing);
        assert_eq!(restored.groups()[0].score, 10);
        assert!(restored.is_completed(BoxId::new(1)));
        assert!(restored.is_open(BoxId::new(4)));
        assert_eq!(restored.active_group_index(), 1);
    }
}
