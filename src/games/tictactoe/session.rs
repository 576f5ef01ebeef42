//! Game session: move history, time travel and display order.

use super::action::{MoveOutcome, Rejection};
use super::invariants::{InvariantSet, TimeTravelInvariants};
use super::projection::{MoveEntry, Projection, SortOrder, Status};
use super::rules;
use super::snapshot::Snapshot;
use super::{Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// An interactive game with a full, navigable move history.
///
/// The session owns every snapshot since game start, a cursor naming the
/// step on display, whose turn it is at that step, and the order in
/// which the move list is enumerated. Rules questions are delegated to
/// [`rules`]; the session only decides what to record.
///
/// Jumping back and then moving discards every step after the cursor.
/// There is no redo once a new branch has been started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    history: Vec<Snapshot>,
    cursor: usize,
    x_is_next: bool,
    ascending: bool,
}

impl GameSession {
    /// Creates a session at game start with ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(SortOrder::Ascending)
    }

    /// Creates a session at game start with the given move list order.
    #[instrument]
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            history: vec![Snapshot::initial()],
            cursor: 0,
            x_is_next: true,
            ascending: order == SortOrder::Ascending,
        }
    }

    /// Builds a session from raw parts without checking invariants.
    #[cfg(test)]
    pub(crate) fn from_parts(
        history: Vec<Snapshot>,
        cursor: usize,
        x_is_next: bool,
        ascending: bool,
    ) -> Self {
        Self {
            history,
            cursor,
            x_is_next,
            ascending,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// Every recorded snapshot on the active branch.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the step on display.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether X moves next from the displayed step.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Whether the move list is enumerated from game start.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Move list order.
    pub fn order(&self) -> SortOrder {
        SortOrder::from_ascending(self.ascending)
    }

    /// The snapshot on display.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.cursor]
    }

    /// Player whose turn it is at the displayed step.
    pub fn to_move(&self) -> Player {
        Player::from_x_is_next(self.x_is_next)
    }

    /// Winner of the displayed board, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(self.current().board())
    }

    /// Status of the displayed step.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn status(&self) -> Status {
        let board = self.current().board();
        if let Some(player) = rules::winner(board) {
            Status::Winner(player)
        } else if rules::is_draw(board) {
            Status::Draw
        } else {
            Status::NextPlayer(self.to_move())
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark at cell `index` (0-8).
    ///
    /// Rejected without effect if the displayed board already has a
    /// winner or the cell is occupied. Otherwise every step after the
    /// cursor is discarded, the new snapshot is appended, the cursor
    /// moves onto it and the turn passes.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a board index.
    #[track_caller]
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.to_move()))]
    pub fn submit_move(&mut self, index: usize) -> MoveOutcome {
        let Some(pos) = Position::from_index(index) else {
            panic!("cell index {index} out of range 0..9");
        };
        self.play(pos)
    }

    /// Typed form of [`submit_move`](Self::submit_move).
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> MoveOutcome {
        let current = *self.current();

        if let Some(winner) = rules::winner(current.board()) {
            debug!(%winner, "Ignoring move on decided board");
            return MoveOutcome::Rejected(Rejection::GameOver(winner));
        }
        if !current.board().is_empty(pos) {
            debug!(position = %pos, "Ignoring move on occupied square");
            return MoveOutcome::Rejected(Rejection::SquareOccupied(pos));
        }

        let discarded = self.history.len() - (self.cursor + 1);
        if discarded > 0 {
            info!(discarded, from_step = self.cursor, "Branching history");
        }
        self.history.truncate(self.cursor + 1);

        let player = self.to_move();
        let board = current.board().with_mark(pos, player);
        let location = rules::location_of(pos.to_index());
        self.history.push(Snapshot::after_move(board, location));
        self.cursor = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;

        info!(step = self.cursor, %player, %location, "Move recorded");
        self.debug_check();

        MoveOutcome::Applied {
            step: self.cursor,
            player,
            location,
        }
    }

    /// Moves the cursor to `step` without touching history.
    ///
    /// Whose turn it is gets recomputed from the step parity: turns
    /// strictly alternate from X at game start on every branch.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not an index into history.
    #[track_caller]
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "step {step} out of range 0..{}",
            self.history.len()
        );
        self.cursor = step;
        self.x_is_next = step % 2 == 0;
        debug!(step, x_is_next = self.x_is_next, "Jumped");
        self.debug_check();
    }

    /// Flips the move list order. Game state is unaffected.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(order = %self.order(), "Toggled sort order");
    }

    /// Starts a new game, keeping the move list order.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if self.history.len() > 1 {
            warn!(steps = self.history.len() - 1, "Discarding game history");
        }
        *self = Self::with_order(self.order());
    }

    // ─────────────────────────────────────────────────────────────
    //  Projection
    // ─────────────────────────────────────────────────────────────

    /// Everything a renderer needs to draw the session.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn projection(&self) -> Projection {
        let order = self.order();
        let moves = order
            .steps(self.history.len())
            .map(|step| {
                MoveEntry::new(
                    step,
                    *self.history[step].location(),
                    step == self.cursor,
                )
            })
            .collect();

        Projection::new(
            *self.current().board(),
            self.status(),
            moves,
            self.cursor,
            order,
        )
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = TimeTravelInvariants::check_all(self)
        {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Session invariants violated: {descriptions}");
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
