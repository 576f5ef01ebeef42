//! Outcomes of submitting a move.
//!
//! A rejected move is not an error: the presentation layer normally
//! disables the control, so a rejection only means the call had no
//! effect. It is still reported explicitly so callers and tests can
//! tell the two cases apart.

use super::{Location, Player, Position};
use serde::{Deserialize, Serialize};

/// Result of [`GameSession::submit_move`](super::GameSession::submit_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveOutcome {
    /// The move was recorded as a new history step.
    #[display("{player} played {location} (move #{step})")]
    Applied {
        /// Step index of the new snapshot.
        step: usize,
        /// Who moved.
        player: Player,
        /// Where the mark landed.
        location: Location,
    },
    /// The move had no effect.
    #[display("Move rejected: {_0}")]
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Returns true if the move changed the session.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }

    /// Returns the rejection reason, if the move was rejected.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Applied { .. } => None,
            MoveOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0.label())]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("game already won by {_0}")]
    GameOver(Player),
}
