//! Immutable history snapshots.

use super::{Board, Location};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A board configuration plus the location of the move that produced it.
///
/// Snapshots are never mutated once appended to history. The initial
/// snapshot is the empty board and carries no location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// Where the move landed; `None` for game start.
    location: Option<Location>,
}

impl Snapshot {
    /// The empty board at game start.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    /// A snapshot produced by a move at `location`.
    pub(super) fn after_move(board: Board, location: Location) -> Self {
        Self {
            board,
            location: Some(location),
        }
    }
}
