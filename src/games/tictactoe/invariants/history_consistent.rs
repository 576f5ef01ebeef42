//! History consistency invariant: nothing is recorded after a win.

use super::super::{GameSession, rules};
use super::Invariant;

/// Invariant: a decided board is always the last step of its branch.
///
/// Moves on a board with a winner are rejected, so no snapshot may
/// follow one.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(game: &GameSession) -> bool {
        let history = game.history();
        history
            .iter()
            .take(history.len().saturating_sub(1))
            .all(|snapshot| rules::winner(snapshot.board()).is_none())
    }

    fn description() -> &'static str {
        "No move is recorded after a win"
    }
}
