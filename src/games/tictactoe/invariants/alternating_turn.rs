//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameSession, Player, Position, Square};
use super::Invariant;

/// Invariant: players alternate turns starting with X.
///
/// The mark added at step `k` belongs to X when `k` is odd and to O when
/// it is even, and the turn at the cursor matches the cursor parity.
/// This is what lets a jump recompute whose turn it is from the step
/// number alone.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(game: &GameSession) -> bool {
        let marks_alternate = game.history().windows(2).enumerate().all(|(k, pair)| {
            let expected = if k % 2 == 0 { Player::X } else { Player::O };
            Position::ALL.into_iter().all(|pos| {
                let (before, after) = (pair[0].board().get(pos), pair[1].board().get(pos));
                before == after || after == Square::Occupied(expected)
            })
        });

        marks_alternate
            && game.cursor() < game.history().len()
            && game.x_is_next() == (game.cursor() % 2 == 0)
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
