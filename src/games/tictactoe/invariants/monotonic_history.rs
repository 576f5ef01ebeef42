//! Monotonic history invariant: each step adds exactly one mark.

use super::super::{GameSession, Position, Square};
use super::Invariant;

/// Invariant: history grows one mark at a time from an empty board.
///
/// Step 0 is the empty board with no location. Every later step differs
/// from its predecessor in exactly one square, which went from empty to
/// occupied, and its recorded location is that square.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameSession> for MonotonicHistoryInvariant {
    fn holds(game: &GameSession) -> bool {
        let history = game.history();
        let Some(first) = history.first() else {
            return false;
        };
        if first.board().occupied() != 0 || first.location().is_some() {
            return false;
        }

        history.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| before.get(*pos) != after.get(*pos))
                .collect();

            match changed.as_slice() {
                [pos] => {
                    before.get(*pos) == Square::Empty
                        && *pair[1].location() == Some(pos.location())
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark at its recorded location"
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{history, session};
    use super::*;
    use crate::games::tictactoe::snapshot::Snapshot;
    use crate::games::tictactoe::{Location, Player};

    #[test]
    fn test_new_session_holds() {
        assert!(MonotonicHistoryInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_played_session_holds() {
        let mut game = GameSession::new();
        for index in [4, 0, 8] {
            game.submit_move(index);
        }
        assert!(MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let game = session(&[
            (Position::Center, Player::X),
            (Position::Center, Player::O),
        ]);
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_location_violates() {
        let mut snapshots = history(&[(Position::Center, Player::X)]);
        snapshots[1] = Snapshot::after_move(*snapshots[1].board(), Location::new(0, 0));
        let game = GameSession::from_parts(snapshots, 1, false, true);
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }
}
