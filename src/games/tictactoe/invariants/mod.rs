//! First-class invariants for a time-travel session.
//!
//! Invariants are logical properties that must hold after every session
//! operation. They are testable independently and the session asserts
//! the full set in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_history;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;

/// All session invariants as a composable set.
pub type TimeTravelInvariants = (
    MonotonicHistoryInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
pub(crate) mod fixtures {
    //! Hand-built histories, including ones no legal play produces.

    use super::super::snapshot::Snapshot;
    use super::super::{Board, GameSession, Player, Position};

    /// Snapshots for `moves` applied in order, without any validation.
    pub fn history(moves: &[(Position, Player)]) -> Vec<Snapshot> {
        let mut history = vec![Snapshot::initial()];
        let mut board = Board::new();
        for &(pos, player) in moves {
            board = board.with_mark(pos, player);
            history.push(Snapshot::after_move(board, pos.location()));
        }
        history
    }

    /// A session at the end of `moves`, with the turn derived from length.
    pub fn session(moves: &[(Position, Player)]) -> GameSession {
        let history = history(moves);
        let cursor = history.len() - 1;
        GameSession::from_parts(history, cursor, cursor % 2 == 0, true)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::session;
    use super::*;
    use crate::games::tictactoe::{GameSession, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        assert!(TimeTravelInvariants::check_all(&GameSession::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut game = GameSession::new();
        for index in [0, 4, 2, 1] {
            game.submit_move(index);
        }
        game.jump_to(1);
        game.submit_move(8);
        assert!(TimeTravelInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        // X twice in a row, then a move after X completed the top row.
        let game = session(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::Center, Player::O),
        ]);
        let violations = TimeTravelInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            AlternatingTurnInvariant::description()
        );
        assert_eq!(
            violations[1].description,
            HistoryConsistentInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicHistoryInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&GameSession::new()).is_ok());
    }
}
