//! Strictly Timetravel - tic-tac-toe with a navigable move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win, draw and location functions over a board.
//! - **Session**: immutable snapshots, a cursor into them, and the
//!   operations to move, jump back in time and reorder the move list.
//! - **Projection**: the read-only view a renderer pulls after each call.
//! - **TUI**: a terminal front end that drives the session.
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameSession, Status, Player};
//!
//! let mut session = GameSession::new();
//! for cell in [0, 4, 8, 1, 3] {
//!     session.submit_move(cell);
//! }
//! session.jump_to(2);
//! assert_eq!(session.projection().status(), &Status::NextPlayer(Player::X));
//!
//! // Moving from step 2 discards steps 3 and 4.
//! assert!(session.submit_move(6).is_applied());
//! assert_eq!(session.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV, ConfigError, Settings};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, Focus, run as run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameSession, Location, MoveEntry, MoveOutcome, Player, Position, Projection,
    Rejection, Snapshot, SortOrder, Square, Status,
};

/// Rules engine and session invariants.
pub mod tictactoe {
    pub use crate::games::tictactoe::{invariants, rules};
}
