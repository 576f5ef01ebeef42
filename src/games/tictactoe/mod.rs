//! Tic-tac-toe with a navigable move history.
//!
//! - [`rules`]: pure win, draw and location functions over a board.
//! - [`GameSession`]: history of immutable snapshots, a cursor into it,
//!   and the operations that move, jump and reorder.
//! - [`Projection`]: the read-only view a renderer pulls after each call.

mod action;
pub mod invariants;
mod position;
mod projection;
pub mod rules;
mod session;
mod snapshot;
mod types;

pub use action::{MoveOutcome, Rejection};
pub use position::{Location, Position};
pub use projection::{MoveEntry, Projection, SortOrder, Status};
pub use session::GameSession;
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
