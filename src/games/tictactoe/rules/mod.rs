//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot
//! according to tic-tac-toe rules. Rules hold no state; the session
//! delegates every win, draw and location question here.

pub mod draw;
pub mod location;
pub mod win;

pub use draw::{is_draw, is_full};
pub use location::location_of;
pub use win::{winner, LINES};
