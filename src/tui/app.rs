//! Application state and key handling.
//!
//! The app owns the session and forwards user intent to it. It never
//! edits history itself; after every key the renderer pulls a fresh
//! projection.

use super::input::{digit_cell, move_cursor};
use crate::games::tictactoe::{GameSession, MoveOutcome, Position, SortOrder};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the cell cursor.
    #[default]
    Board,
    /// Arrow keys select a step in the move list.
    Moves,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw and keep reading keys.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cell: Position,
    focus: Focus,
    selected_step: usize,
    message: Option<String>,
}

impl App {
    /// Creates an app around a fresh session.
    #[instrument]
    pub fn new(order: SortOrder) -> Self {
        Self {
            session: GameSession::with_order(order),
            cell: Position::Center,
            focus: Focus::default(),
            selected_step: 0,
            message: None,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cell(&self) -> Position {
        self.cell
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Result of the last action, if worth showing.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            KeyCode::Char('s') => {
                self.session.toggle_sort_order();
                self.message = None;
            }
            KeyCode::Char('n') => {
                self.session.reset();
                self.selected_step = 0;
                self.message = Some("New game".to_string());
            }
            KeyCode::Char(c) if digit_cell(c).is_some() => {
                if let Some(pos) = digit_cell(c) {
                    self.cell = pos;
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cell),
                Focus::Moves => {
                    self.session.jump_to(self.selected_step);
                    self.message = None;
                }
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cell = move_cursor(self.cell, key),
                Focus::Moves => self.select(key),
            },
            _ => debug!(?key, "Unbound key"),
        }
        AppAction::Continue
    }

    fn play(&mut self, pos: Position) {
        let outcome = self.session.play(pos);
        if let MoveOutcome::Applied { step, .. } = outcome {
            self.selected_step = step;
            self.message = None;
        } else {
            self.message = Some(outcome.to_string());
        }
    }

    /// Moves the selection one row up or down in display order.
    fn select(&mut self, key: KeyCode) {
        let last = self.session.history().len() - 1;
        let toward_start = match (key, self.session.order()) {
            (KeyCode::Up, SortOrder::Ascending) | (KeyCode::Down, SortOrder::Descending) => true,
            (KeyCode::Down, SortOrder::Ascending) | (KeyCode::Up, SortOrder::Descending) => false,
            _ => return,
        };
        self.selected_step = if toward_start {
            self.selected_step.saturating_sub(1)
        } else {
            (self.selected_step + 1).min(last)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Rejection;

    fn app_after(keys: &[KeyCode]) -> App {
        let mut app = App::new(SortOrder::Ascending);
        for key in keys {
            assert_eq!(app.handle_key(*key), AppAction::Continue);
        }
        app
    }

    #[test]
    fn test_digits_submit_moves() {
        let app = app_after(&[KeyCode::Char('5'), KeyCode::Char('1')]);
        assert_eq!(app.session().history().len(), 3);
        assert_eq!(app.selected_step(), 2);
        assert_eq!(app.cell(), Position::TopLeft);
    }

    #[test]
    fn test_rejection_is_reported() {
        let app = app_after(&[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.session().history().len(), 2);
        let expected = MoveOutcome::Rejected(Rejection::SquareOccupied(Position::Center));
        assert_eq!(app.message(), Some(expected.to_string().as_str()));
    }

    #[test]
    fn test_jump_from_move_list() {
        let app = app_after(&[
            KeyCode::Char('1'),
            KeyCode::Char('2'),
            KeyCode::Char('3'),
            KeyCode::Tab,
            KeyCode::Up,
            KeyCode::Up,
            KeyCode::Enter,
        ]);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.session().cursor(), 1);
        assert!(!app.session().x_is_next());
        assert_eq!(app.session().history().len(), 4);
    }

    #[test]
    fn test_descending_selection_follows_display() {
        let app = app_after(&[
            KeyCode::Char('1'),
            KeyCode::Char('2'),
            KeyCode::Char('s'),
            KeyCode::Tab,
            KeyCode::Down,
        ]);
        assert_eq!(app.selected_step(), 1);
        assert_eq!(app.session().cursor(), 2);
    }

    #[test]
    fn test_new_game_keeps_order() {
        let app = app_after(&[KeyCode::Char('s'), KeyCode::Char('5'), KeyCode::Char('n')]);
        assert_eq!(app.session().history().len(), 1);
        assert_eq!(app.session().order(), SortOrder::Descending);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(SortOrder::Ascending);
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
    }
}
