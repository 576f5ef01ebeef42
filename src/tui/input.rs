//! Cursor movement for keyboard navigation.

use crate::games::tictactoe::{Location, Position};
use crossterm::event::KeyCode;

/// Moves the board cursor one cell in the arrow's direction.
///
/// Arrows at the board edge and any other key leave the cursor in place.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let Location { row, col } = cursor.location();
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|row| Location::new(row, col)),
        KeyCode::Down => Some(Location::new(row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|col| Location::new(row, col)),
        KeyCode::Right => Some(Location::new(row, col + 1)),
        _ => None,
    };
    target.and_then(Position::from_location).unwrap_or(cursor)
}

/// Maps `1`-`9` to the cell with that keypad label.
pub fn digit_cell(c: char) -> Option<Position> {
    c.to_digit(10)
        .filter(|d| (1..=9).contains(d))
        .and_then(|d| Position::from_index(d as usize - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
    }

    #[test]
    fn test_edges_clamp() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Char('x')), Position::Center);
    }

    #[test]
    fn test_digit_cells() {
        assert_eq!(digit_cell('1'), Some(Position::TopLeft));
        assert_eq!(digit_cell('9'), Some(Position::BottomRight));
        assert_eq!(digit_cell('0'), None);
        assert_eq!(digit_cell('a'), None);
    }
}
