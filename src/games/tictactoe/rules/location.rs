//! Cell index to (row, column) conversion.

use super::super::{Location, Position};

/// Returns the location of the cell at `index` (row-major, 0-8).
///
/// # Panics
///
/// Panics if `index` is not a board index. Callers hold valid indices by
/// construction, so this is a programming error rather than user input.
#[track_caller]
pub fn location_of(index: usize) -> Location {
    assert!(index < 9, "cell index {index} out of range 0..9");
    Location::new(index / 3, index % 3)
}

/// Returns the location of `pos`.
impl From<Position> for Location {
    fn from(pos: Position) -> Self {
        location_of(pos.to_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_and_center_locations() {
        assert_eq!(location_of(0), Location::new(0, 0));
        assert_eq!(location_of(4), Location::new(1, 1));
        assert_eq!(location_of(8), Location::new(2, 2));
        assert_eq!(location_of(5), Location::new(1, 2));
    }

    #[test]
    fn test_agrees_with_position() {
        for pos in Position::ALL {
            assert_eq!(Location::from(pos), pos.location());
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_panics() {
        location_of(9);
    }
}
