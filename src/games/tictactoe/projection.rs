//! Read-only view of a session for the presentation layer.
//!
//! The session never pushes updates. After every mutating call the
//! renderer pulls a fresh [`Projection`] and draws it.

use super::{Board, Location, Player};
use derive_getters::Getters;
use serde::Serialize;

/// Game status shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// The displayed board has a completed line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// The displayed board is full with no completed line.
    #[display("Draw")]
    Draw,
    /// The game continues with this player.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

/// Enumeration order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum SortOrder {
    /// Game start first.
    #[display("ascending")]
    Ascending,
    /// Most recent step first.
    #[display("descending")]
    Descending,
}

impl SortOrder {
    /// Maps the session's `ascending` flag to an order.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    /// Label of the control that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "sort in descending",
            SortOrder::Descending => "sort in ascending",
        }
    }

    /// Step indices of a history of `len` entries in this order.
    pub fn steps(self, len: usize) -> Box<dyn Iterator<Item = usize>> {
        match self {
            SortOrder::Ascending => Box::new(0..len),
            SortOrder::Descending => Box::new((0..len).rev()),
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    step: usize,
    /// `Go to game start` or `Go to move #<step>`.
    description: String,
    /// Location of the move that produced the step.
    location: Option<Location>,
    /// Whether this is the step currently displayed.
    is_current: bool,
}

impl MoveEntry {
    pub(super) fn new(step: usize, location: Option<Location>, is_current: bool) -> Self {
        let description = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{step}")
        };
        Self {
            step,
            description,
            location,
            is_current,
        }
    }

    /// Location as `(row, col)`, or an empty string for game start.
    pub fn location_text(&self) -> String {
        self.location.map(|l| l.to_string()).unwrap_or_default()
    }

    /// Description followed by the location, as one button label.
    pub fn label(&self) -> String {
        format!("{}{}", self.description, self.location_text())
    }
}

/// Everything a renderer needs after a session operation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Projection {
    /// Board of the current step.
    board: Board,
    /// Status of the current step.
    status: Status,
    /// Move list in the configured order.
    moves: Vec<MoveEntry>,
    /// Index of the current step.
    cursor: usize,
    /// Order of `moves`.
    order: SortOrder,
}

impl Projection {
    pub(super) fn new(
        board: Board,
        status: Status,
        moves: Vec<MoveEntry>,
        cursor: usize,
        order: SortOrder,
    ) -> Self {
        Self {
            board,
            status,
            moves,
            cursor,
            order,
        }
    }

    /// Label for the sort toggle control.
    pub fn sort_label(&self) -> &'static str {
        self.order.toggle_label()
    }

    /// The move list as plain text, one entry per line, current step
    /// marked with `>`.
    pub fn render_moves(&self) -> String {
        self.moves
            .iter()
            .map(|entry| {
                let marker = if entry.is_current { '>' } else { ' ' };
                format!("{marker} {}. {}", entry.step, entry.label())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board.display())?;
        writeln!(f)?;
        writeln!(f, "{}", self.status)?;
        writeln!(f, "[{}]", self.sort_label())?;
        write!(f, "{}", self.render_moves())
    }
}
