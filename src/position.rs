//! Board cell coordinates carrying occupied/hit state.

use core::fmt;
use core::hash::{Hash, Hasher};

/// A cell on the board.
///
/// Identity is the `(row, column)` pair only: two positions with the same
/// coordinates compare and hash equal whatever their `occupied`/`hit` flags
/// are, so a freshly parsed shot matches the corresponding hull cell.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    row: i32,
    column: i32,
    occupied: bool,
    hit: bool,
}

impl Position {
    /// Create an unoccupied, unhit position.
    pub const fn new(row: i32, column: i32) -> Self {
        Self {
            row,
            column,
            occupied: false,
            hit: false,
        }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Mark the cell as part of a placed hull.
    pub fn occupy(&mut self) {
        self.occupied = true;
    }

    /// Mark the cell as shot.
    pub fn shoot(&mut self) {
        self.hit = true;
    }

    /// Chebyshev distance of at most one. A position is adjacent to itself.
    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) <= 1 && self.column.abs_diff(other.column) <= 1
    }

    /// The position displaced by `(d_row, d_column)`, with fresh flags.
    /// `None` if either coordinate would leave the `i32` range.
    pub fn offset(&self, d_row: i32, d_column: i32) -> Option<Position> {
        Some(Position::new(
            self.row.checked_add(d_row)?,
            self.column.checked_add(d_column)?,
        ))
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.column == other.column
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.column.hash(state);
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} column {}", self.row, self.column)
    }
}
