use std::fmt;

use super::Direction;

/// A (row, column) coordinate on the board.
///
/// Positions are plain values: nothing here checks that the coordinate lies
/// on the 7x7 grid. Move generation produces off-board positions on purpose
/// and leaves it to [`Board`](super::Board) to reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: i32,
    column: i32,
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Position { row, column }
    }

    pub fn row(self) -> i32 {
        self.row
    }

    pub fn column(self) -> i32 {
        self.column
    }

    /// The position `distance` cells away along `direction`.
    ///
    /// Saturates at the `i32` range, so a far off-grid position stays off-grid.
    pub fn step(self, direction: Direction, distance: i32) -> Position {
        let (d_row, d_col) = direction.delta();
        Position::new(
            self.row.saturating_add(d_row.saturating_mul(distance)),
            self.column.saturating_add(d_col.saturating_mul(distance)),
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
