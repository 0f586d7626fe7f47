//! Plain-text rendering of boards and solutions.

use std::fmt::{self, Write};

use crate::game::{Board, Cell, Move, SIZE};

/// Glyphs used when drawing a board. Unused cells are always blank.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub peg: char,
    pub hole: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            peg: '*',
            hole: 'O',
        }
    }
}

impl RenderConfig {
    fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Peg => self.peg,
            Cell::Hole => self.hole,
            Cell::Unused => ' ',
        }
    }
}

/// Render a board as a framed grid with row and column indices.
///
/// ```text
///     -----------------
///     | 0 1 2 3 4 5 6 |
/// ---------------------
/// | 0 |     * * *     |
/// ```
pub fn render_board(board: &Board, config: &RenderConfig) -> String {
    let mut out = String::new();
    write_board(&mut out, board, config).expect("writing to a String cannot fail");
    out
}

fn write_board(out: &mut impl Write, board: &Board, config: &RenderConfig) -> fmt::Result {
    let inner = "--".repeat(SIZE);

    writeln!(out, "    -{inner}--")?;
    write!(out, "    | ")?;
    for col in 0..SIZE {
        write!(out, "{col} ")?;
    }
    writeln!(out, "|")?;
    writeln!(out, "-----{inner}--")?;

    for (row, cells) in board.cells().iter().enumerate() {
        write!(out, "| {row} | ")?;
        for &cell in cells {
            write!(out, "{} ", config.glyph(cell))?;
        }
        writeln!(out, "|")?;
    }
    writeln!(out, "-----{inner}--")
}

/// List solution steps, one per line, numbered from 1.
pub fn render_solution(moves: &[Move]) -> String {
    moves
        .iter()
        .enumerate()
        .map(|(i, mv)| format!("{:>2}. {mv}\n", i + 1))
        .collect()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_board(f, self, &RenderConfig::default())
    }
}
