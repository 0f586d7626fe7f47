use super::{Direction, Move, Position};
use crate::error::MoveError;

/// Width and height of the square grid the cross is laid out on.
pub const SIZE: usize = 7;

/// The centre cell: empty at the start, the lone survivor at the end.
pub const CENTER: Position = Position::new(3, 3);

/// Number of candidates produced by [`Board::candidate_moves`].
pub const CANDIDATE_COUNT: usize = SIZE * SIZE * Direction::ALL.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Occupied by a peg.
    Peg,
    /// Empty but playable.
    Hole,
    /// Outside the cross; never playable.
    Unused,
}

pub type Grid = [[Cell; SIZE]; SIZE];

const X: Cell = Cell::Peg;
const O: Cell = Cell::Hole;
const N: Cell = Cell::Unused;

/// Full cross with 32 pegs and the centre empty.
pub const INITIAL_LAYOUT: Grid = [
    [N, N, X, X, X, N, N],
    [N, N, X, X, X, N, N],
    [X, X, X, X, X, X, X],
    [X, X, X, O, X, X, X],
    [X, X, X, X, X, X, X],
    [N, N, X, X, X, N, N],
    [N, N, X, X, X, N, N],
];

/// Empty cross with a single peg left in the centre.
pub const TARGET_LAYOUT: Grid = [
    [N, N, O, O, O, N, N],
    [N, N, O, O, O, N, N],
    [O, O, O, O, O, O, O],
    [O, O, O, X, O, O, O],
    [O, O, O, O, O, O, O],
    [N, N, O, O, O, N, N],
    [N, N, O, O, O, N, N],
];

/// The cross solitaire board, indexed `[row][column]`.
///
/// `apply` and `undo` mutate the grid in place so a backtracking search can
/// walk the game tree on a single board. Neither checks its input: callers
/// must test a move with [`Board::is_legal`] before applying it, and must
/// undo moves in the reverse order they were applied. Debug builds assert
/// both rules. [`Board::try_apply`] and [`Board::try_undo`] are the checked
/// counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create a board in the initial layout
    pub fn new() -> Self {
        Board {
            cells: INITIAL_LAYOUT,
        }
    }

    /// Create a board from an arbitrary grid
    pub fn from_layout(cells: Grid) -> Self {
        Board { cells }
    }

    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    /// Get the cell at a position, or `None` if it is off the grid
    pub fn get(&self, pos: Position) -> Option<Cell> {
        Self::index(pos).map(|(row, col)| self.cells[row][col])
    }

    /// Count the pegs left on the board
    pub fn peg_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Peg)
            .count()
    }

    /// Check whether a move can be played on the current board
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.check(mv).is_ok()
    }

    /// Like [`Board::is_legal`], but says which rule the move breaks.
    pub fn check(&self, mv: &Move) -> Result<(), MoveError> {
        let origin = self.cell_in_bounds(mv, mv.origin())?;
        let jump = self.cell_in_bounds(mv, mv.jump())?;
        let destination = self.cell_in_bounds(mv, mv.destination())?;

        if origin != Cell::Peg {
            return Err(MoveError::OriginNotPeg(mv.origin()));
        }
        if jump != Cell::Peg {
            return Err(MoveError::JumpNotPeg(mv.jump()));
        }
        if destination != Cell::Hole {
            return Err(MoveError::DestinationNotHole(mv.destination()));
        }
        Ok(())
    }

    /// Play a move. The move must be legal.
    pub fn apply(&mut self, mv: &Move) {
        debug_assert!(self.is_legal(mv), "illegal move applied: {mv}");

        self.set(mv.origin(), Cell::Hole);
        self.set(mv.jump(), Cell::Hole);
        self.set(mv.destination(), Cell::Peg);
    }

    /// Take back a move. The move must be the last one applied.
    pub fn undo(&mut self, mv: &Move) {
        debug_assert!(
            self.check_applied(mv).is_ok(),
            "undo of a move that was not applied: {mv}"
        );

        self.set(mv.origin(), Cell::Peg);
        self.set(mv.jump(), Cell::Peg);
        self.set(mv.destination(), Cell::Hole);
    }

    /// Play a move after checking it. The board is untouched on error.
    pub fn try_apply(&mut self, mv: &Move) -> Result<(), MoveError> {
        self.check(mv)?;
        self.apply(mv);
        Ok(())
    }

    /// Take back a move after checking its cells are in the post-move state.
    /// The board is untouched on error.
    pub fn try_undo(&mut self, mv: &Move) -> Result<(), MoveError> {
        self.check_applied(mv)?;
        self.undo(mv);
        Ok(())
    }

    /// Play a sequence of moves in order.
    ///
    /// Stops at the first illegal move and reports its 1-based step number;
    /// moves before it stay applied. Returns the number of moves played.
    pub fn replay<'a, I>(&mut self, moves: I) -> Result<usize, MoveError>
    where
        I: IntoIterator<Item = &'a Move>,
    {
        let mut played = 0;
        for mv in moves {
            self.try_apply(mv).map_err(|reason| MoveError::Replay {
                step: played + 1,
                mv: *mv,
                reason: Box::new(reason),
            })?;
            played += 1;
        }
        Ok(played)
    }

    /// Every candidate jump on the grid, legal or not.
    ///
    /// Cells are visited in row-major order and each cell yields one move per
    /// direction in [`Direction::ALL`] order, giving [`CANDIDATE_COUNT`]
    /// moves. The sequence does not depend on the board contents.
    pub fn candidate_moves(&self) -> impl Iterator<Item = Move> + Clone {
        (0..SIZE as i32).flat_map(|row| {
            (0..SIZE as i32).flat_map(move |col| {
                Direction::ALL
                    .into_iter()
                    .map(move |dir| Move::toward(Position::new(row, col), dir))
            })
        })
    }

    /// Candidate moves that are legal on the current board, in candidate order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.candidate_moves()
            .filter(|mv| self.is_legal(mv))
            .collect()
    }

    /// Check if the board matches the target layout exactly
    pub fn is_solved(&self) -> bool {
        self.cells == TARGET_LAYOUT
    }

    fn index(pos: Position) -> Option<(usize, usize)> {
        let row = usize::try_from(pos.row()).ok()?;
        let col = usize::try_from(pos.column()).ok()?;
        (row < SIZE && col < SIZE).then_some((row, col))
    }

    fn cell_in_bounds(&self, mv: &Move, pos: Position) -> Result<Cell, MoveError> {
        self.get(pos)
            .ok_or(MoveError::OutOfBounds { mv: *mv, position: pos })
    }

    fn check_applied(&self, mv: &Move) -> Result<(), MoveError> {
        let origin = self.cell_in_bounds(mv, mv.origin())?;
        let jump = self.cell_in_bounds(mv, mv.jump())?;
        let destination = self.cell_in_bounds(mv, mv.destination())?;

        if origin == Cell::Hole && jump == Cell::Hole && destination == Cell::Peg {
            Ok(())
        } else {
            Err(MoveError::NotApplied(*mv))
        }
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        let (row, col) = Self::index(pos)
            .unwrap_or_else(|| panic!("position {pos} is off the board"));
        self.cells[row][col] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
