use std::fmt;

use super::{Direction, Position};

/// A single peg jump: the peg at `origin` hops over `jump` into `destination`.
///
/// A `Move` is only a candidate. Whether it can be played on a given board is
/// decided by [`Board::is_legal`](super::Board::is_legal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    origin: Position,
    jump: Position,
    destination: Position,
}

impl Move {
    pub fn new(origin: Position, jump: Position, destination: Position) -> Self {
        Move {
            origin,
            jump,
            destination,
        }
    }

    /// The jump starting at `origin` and heading in `direction`.
    pub fn toward(origin: Position, direction: Direction) -> Self {
        Move::new(origin, origin.step(direction, 1), origin.step(direction, 2))
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn jump(&self) -> Position {
        self.jump
    }

    pub fn destination(&self) -> Position {
        self.destination
    }

    fn cells(&self) -> [Position; 3] {
        [self.origin, self.jump, self.destination]
    }

    /// Iterate over the three cells touched by this move.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        self.cells().into_iter()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{peg at {}, over {}, to {}}}",
            self.origin, self.jump, self.destination
        )
    }
}
