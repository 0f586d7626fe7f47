//! Cross peg-solitaire rules: positions, jump moves, and the board state
//! machine with its apply/undo protocol.

mod board;
mod direction;
mod jump;
mod position;

pub use board::{Board, Cell, Grid, CANDIDATE_COUNT, CENTER, INITIAL_LAYOUT, SIZE, TARGET_LAYOUT};
pub use direction::Direction;
pub use jump::Move;
pub use position::Position;
