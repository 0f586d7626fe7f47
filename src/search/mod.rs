//! Depth-first backtracking search driving a single [`Board`](crate::game::Board)
//! through its apply/undo protocol.

mod solver;

pub use solver::{SearchConfig, SearchOutcome, SearchReport, Solver};
