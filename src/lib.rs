//! # Cross Solitaire
//!
//! The English cross peg-solitaire board: 32 pegs on a cross of 33 cells,
//! solved by jumping pegs until a single one is left in the centre.
//!
//! ## Modules
//!
//! - [`game`]: Core rules: positions, jump moves, board apply/undo protocol
//! - [`search`]: Depth-first backtracking solver over a single board
//! - [`render`]: Plain-text board and solution rendering
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod render;
pub mod search;
