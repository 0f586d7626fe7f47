use std::path::PathBuf;

use crate::game::{Move, Position};

/// Reasons a move is rejected by the checked board operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position {position} of move {mv} is off the board")]
    OutOfBounds { mv: Move, position: Position },

    #[error("no peg to move at origin {0}")]
    OriginNotPeg(Position),

    #[error("no peg to jump over at {0}")]
    JumpNotPeg(Position),

    #[error("destination {0} is not a hole")]
    DestinationNotHole(Position),

    #[error("move {0} cannot be undone: its cells are not in the post-move state")]
    NotApplied(Move),

    #[error("step {step} {mv} rejected: {reason}")]
    Replay {
        step: usize,
        mv: Move,
        reason: Box<MoveError>,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
