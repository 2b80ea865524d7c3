//! Shared error type.

use thiserror::Error;

/// Errors from game setup and play
#[derive(Debug, Error)]
pub enum GameError {
    #[error("need at least 3 moves, got {0}")]
    TooFewMoves(usize),

    #[error("number of moves must be odd, got {0}")]
    EvenMoveCount(usize),

    #[error("duplicate move: {0}")]
    DuplicateMove(String),

    #[error("move is not in the move set: {0}")]
    UnknownMove(String),

    #[error("menu choice {0} is out of range")]
    InvalidChoice(usize),

    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),
}
