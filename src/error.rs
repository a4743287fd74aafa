use std::time::Duration;

use crate::WIDTH;

/// A move that cannot be applied to a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("Invalid move, column {0} out of range. Columns must be between 0 and {max}", max = WIDTH - 1)]
    ColumnOutOfRange(usize),

    #[error("Invalid move, column {0} full")]
    ColumnFull(usize),
}

/// Errors from parsing move strings and board diagrams
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("could not parse '{0}' as a valid move")]
    BadMove(char),

    #[error("could not parse '{0}' as a cell, expected '.', 'X' or 'O'")]
    BadCell(char),

    #[error("expected {expected} {what}, found {found}")]
    WrongShape {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("floating piece at row {row}, column {column}")]
    Floating { row: usize, column: usize },

    #[error("Invalid position, game is over")]
    GameOver,

    #[error("Invalid position, player 1 has {one} pieces and player 2 has {two}")]
    PieceCount { one: usize, two: usize },

    #[error("Invalid position, both players have four in a row")]
    BothWon,

    #[error(transparent)]
    Move(#[from] InvalidMove),
}

/// Failures of a time-limited engine call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("engine exceeded its time limit of {limit:?}")]
    Timeout { limit: Duration },

    #[error("engine worker stopped without answering")]
    WorkerFailed,
}

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
