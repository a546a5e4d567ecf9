//! Error types shared by the engine, the controller and config loading.

use thiserror::Error;

use crate::application::{Mode, TimerHandle};

/// Every failure the engine can report. All of them are recoverable.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Pattern id that the library does not know.
    #[error("unknown pattern: {0:?}")]
    InvalidPattern(String),

    /// Manual edit aimed outside the grid.
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfRangeCell { row: isize, col: isize, size: usize },

    /// Operation not permitted in the current mode.
    #[error("{operation} is not allowed while {mode}")]
    InvalidState { operation: &'static str, mode: Mode },

    /// Timer callback from a schedule that has since been cancelled.
    #[error("timer {0:?} is no longer armed")]
    StaleTimer(TimerHandle),

    /// Configuration value out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// IO error while reading a config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed config file.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for engine operations.
pub type LifeResult<T> = Result<T, LifeError>;
