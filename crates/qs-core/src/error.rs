//! Configuration-layer error type.
//!
//! Engine-level failures (empty schedule, waiting-line overflow) live in
//! `qs-schedule` / `qs-sim`; this enum only covers what can go wrong before
//! the event loop starts.

use thiserror::Error;

/// The top-level error type for `qs-core`.
#[derive(Debug, Error)]
pub enum QsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `qs-core`.
pub type QsResult<T> = Result<T, QsError>;
