//! Engine-level error type.

use listview_core::{ConfigError, QueryError, SourceError};
use thiserror::Error;

/// Errors raised while mounting or driving a screen.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The screen definition is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The record source failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// A query violated the screen's contract.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// No screen registered under this id.
    #[error("Screen '{0}' not found")]
    ScreenNotFound(String),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
