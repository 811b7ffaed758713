//! Core error type.
//!
//! Simulation defects (negative water, a corrupt id) are not represented
//! here: they panic.  Only conditions a caller can fix, such as a bad
//! configuration, become errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rb-core`.
pub type CoreResult<T> = Result<T, CoreError>;
