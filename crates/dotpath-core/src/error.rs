//! Error types for JSON interchange.
//!
//! Path traversal itself never errors: reads resolve to absence and writes
//! abandon the offending branch. The fallible surface is moving values in
//! and out of JSON text.

use thiserror::Error;

/// Errors that can occur when converting values to or from JSON.
#[derive(Error, Debug)]
pub enum DotpathError {
    /// The input string was not valid JSON, or the output failed to render.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An absent value has no JSON representation.
    #[error("absent value has no JSON representation")]
    AbsentRoot,

    /// NaN and infinite floats have no JSON representation.
    #[error("non-finite number {0} has no JSON representation")]
    NonFiniteNumber(f64),
}

/// Convenience alias used throughout dotpath-core.
pub type Result<T> = std::result::Result<T, DotpathError>;
