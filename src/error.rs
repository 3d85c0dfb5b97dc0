//! Error types for sync-diff.
//!
//! Comparison and action construction are total; the only operations that can
//! fail are the ones lifting wire-form payloads into typed identifiers.

use thiserror::Error;

/// Main error type for sync-diff operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyncDiffError {
    /// The reference payload was not a JSON object.
    #[error("reference payload is not a JSON object")]
    NotAnObject,

    /// The reference payload lacked a required field.
    #[error("reference payload is missing required field '{field}'")]
    MissingField { field: &'static str },
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = SyncDiffError> = std::result::Result<T, E>;
