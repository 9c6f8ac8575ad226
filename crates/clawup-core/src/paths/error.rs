//! Path-related error types.
//!
//! Provides semantic errors for path operations without exposing
//! implementation details or adapter-specific concerns.

use thiserror::Error;

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// An empty path was provided.
    #[error("Path cannot be empty (check {0})")]
    EmptyPath(&'static str),

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}
