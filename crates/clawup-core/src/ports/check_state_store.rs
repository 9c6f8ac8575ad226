//! Check state store trait definition.
//!
//! This port defines persistence for [`CheckState`]. Implementations handle
//! all storage details internally and are constructed with an explicit
//! location; there is no ambient state file.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CheckState;

/// Errors from loading or saving check state.
#[derive(Debug, Error)]
pub enum StateStoreError {
    /// The state file could not be read or written.
    #[error("Failed to access state file {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// The state file exists but does not contain valid state.
    #[error("State file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// The state could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Repository for persisted check timestamps.
///
/// # Contract
///
/// - `load` returns an empty state when nothing has been stored yet
/// - `load` reports unreadable or unparsable data as an error; callers
///   decide whether to degrade to an empty state
/// - `save` replaces the stored state as a whole
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckStateStore: Send + Sync {
    /// Load the stored state.
    async fn load(&self) -> Result<CheckState, StateStoreError>;

    /// Persist `state`.
    async fn save(&self, state: &CheckState) -> Result<(), StateStoreError>;
}
