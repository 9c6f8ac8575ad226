//! Errors surfaced by the check services.

use thiserror::Error;

use crate::ports::{StateStoreError, TriggerError};

/// Error type for update checks.
///
/// The interactive checker returns these to its caller. The silent checker
/// produces them internally and discards them at its outer boundary.
#[derive(Debug, Error)]
pub enum CheckError {
    /// One or both versions could not be retrieved.
    #[error("Could not determine versions")]
    VersionsUnavailable,

    /// The throttle timestamp could not be written.
    #[error("Failed to persist check state: {0}")]
    StatePersist(#[source] StateStoreError),

    /// The update routine failed to start or reported failure.
    #[error("Update failed: {0}")]
    Trigger(#[from] TriggerError),
}
