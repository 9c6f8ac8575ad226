//! Update trigger port.
//!
//! The trigger hands control to an external, disruptive upgrade routine
//! which typically restarts the host. Implementations may never return
//! because the calling process is killed mid-call; callers must treat that
//! as success. A returned value therefore only distinguishes "the routine
//! ran" from "the routine could not be started or reported failure".

use async_trait::async_trait;
use thiserror::Error;

/// How a trigger invocation ended, when it returned at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The update routine ran to completion.
    Completed,
    /// The update routine was terminated by a signal, which is what a
    /// restart-in-progress looks like from the outside.
    Interrupted,
}

/// Errors reported by the update trigger.
#[derive(Debug, Error)]
pub enum TriggerError {
    /// The update routine could not be started.
    #[error("Failed to start `{command}`: {reason}")]
    Spawn { command: String, reason: String },

    /// The update routine started but reported failure.
    #[error("`{command}` exited with code {code}")]
    ExitStatus { command: String, code: i32 },
}

/// Port for starting the update-and-restart sequence.
///
/// The trigger is not idempotent. Services call it at most once per check.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpdateTriggerPort: Send + Sync {
    /// Run the update routine with the caller's standard streams.
    async fn trigger(&self) -> Result<TriggerOutcome, TriggerError>;
}
