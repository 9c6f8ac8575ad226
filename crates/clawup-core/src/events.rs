//! Events emitted while a check runs.
//!
//! Services never print. They emit [`CheckEvent`]s and the adapter decides
//! how to present them (console lines for the CLI, nothing for tests).
//! Emission happens before the trigger is invoked because the trigger may
//! terminate the process.

use serde::{Deserialize, Serialize};

use crate::ports::VersionSide;

/// A step of an update check worth reporting to a human.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckEvent {
    /// An interactive check has begun.
    CheckStarted { package: String },

    /// One of the version queries failed.
    VersionQueryFailed { side: VersionSide, reason: String },

    /// At least one version is unknown; no decision can be made.
    VersionsUnavailable,

    /// Both versions were retrieved.
    VersionsResolved { current: String, remote: String },

    /// Installed version matches the registry.
    UpToDate { version: String },

    /// Interactive check is about to start the update routine.
    UpdateStarting { current: String, remote: String },

    /// Background check found a newer version and is about to start the
    /// update routine.
    UpdateDetected { current: String, remote: String },

    /// The update routine could not be started or reported failure.
    TriggerFailed { reason: String },
}

impl CheckEvent {
    /// Whether this event describes a failure.
    pub const fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::VersionQueryFailed { .. } | Self::VersionsUnavailable | Self::TriggerFailed { .. }
        )
    }
}
