//! Version query ports.
//!
//! Two independent sources feed every check: the locally installed version
//! and the latest version published to a registry channel. Both return an
//! opaque, trimmed token or a [`VersionQueryError`]; the core treats any
//! error as "version absent".

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while querying a version.
#[derive(Debug, Error)]
pub enum VersionQueryError {
    /// The query command could not be started.
    #[error("Failed to run `{command}`: {reason}")]
    Spawn { command: String, reason: String },

    /// The query command exited unsuccessfully.
    #[error("`{command}` exited with {status}: {stderr}")]
    ExitStatus {
        command: String,
        status: String,
        stderr: String,
    },

    /// The query did not finish within its time budget.
    #[error("`{command}` timed out after {}s", timeout.as_secs())]
    TimedOut { command: String, timeout: Duration },

    /// The query finished but its output is not a usable version token.
    #[error("`{command}` returned malformed output: {reason}")]
    Malformed { command: String, reason: String },
}

/// Which side of the comparison a query belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSide {
    /// The locally installed component.
    Installed,
    /// The registry channel.
    Registry,
}

impl std::fmt::Display for VersionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Installed => write!(f, "local"),
            Self::Registry => write!(f, "remote"),
        }
    }
}

/// A package name plus the registry channel (dist-tag) to follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSpec {
    pub name: String,
    pub channel: String,
}

impl PackageSpec {
    pub fn new(name: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channel: channel.into(),
        }
    }
}

impl std::fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.channel)
    }
}

/// Port for querying the locally installed version.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InstalledVersionPort: Send + Sync {
    /// Return the installed version token.
    async fn installed_version(&self) -> Result<String, VersionQueryError>;
}

/// Port for querying the latest published version of a package.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryPort: Send + Sync {
    /// Return the newest version token published on `package`'s channel.
    async fn latest_version(&self, package: &PackageSpec) -> Result<String, VersionQueryError>;
}
