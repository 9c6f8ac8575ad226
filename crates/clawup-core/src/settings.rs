//! Updater settings and validation.
//!
//! These are pure domain types with no infrastructure dependencies.
//! Adapters resolve defaults (the state-file location in particular) and
//! apply overrides through [`SettingsUpdate`].

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::UPDATE_CHECK_KEY;
use crate::ports::PackageSpec;

/// Default minimum time between two background checks (one hour).
pub const DEFAULT_THROTTLE_WINDOW_SECS: u64 = 60 * 60;

/// Default time budget for a single version query.
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 30;

/// Default package followed on the registry.
pub const DEFAULT_PACKAGE: &str = "openclaw";

/// Default registry channel (dist-tag).
pub const DEFAULT_CHANNEL: &str = "beta";

/// Default command printing the installed version.
pub const DEFAULT_VERSION_COMMAND: &str = "openclaw --version";

/// Default registry query. `{package}` expands to `<name>@<channel>`.
pub const DEFAULT_REGISTRY_COMMAND: &str = "npm view {package} version";

/// Default update-and-restart routine.
pub const DEFAULT_TRIGGER_COMMAND: &str = "openclaw gateway update.run";

/// Placeholder substituted into the registry command.
pub const PACKAGE_PLACEHOLDER: &str = "{package}";

/// Updater settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdaterSettings {
    /// Minimum seconds between two background checks.
    pub throttle_window_secs: u64,

    /// Location of the persisted check state.
    pub state_file: PathBuf,

    /// Key under `lastChecks` owned by the update check.
    pub check_key: String,

    /// Package name on the registry.
    pub package: String,

    /// Registry channel to follow.
    pub channel: String,

    /// Command line printing the installed version.
    pub version_command: String,

    /// Command line printing the latest published version.
    pub registry_command: String,

    /// Command line running the update routine.
    pub trigger_command: String,

    /// Seconds a single version query may take.
    pub query_timeout_secs: u64,
}

impl UpdaterSettings {
    /// Settings with defaults for everything except the state file.
    pub fn with_state_file(state_file: impl Into<PathBuf>) -> Self {
        Self {
            throttle_window_secs: DEFAULT_THROTTLE_WINDOW_SECS,
            state_file: state_file.into(),
            check_key: UPDATE_CHECK_KEY.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            channel: DEFAULT_CHANNEL.to_string(),
            version_command: DEFAULT_VERSION_COMMAND.to_string(),
            registry_command: DEFAULT_REGISTRY_COMMAND.to_string(),
            trigger_command: DEFAULT_TRIGGER_COMMAND.to_string(),
            query_timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
        }
    }

    /// Settings with the state file at its resolved default location.
    pub fn with_defaults() -> Result<Self, crate::paths::PathError> {
        Ok(Self::with_state_file(crate::paths::state_file_path()?))
    }

    #[must_use]
    pub const fn throttle_window(&self) -> Duration {
        Duration::from_secs(self.throttle_window_secs)
    }

    #[must_use]
    pub const fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    /// The package and channel as a registry query target.
    pub fn package_spec(&self) -> PackageSpec {
        PackageSpec::new(&self.package, &self.channel)
    }

    /// Apply every override that is set.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(secs) = other.throttle_window_secs {
            self.throttle_window_secs = secs;
        }
        if let Some(ref path) = other.state_file {
            self.state_file.clone_from(path);
        }
        if let Some(ref key) = other.check_key {
            self.check_key.clone_from(key);
        }
        if let Some(ref package) = other.package {
            self.package.clone_from(package);
        }
        if let Some(ref channel) = other.channel {
            self.channel.clone_from(channel);
        }
        if let Some(ref cmd) = other.version_command {
            self.version_command.clone_from(cmd);
        }
        if let Some(ref cmd) = other.registry_command {
            self.registry_command.clone_from(cmd);
        }
        if let Some(ref cmd) = other.trigger_command {
            self.trigger_command.clone_from(cmd);
        }
        if let Some(secs) = other.query_timeout_secs {
            self.query_timeout_secs = secs;
        }
    }
}

/// Partial settings update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub throttle_window_secs: Option<u64>,
    pub state_file: Option<PathBuf>,
    pub check_key: Option<String>,
    pub package: Option<String>,
    pub channel: Option<String>,
    pub version_command: Option<String>,
    pub registry_command: Option<String>,
    pub trigger_command: Option<String>,
    pub query_timeout_secs: Option<u64>,
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Throttle window must be at least one second")]
    ZeroThrottleWindow,

    #[error("Query timeout must be at least one second")]
    ZeroQueryTimeout,

    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("State file path cannot be empty")]
    EmptyStateFile,
}

/// Validate settings values.
pub fn validate_settings(settings: &UpdaterSettings) -> Result<(), SettingsError> {
    if settings.throttle_window_secs == 0 {
        return Err(SettingsError::ZeroThrottleWindow);
    }

    if settings.query_timeout_secs == 0 {
        return Err(SettingsError::ZeroQueryTimeout);
    }

    if settings.state_file.as_os_str().is_empty() {
        return Err(SettingsError::EmptyStateFile);
    }

    let required = [
        ("Check key", &settings.check_key),
        ("Package", &settings.package),
        ("Channel", &settings.channel),
        ("Version command", &settings.version_command),
        ("Registry command", &settings.registry_command),
        ("Trigger command", &settings.trigger_command),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(SettingsError::Empty(name));
        }
    }

    Ok(())
}
