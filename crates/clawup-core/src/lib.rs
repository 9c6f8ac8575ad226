//! Core of clawup: deciding when an installed component is out of date and
//! starting its update routine exactly once.
//!
//! - [`domain`] holds the pure decision engine and persisted check state
//! - [`ports`] defines the interfaces to version queries, the registry, the
//!   update trigger, state persistence and the clock
//! - [`services`] composes them into the interactive and silent checkers
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{CheckState, ThrottleStatus, UPDATE_CHECK_KEY, UpdateDecision, VersionPair, decide};
pub use events::CheckEvent;
pub use ports::{
    CheckEventEmitter, CheckStateStore, ClockPort, FixedClock, InstalledVersionPort, NoopEmitter,
    PackageSpec, Ports, RegistryPort, StateStoreError, TriggerError, TriggerOutcome,
    UpdateTriggerPort, VersionQueryError, VersionSide,
};
pub use services::{
    CheckError, InteractiveChecker, InteractiveOutcome, SilentChecker, SilentOutcome,
    ThrottlePolicy, UpdaterCore, VersionProbe, VersionReport,
};
pub use settings::{
    DEFAULT_THROTTLE_WINDOW_SECS, SettingsError, SettingsUpdate, UpdaterSettings,
    validate_settings,
};

// Re-export path utilities
pub use paths::{PathError, ResolvedPaths, state_file_path, workspace_root};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
