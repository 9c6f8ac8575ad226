//! CLI-specific error types and mappings.
//!
//! Maps core and adapter errors to exit codes and user-facing messages.

use clawup_core::{CheckError, PathError, SettingsError, StateStoreError};
use clawup_runtime::CommandLineError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The update check itself failed.
    #[error("{0}")]
    Check(String),

    /// IO error (state file unreadable or unwritable).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The workspace (and with it the default state file) could not be resolved.
    #[error("Workspace unavailable: {0}")]
    Workspace(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: Check failed (versions unavailable, update routine failed)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Check(_) => 1,
            Self::Io(_) => 74,     // EX_IOERR
            Self::Config(_) | Self::Workspace(_) => 78, // EX_CONFIG
        }
    }
}

impl From<CheckError> for CliError {
    fn from(err: CheckError) -> Self {
        Self::Check(err.to_string())
    }
}

impl From<StateStoreError> for CliError {
    fn from(err: StateStoreError) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Workspace(err.to_string())
    }
}

impl From<CommandLineError> for CliError {
    fn from(err: CommandLineError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Exit code for an error returned from a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
