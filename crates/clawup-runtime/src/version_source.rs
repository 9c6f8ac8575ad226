//! Command-backed version queries.

use std::time::Duration;

use async_trait::async_trait;
use clawup_core::settings::PACKAGE_PLACEHOLDER;
use clawup_core::{InstalledVersionPort, PackageSpec, RegistryPort, VersionQueryError};

use crate::command::{CommandLine, capture_version};

/// Reads the installed version from a command such as `openclaw --version`.
#[derive(Debug, Clone)]
pub struct CommandVersionSource {
    command: CommandLine,
    timeout: Duration,
}

impl CommandVersionSource {
    pub const fn new(command: CommandLine, timeout: Duration) -> Self {
        Self { command, timeout }
    }
}

#[async_trait]
impl InstalledVersionPort for CommandVersionSource {
    async fn installed_version(&self) -> Result<String, VersionQueryError> {
        capture_version(&self.command, self.timeout).await
    }
}

/// Reads the latest published version from a registry command.
///
/// `{package}` in the command arguments expands to `<name>@<channel>`, so
/// the default `npm view {package} version` becomes
/// `npm view openclaw@beta version`.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    template: CommandLine,
    timeout: Duration,
}

impl CommandRegistry {
    pub const fn new(template: CommandLine, timeout: Duration) -> Self {
        Self { template, timeout }
    }

    /// The concrete command line for `package`.
    pub fn command_for(&self, package: &PackageSpec) -> CommandLine {
        self.template
            .substitute(PACKAGE_PLACEHOLDER, &package.to_string())
    }
}

#[async_trait]
impl RegistryPort for CommandRegistry {
    async fn latest_version(&self, package: &PackageSpec) -> Result<String, VersionQueryError> {
        capture_version(&self.command_for(package), self.timeout).await
    }
}
