//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Version and registry queries (via clawup-runtime)
//! - Update trigger (via clawup-runtime)
//! - JSON state store and system clock (via clawup-runtime)
//! - The console event emitter for the requested output mode
//!
//! Command handlers receive the fully-composed `UpdaterCore`.

use std::sync::Arc;

use clawup_core::{
    ClockPort, Ports, SettingsUpdate, UpdaterCore, UpdaterSettings, validate_settings,
};
use clawup_runtime::{
    CommandLine, CommandRegistry, CommandUpdateTrigger, CommandVersionSource, JsonFileStateStore,
    SystemClock,
};
use tracing::debug;

use crate::error::CliError;
use crate::presentation::{ConsoleEmitter, OutputMode};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Overrides from flags and environment.
    pub overrides: SettingsUpdate,
    /// How check progress is printed.
    pub output: OutputMode,
}

impl CliConfig {
    pub fn new(overrides: SettingsUpdate, output: OutputMode) -> Self {
        Self { overrides, output }
    }

    /// Resolve defaults, apply overrides and validate.
    pub fn settings(&self) -> Result<UpdaterSettings, CliError> {
        let mut settings = match self.overrides.state_file {
            Some(ref path) => UpdaterSettings::with_state_file(path.clone()),
            None => UpdaterSettings::with_defaults()?,
        };
        settings.merge(&self.overrides);
        validate_settings(&settings)?;
        Ok(settings)
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: UpdaterCore,
    /// The effective settings.
    pub settings: UpdaterSettings,
    /// Clock shared with the silent checker.
    pub clock: Arc<dyn ClockPort>,
}

impl CliContext {
    /// Access the `UpdaterCore`.
    pub const fn app(&self) -> &UpdaterCore {
        &self.app
    }

    /// Access the effective settings.
    pub const fn settings(&self) -> &UpdaterSettings {
        &self.settings
    }

    /// Current time in epoch milliseconds.
    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Resolves and validates settings
/// 2. Parses the configured command lines
/// 3. Creates the runtime adapters
/// 4. Assembles the `UpdaterCore`
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    // 1. Settings
    let settings = config.settings()?;
    debug!(?settings, "Resolved updater settings");

    // 2. Command lines
    let version_command = CommandLine::parse(&settings.version_command)?;
    let registry_command = CommandLine::parse(&settings.registry_command)?;
    let trigger_command = CommandLine::parse(&settings.trigger_command)?;

    // 3. Adapters
    let timeout = settings.query_timeout();
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let ports = Ports::new(
        Arc::new(CommandVersionSource::new(version_command, timeout)),
        Arc::new(CommandRegistry::new(registry_command, timeout)),
        Arc::new(CommandUpdateTrigger::new(trigger_command)),
        Arc::new(JsonFileStateStore::new(settings.state_file.clone())),
        clock.clone(),
        Arc::new(ConsoleEmitter::new(config.output)),
    );

    // 4. Core
    let app = UpdaterCore::new(ports, &settings);

    Ok(CliContext {
        app,
        settings,
        clock,
    })
}
