//! Main CLI parser and top-level argument handling.
//!
//! Every setting can be given as a flag or a `CLAWUP_*` environment
//! variable (a `.env` file in the working directory is loaded first).
//! Flags win over the environment, which wins over built-in defaults.

use std::path::PathBuf;

use clap::Parser;
use clawup_core::SettingsUpdate;

use crate::commands::Commands;

/// Keep an installed OpenClaw in step with its registry channel.
#[derive(Parser, Debug)]
#[command(name = "clawup")]
#[command(about = "Check for and apply OpenClaw updates")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Location of the persisted check state
    #[arg(long, env = "CLAWUP_STATE_FILE", global = true)]
    pub state_file: Option<PathBuf>,

    /// Minimum seconds between two background checks
    #[arg(long = "throttle-secs", env = "CLAWUP_THROTTLE_SECS", global = true)]
    pub throttle_secs: Option<u64>,

    /// Key under `lastChecks` owned by the update check
    #[arg(long, env = "CLAWUP_CHECK_KEY", global = true)]
    pub check_key: Option<String>,

    /// Package name on the registry
    #[arg(long, env = "CLAWUP_PACKAGE", global = true)]
    pub package: Option<String>,

    /// Registry channel (dist-tag) to follow
    #[arg(long, env = "CLAWUP_CHANNEL", global = true)]
    pub channel: Option<String>,

    /// Command printing the installed version
    #[arg(long, env = "CLAWUP_VERSION_COMMAND", global = true)]
    pub version_command: Option<String>,

    /// Command printing the latest published version; `{package}` expands to name@channel
    #[arg(long, env = "CLAWUP_REGISTRY_COMMAND", global = true)]
    pub registry_command: Option<String>,

    /// Command running the update-and-restart routine
    #[arg(long, env = "CLAWUP_TRIGGER_COMMAND", global = true)]
    pub trigger_command: Option<String>,

    /// Seconds a single version query may take
    #[arg(long = "query-timeout-secs", env = "CLAWUP_QUERY_TIMEOUT_SECS", global = true)]
    pub query_timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Settings overrides given on the command line or in the environment.
    pub fn settings_update(&self) -> SettingsUpdate {
        SettingsUpdate {
            throttle_window_secs: self.throttle_secs,
            state_file: self.state_file.clone(),
            check_key: self.check_key.clone(),
            package: self.package.clone(),
            channel: self.channel.clone(),
            version_command: self.version_command.clone(),
            registry_command: self.registry_command.clone(),
            trigger_command: self.trigger_command.clone(),
            query_timeout_secs: self.query_timeout_secs,
        }
    }
}
