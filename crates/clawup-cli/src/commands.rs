//! Subcommands.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check for an update now and install it if one is available
    Check,

    /// Throttled background check for periodic schedulers (no output unless updating)
    Heartbeat,

    /// Inspect or reset the persisted check state
    #[command(subcommand)]
    State(StateCommand),

    /// Show the resolved workspace and state file paths
    Paths,
}

/// `clawup state` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum StateCommand {
    /// Show every recorded check and whether the update check is due
    Show,

    /// Forget a recorded check so the next heartbeat runs it immediately
    Reset {
        /// Check key to forget (defaults to the configured update key)
        #[arg(long)]
        key: Option<String>,
    },
}
