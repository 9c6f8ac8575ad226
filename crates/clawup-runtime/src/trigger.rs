//! Update routine launcher.
//!
//! The routine inherits the terminal so its own progress output reaches
//! the user. It is expected to restart the host, possibly killing this
//! process before `trigger` returns.

use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use clawup_core::{TriggerError, TriggerOutcome, UpdateTriggerPort};
use tracing::{info, warn};

use crate::command::CommandLine;

/// Runs a configured command such as `openclaw gateway update.run`.
#[derive(Debug, Clone)]
pub struct CommandUpdateTrigger {
    command: CommandLine,
}

impl CommandUpdateTrigger {
    pub const fn new(command: CommandLine) -> Self {
        Self { command }
    }
}

#[async_trait]
impl UpdateTriggerPort for CommandUpdateTrigger {
    async fn trigger(&self) -> Result<TriggerOutcome, TriggerError> {
        let command = self.command.to_string();
        info!(%command, "Starting update routine");

        let status = self
            .command
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| TriggerError::Spawn {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        classify_exit(command, status)
    }
}

/// Map the routine's exit status to an outcome.
///
/// Termination by signal is the normal shape of a host restart.
fn classify_exit(command: String, status: ExitStatus) -> Result<TriggerOutcome, TriggerError> {
    if status.success() {
        return Ok(TriggerOutcome::Completed);
    }

    match status.code() {
        Some(code) => Err(TriggerError::ExitStatus { command, code }),
        None => {
            warn!(%command, %status, "Update routine was interrupted");
            Ok(TriggerOutcome::Interrupted)
        }
    }
}
