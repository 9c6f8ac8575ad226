//! Command lines and captured execution for version queries.
//!
//! Command lines are configured as plain strings and split on whitespace.
//! There is no shell: quoting and pipes are not interpreted.

use std::process::Stdio;
use std::time::Duration;

use clawup_core::VersionQueryError;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Errors from parsing a configured command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandLineError {
    #[error("Command line is empty")]
    Empty,
}

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Split a configured command line on whitespace.
    pub fn parse(line: &str) -> Result<Self, CommandLineError> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(CommandLineError::Empty)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Replace `placeholder` in every argument with `value`.
    #[must_use]
    pub fn substitute(&self, placeholder: &str, value: &str) -> Self {
        Self {
            program: self.program.clone(),
            args: self
                .args
                .iter()
                .map(|arg| arg.replace(placeholder, value))
                .collect(),
        }
    }

    /// Build a tokio command for this line.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Run `line` and return its trimmed standard output as a version token.
///
/// The child is killed if it outlives `timeout`.
pub async fn capture_version(
    line: &CommandLine,
    timeout: Duration,
) -> Result<String, VersionQueryError> {
    let command = line.to_string();
    debug!(%command, "Running version query");

    let mut cmd = line.to_command();
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn().map_err(|e| VersionQueryError::Spawn {
        command: command.clone(),
        reason: e.to_string(),
    })?;

    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(result) => result.map_err(|e| VersionQueryError::Spawn {
            command: command.clone(),
            reason: e.to_string(),
        })?,
        Err(_) => return Err(VersionQueryError::TimedOut { command, timeout }),
    };

    if !output.status.success() {
        return Err(VersionQueryError::ExitStatus {
            command,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    parse_version_output(&command, &output.stdout)
}

/// Validate and trim captured output.
fn parse_version_output(command: &str, stdout: &[u8]) -> Result<String, VersionQueryError> {
    let text = std::str::from_utf8(stdout).map_err(|e| VersionQueryError::Malformed {
        command: command.to_string(),
        reason: format!("output is not UTF-8: {e}"),
    })?;

    let version = text.trim();
    if version.is_empty() {
        return Err(VersionQueryError::Malformed {
            command: command.to_string(),
            reason: "empty output".to_string(),
        });
    }

    Ok(version.to_string())
}
