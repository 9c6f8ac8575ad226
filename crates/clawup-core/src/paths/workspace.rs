//! Workspace root and state-file resolution.
//!
//! The state file lives under the agent workspace so that it sits next to
//! the other heartbeat bookkeeping sharing it.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the workspace root.
pub const WORKSPACE_ENV: &str = "CLAWUP_WORKSPACE";

/// Default workspace location relative to the home directory.
pub const DEFAULT_WORKSPACE_RELATIVE: &str = ".openclaw/workspace";

/// State file location relative to the workspace root.
pub const STATE_FILE_RELATIVE: &str = "memory/heartbeat-state.json";

/// Where the workspace root came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceSource {
    /// `CLAWUP_WORKSPACE` was set.
    EnvVar,
    /// `~/.openclaw/workspace`.
    HomeDefault,
    /// No home directory; the current directory was used.
    CurrentDir,
}

/// A resolved workspace root and its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceResolution {
    pub path: PathBuf,
    pub source: WorkspaceSource,
}

/// Resolve the workspace root.
///
/// Resolution order:
/// 1. `CLAWUP_WORKSPACE` environment variable
/// 2. `~/.openclaw/workspace`
/// 3. The current working directory
pub fn resolve_workspace_root() -> Result<WorkspaceResolution, PathError> {
    if let Ok(raw) = env::var(WORKSPACE_ENV) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PathError::EmptyPath(WORKSPACE_ENV));
        }
        return Ok(WorkspaceResolution {
            path: PathBuf::from(trimmed),
            source: WorkspaceSource::EnvVar,
        });
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(WorkspaceResolution {
            path: home.join(DEFAULT_WORKSPACE_RELATIVE),
            source: WorkspaceSource::HomeDefault,
        });
    }

    let cwd = env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))?;
    Ok(WorkspaceResolution {
        path: cwd,
        source: WorkspaceSource::CurrentDir,
    })
}

/// The workspace root path.
pub fn workspace_root() -> Result<PathBuf, PathError> {
    resolve_workspace_root().map(|r| r.path)
}

/// Default location of the persisted check state.
pub fn state_file_path() -> Result<PathBuf, PathError> {
    Ok(workspace_root()?.join(STATE_FILE_RELATIVE))
}
