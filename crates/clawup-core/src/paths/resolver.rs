//! Pure path resolver for CLI introspection.
//!
//! Captures every resolved path in one call so `clawup paths` and tests
//! agree on the same values.

use std::path::PathBuf;

use super::{PathError, STATE_FILE_RELATIVE, WorkspaceSource, resolve_workspace_root};

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root of the agent workspace.
    pub workspace_root: PathBuf,
    /// How the workspace root was resolved.
    pub workspace_source: WorkspaceSource,
    /// Path to the persisted check state.
    pub state_file: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Self::resolve_with_state_file(None)
    }

    /// Resolve with an explicit state-file override (`--state-file`).
    pub fn resolve_with_state_file(state_file: Option<PathBuf>) -> Result<Self, PathError> {
        let workspace = resolve_workspace_root()?;
        let state_file =
            state_file.unwrap_or_else(|| workspace.path.join(STATE_FILE_RELATIVE));

        Ok(Self {
            workspace_root: workspace.path,
            workspace_source: workspace.source,
            state_file,
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "workspace_root = {}", self.workspace_root.display())?;
        writeln!(f, "workspace_source = {:?}", self.workspace_source)?;
        write!(f, "state_file = {}", self.state_file.display())
    }
}
