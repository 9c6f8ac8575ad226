//! Path utilities for the clawup workspace and state file.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Resolution only: directories are created lazily by the state store
//! - No interactive/terminal I/O - adapters handle presentation

mod error;
mod resolver;
mod workspace;

#[cfg(test)]
mod test_utils;

pub use error::PathError;
pub use resolver::ResolvedPaths;
pub use workspace::{
    DEFAULT_WORKSPACE_RELATIVE, STATE_FILE_RELATIVE, WORKSPACE_ENV, WorkspaceResolution,
    WorkspaceSource, resolve_workspace_root, state_file_path, workspace_root,
};
