//! Paths command handler.
//!
//! Displays the resolved workspace and state file for diagnostics.

use std::path::PathBuf;

use anyhow::Result;
use clawup_core::ResolvedPaths;

use crate::error::CliError;

/// Execute the paths command in `key = value` format.
pub fn execute(state_file: Option<PathBuf>) -> Result<()> {
    let paths = ResolvedPaths::resolve_with_state_file(state_file).map_err(CliError::from)?;
    println!("{paths}");
    Ok(())
}
