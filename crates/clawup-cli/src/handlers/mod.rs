//! Command handlers that delegate to `UpdaterCore`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that call the core and format output for the terminal
//!
//! Handlers should NOT contain check logic or touch adapters directly.

pub mod check;
pub mod heartbeat;
pub mod paths;
pub mod state;
