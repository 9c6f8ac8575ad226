//! Silent throttled check for periodic schedulers.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute `clawup heartbeat`.
///
/// Never fails: every check error is absorbed by the silent checker.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    ctx.app().silent().run_silent().await;
    Ok(())
}
