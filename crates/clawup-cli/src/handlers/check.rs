//! Interactive update check.

use anyhow::Result;
use clawup_core::{InteractiveOutcome, TriggerOutcome};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute `clawup check`.
///
/// Progress is printed by the console emitter; this only reports the
/// outcome and maps failures to exit code 1.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let outcome = ctx.app().interactive().run().await.map_err(CliError::from)?;

    if let InteractiveOutcome::UpdateTriggered {
        outcome: TriggerOutcome::Interrupted,
        ..
    } = outcome
    {
        println!("Update routine was interrupted; a restart is likely in progress.");
    }

    Ok(())
}
