//! Operator tooling for the persisted check state.
//!
//! Unlike the heartbeat, these commands report load and save failures.

use anyhow::Result;
use clawup_core::CheckState;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_state;

async fn load(ctx: &CliContext) -> Result<CheckState> {
    Ok(ctx
        .app()
        .state_store()
        .load()
        .await
        .map_err(CliError::from)?)
}

/// Execute `clawup state show`.
pub async fn show(ctx: &CliContext) -> Result<()> {
    let state = load(ctx).await?;
    let settings = ctx.settings();
    let now = ctx.now_millis();
    let status = state.throttle_status(&settings.check_key, now, settings.throttle_window());

    println!(
        "{}",
        render_state(&settings.state_file, &state, &settings.check_key, status, now)
    );
    Ok(())
}

/// Execute `clawup state reset`.
///
/// Removes `key` (the configured update key by default). Nothing is written
/// if the key was not recorded.
pub async fn reset(ctx: &CliContext, key: Option<&str>) -> Result<()> {
    let key = key.unwrap_or(ctx.settings().check_key.as_str());
    let mut state = load(ctx).await?;

    if state.remove(key).is_none() {
        println!("No last check recorded for '{key}'.");
        return Ok(());
    }

    ctx.app()
        .state_store()
        .save(&state)
        .await
        .map_err(CliError::from)?;
    println!("Cleared last check for '{key}'; the next heartbeat will check immediately.");
    Ok(())
}
