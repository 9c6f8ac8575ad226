//! Silent throttled checker for periodic background invocation.
//!
//! Run states:
//!
//! ```text
//! START -> THROTTLED -> END
//! START -> RETRIEVING -> PERSISTING -> UP_TO_DATE | INDETERMINATE | TRIGGERING -> END
//! ```
//!
//! There are no retries inside a run; the next scheduled invocation is the
//! retry. [`SilentChecker::run`] is fully fallible so it can be tested;
//! [`SilentChecker::run_silent`] is the only place errors are discarded.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::error::CheckError;
use super::version_probe::VersionProbe;
use crate::domain::{CheckState, ThrottleStatus, UpdateDecision};
use crate::events::CheckEvent;
use crate::ports::{CheckEventEmitter, CheckStateStore, ClockPort, TriggerOutcome, UpdateTriggerPort};

/// Which key to throttle on and for how long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrottlePolicy {
    pub key: String,
    pub window: Duration,
}

/// Result of one silent run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SilentOutcome {
    /// The window has not elapsed; nothing was queried or written.
    Throttled { remaining: Duration },
    /// Versions match.
    UpToDate,
    /// At least one version could not be retrieved.
    Indeterminate,
    /// The update routine was started and returned.
    UpdateTriggered(TriggerOutcome),
}

/// Best-effort background checker gated by persisted timestamps.
pub struct SilentChecker {
    probe: Arc<VersionProbe>,
    trigger: Arc<dyn UpdateTriggerPort>,
    store: Arc<dyn CheckStateStore>,
    clock: Arc<dyn ClockPort>,
    emitter: Arc<dyn CheckEventEmitter>,
    policy: ThrottlePolicy,
}

impl SilentChecker {
    pub fn new(
        probe: Arc<VersionProbe>,
        trigger: Arc<dyn UpdateTriggerPort>,
        store: Arc<dyn CheckStateStore>,
        clock: Arc<dyn ClockPort>,
        emitter: Arc<dyn CheckEventEmitter>,
        policy: ThrottlePolicy,
    ) -> Self {
        Self {
            probe,
            trigger,
            store,
            clock,
            emitter,
            policy,
        }
    }

    pub const fn policy(&self) -> &ThrottlePolicy {
        &self.policy
    }

    /// Run one check and swallow every failure.
    pub async fn run_silent(&self) {
        match self.run().await {
            Ok(outcome) => debug!(?outcome, "Silent update check finished"),
            Err(e) => debug!(error = %e, "Silent update check failed"),
        }
    }

    /// Run one check.
    pub async fn run(&self) -> Result<SilentOutcome, CheckError> {
        let mut state = self.load_state().await;
        let now = self.clock.now_millis();

        if let ThrottleStatus::Throttled { remaining } =
            state.throttle_status(&self.policy.key, now, self.policy.window)
        {
            debug!(
                key = %self.policy.key,
                remaining_secs = remaining.as_secs(),
                "Update check throttled"
            );
            return Ok(SilentOutcome::Throttled { remaining });
        }

        let report = self.probe.probe().await;

        // Persist before acting on the result so a hang or restart inside the
        // trigger cannot cause an immediate re-trigger on the next heartbeat.
        // A failed write aborts the run for the same reason.
        state.record(&self.policy.key, now);
        self.store.save(&state).await.map_err(CheckError::StatePersist)?;

        let pair = report.pair();
        match pair.decide() {
            UpdateDecision::UpToDate => Ok(SilentOutcome::UpToDate),
            UpdateDecision::Indeterminate => Ok(SilentOutcome::Indeterminate),
            UpdateDecision::UpdateAvailable => {
                if let Some((current, remote)) = pair.both() {
                    info!(%current, %remote, "Update detected, starting update routine");
                    self.emitter.emit(CheckEvent::UpdateDetected {
                        current: current.to_string(),
                        remote: remote.to_string(),
                    });
                }

                let outcome = self.trigger.trigger().await?;
                Ok(SilentOutcome::UpdateTriggered(outcome))
            }
        }
    }

    /// Load state, degrading any failure to "never checked".
    async fn load_state(&self) -> CheckState {
        match self.store.load().await {
            Ok(state) => state,
            Err(e) => {
                debug!(error = %e, "Treating unreadable check state as empty");
                CheckState::empty()
            }
        }
    }
}
