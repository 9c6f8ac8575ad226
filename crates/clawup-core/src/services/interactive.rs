//! Interactive checker: a human is waiting for a definitive answer.
//!
//! Every failure is returned to the caller; nothing is throttled and the
//! check state is never touched.

use std::sync::Arc;

use tracing::{error, info};

use super::error::CheckError;
use super::version_probe::VersionProbe;
use crate::domain::UpdateDecision;
use crate::events::CheckEvent;
use crate::ports::{CheckEventEmitter, TriggerOutcome, UpdateTriggerPort};

/// Successful result of an interactive check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveOutcome {
    /// Installed version matches the registry.
    UpToDate { version: String },
    /// The update routine was started and returned.
    UpdateTriggered {
        current: String,
        remote: String,
        outcome: TriggerOutcome,
    },
}

/// Runs a single, unthrottled update check.
pub struct InteractiveChecker {
    probe: Arc<VersionProbe>,
    trigger: Arc<dyn UpdateTriggerPort>,
    emitter: Arc<dyn CheckEventEmitter>,
}

impl InteractiveChecker {
    pub fn new(
        probe: Arc<VersionProbe>,
        trigger: Arc<dyn UpdateTriggerPort>,
        emitter: Arc<dyn CheckEventEmitter>,
    ) -> Self {
        Self {
            probe,
            trigger,
            emitter,
        }
    }

    /// Check both versions and update on mismatch.
    ///
    /// If the update routine restarts the host this call never returns,
    /// which is the expected terminal outcome.
    pub async fn run(&self) -> Result<InteractiveOutcome, CheckError> {
        self.emitter.emit(CheckEvent::CheckStarted {
            package: self.probe.package().name.clone(),
        });

        let report = self.probe.probe().await;
        for (side, e) in report.failures() {
            self.emitter.emit(CheckEvent::VersionQueryFailed {
                side,
                reason: e.to_string(),
            });
        }

        let pair = report.pair();
        let Some((current, remote)) = pair.both() else {
            self.emitter.emit(CheckEvent::VersionsUnavailable);
            return Err(CheckError::VersionsUnavailable);
        };
        let (current, remote) = (current.to_string(), remote.to_string());

        self.emitter.emit(CheckEvent::VersionsResolved {
            current: current.clone(),
            remote: remote.clone(),
        });

        match pair.decide() {
            UpdateDecision::UpToDate => {
                info!(version = %current, "System is up to date");
                self.emitter.emit(CheckEvent::UpToDate {
                    version: current.clone(),
                });
                Ok(InteractiveOutcome::UpToDate { version: current })
            }
            UpdateDecision::UpdateAvailable => {
                info!(%current, %remote, "Update available, starting update routine");
                self.emitter.emit(CheckEvent::UpdateStarting {
                    current: current.clone(),
                    remote: remote.clone(),
                });

                match self.trigger.trigger().await {
                    Ok(outcome) => Ok(InteractiveOutcome::UpdateTriggered {
                        current,
                        remote,
                        outcome,
                    }),
                    Err(e) => {
                        error!(error = %e, "Update routine failed");
                        self.emitter.emit(CheckEvent::TriggerFailed {
                            reason: e.to_string(),
                        });
                        Err(CheckError::Trigger(e))
                    }
                }
            }
            UpdateDecision::Indeterminate => {
                self.emitter.emit(CheckEvent::VersionsUnavailable);
                Err(CheckError::VersionsUnavailable)
            }
        }
    }
}
