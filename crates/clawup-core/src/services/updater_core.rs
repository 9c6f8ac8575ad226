//! `UpdaterCore` - the primary application facade.
//!
//! Adapters (the CLI today) build an `UpdaterCore` at their composition root
//! from a [`Ports`] container and the validated settings, then pick the
//! checker matching the invocation mode.

use std::sync::Arc;

use super::{InteractiveChecker, SilentChecker, ThrottlePolicy, VersionProbe};
use crate::ports::{CheckStateStore, Ports};
use crate::settings::UpdaterSettings;

/// The core application facade.
pub struct UpdaterCore {
    interactive: InteractiveChecker,
    silent: SilentChecker,
    state_store: Arc<dyn CheckStateStore>,
}

impl UpdaterCore {
    /// Create a new `UpdaterCore` with the given ports and settings.
    pub fn new(ports: Ports, settings: &UpdaterSettings) -> Self {
        let probe = Arc::new(VersionProbe::new(
            ports.installed,
            ports.registry,
            settings.package_spec(),
        ));

        let interactive =
            InteractiveChecker::new(probe.clone(), ports.trigger.clone(), ports.emitter.clone());

        let silent = SilentChecker::new(
            probe,
            ports.trigger,
            ports.state_store.clone(),
            ports.clock,
            ports.emitter,
            ThrottlePolicy {
                key: settings.check_key.clone(),
                window: settings.throttle_window(),
            },
        );

        Self {
            interactive,
            silent,
            state_store: ports.state_store,
        }
    }

    /// Access the interactive checker.
    pub const fn interactive(&self) -> &InteractiveChecker {
        &self.interactive
    }

    /// Access the silent throttled checker.
    pub const fn silent(&self) -> &SilentChecker {
        &self.silent
    }

    /// Access the check state store for operator tooling.
    pub fn state_store(&self) -> &Arc<dyn CheckStateStore> {
        &self.state_store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UPDATE_CHECK_KEY;
    use crate::ports::{FixedClock, NoopEmitter};
    use crate::services::test_support::{MemoryStateStore, installed, registry, trigger};
    use crate::services::{InteractiveOutcome, SilentOutcome};

    #[tokio::test]
    async fn wires_settings_into_both_checkers() {
        let mut settings = UpdaterSettings::with_state_file("/tmp/unused.json");
        settings.check_key = "openclaw-update".to_string();
        settings.throttle_window_secs = 60;

        let store = Arc::new(MemoryStateStore::default());
        let ports = Ports::new(
            installed("1.2.0", 2),
            registry("1.2.0", 2),
            trigger(0),
            store.clone(),
            Arc::new(FixedClock(1_000_000)),
            Arc::new(NoopEmitter::new()),
        );
        let core = UpdaterCore::new(ports, &settings);

        assert_eq!(core.silent().policy().key, "openclaw-update");
        assert_eq!(core.silent().policy().window.as_secs(), 60);

        assert_eq!(core.silent().run().await.unwrap(), SilentOutcome::UpToDate);
        let stored = store.stored().unwrap();
        assert_eq!(stored.last_check("openclaw-update"), Some(1_000_000));
        assert_eq!(stored.last_check(UPDATE_CHECK_KEY), None);

        // Interactive never consults or writes state.
        assert_eq!(
            core.interactive().run().await.unwrap(),
            InteractiveOutcome::UpToDate {
                version: "1.2.0".to_string()
            }
        );
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load_count(), 1);
    }
}
