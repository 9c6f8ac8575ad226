//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No process or filesystem details in any signature
//! - The state store is injected with its location; no ambient state file
//! - The trigger returns a result that distinguishes "ran" from "failed"

pub mod check_state_store;
pub mod clock;
pub mod event_emitter;
pub mod update_trigger;
pub mod version_source;

use std::sync::Arc;

pub use check_state_store::{CheckStateStore, StateStoreError};
pub use clock::{ClockPort, FixedClock};
pub use event_emitter::{CheckEventEmitter, NoopEmitter};
pub use update_trigger::{TriggerError, TriggerOutcome, UpdateTriggerPort};
pub use version_source::{
    InstalledVersionPort, PackageSpec, RegistryPort, VersionQueryError, VersionSide,
};

/// Container for all port trait objects.
///
/// Adapters build one of these at their composition root and hand it to
/// [`crate::services::UpdaterCore`] without the core depending on concrete
/// implementations.
#[derive(Clone)]
pub struct Ports {
    /// Locally installed version query.
    pub installed: Arc<dyn InstalledVersionPort>,
    /// Registry version query.
    pub registry: Arc<dyn RegistryPort>,
    /// Update-and-restart routine.
    pub trigger: Arc<dyn UpdateTriggerPort>,
    /// Throttle state persistence (silent checks only).
    pub state_store: Arc<dyn CheckStateStore>,
    /// Wall clock.
    pub clock: Arc<dyn ClockPort>,
    /// Progress reporting.
    pub emitter: Arc<dyn CheckEventEmitter>,
}

impl Ports {
    /// Create a new Ports container.
    pub fn new(
        installed: Arc<dyn InstalledVersionPort>,
        registry: Arc<dyn RegistryPort>,
        trigger: Arc<dyn UpdateTriggerPort>,
        state_store: Arc<dyn CheckStateStore>,
        clock: Arc<dyn ClockPort>,
        emitter: Arc<dyn CheckEventEmitter>,
    ) -> Self {
        Self {
            installed,
            registry,
            trigger,
            state_store,
            clock,
            emitter,
        }
    }

    /// Replace the event emitter.
    #[must_use]
    pub fn with_emitter(mut self, emitter: Arc<dyn CheckEventEmitter>) -> Self {
        self.emitter = emitter;
        self
    }
}
