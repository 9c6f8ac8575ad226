//! Shared fakes for service tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::CheckState;
use crate::events::CheckEvent;
use crate::ports::check_state_store::CheckStateStore;
use crate::ports::update_trigger::MockUpdateTriggerPort;
use crate::ports::version_source::{MockInstalledVersionPort, MockRegistryPort};
use crate::ports::{
    CheckEventEmitter, InstalledVersionPort, RegistryPort, StateStoreError, TriggerError,
    TriggerOutcome, UpdateTriggerPort, VersionQueryError,
};

pub fn installed(version: &str, times: usize) -> Arc<dyn InstalledVersionPort> {
    let version = version.to_string();
    let mut mock = MockInstalledVersionPort::new();
    mock.expect_installed_version()
        .times(times)
        .returning(move || Ok(version.clone()));
    Arc::new(mock)
}

pub fn failing_installed(times: usize) -> Arc<dyn InstalledVersionPort> {
    let mut mock = MockInstalledVersionPort::new();
    mock.expect_installed_version().times(times).returning(|| {
        Err(VersionQueryError::Spawn {
            command: "openclaw --version".to_string(),
            reason: "No such file or directory".to_string(),
        })
    });
    Arc::new(mock)
}

pub fn registry(version: &str, times: usize) -> Arc<dyn RegistryPort> {
    let version = version.to_string();
    let mut mock = MockRegistryPort::new();
    mock.expect_latest_version()
        .times(times)
        .returning(move |_| Ok(version.clone()));
    Arc::new(mock)
}

pub fn failing_registry(times: usize) -> Arc<dyn RegistryPort> {
    let mut mock = MockRegistryPort::new();
    mock.expect_latest_version().times(times).returning(|package| {
        Err(VersionQueryError::ExitStatus {
            command: format!("npm view {package} version"),
            status: "exit status: 1".to_string(),
            stderr: "npm ERR! code E404".to_string(),
        })
    });
    Arc::new(mock)
}

pub fn trigger(times: usize) -> Arc<dyn UpdateTriggerPort> {
    let mut mock = MockUpdateTriggerPort::new();
    mock.expect_trigger()
        .times(times)
        .returning(|| Ok(TriggerOutcome::Completed));
    Arc::new(mock)
}

pub fn failing_trigger(times: usize) -> Arc<dyn UpdateTriggerPort> {
    let mut mock = MockUpdateTriggerPort::new();
    mock.expect_trigger().times(times).returning(|| {
        Err(TriggerError::ExitStatus {
            command: "openclaw gateway update.run".to_string(),
            code: 2,
        })
    });
    Arc::new(mock)
}

/// Emitter that keeps every event for later inspection.
#[derive(Default)]
pub struct RecordingEmitter {
    events: Mutex<Vec<CheckEvent>>,
}

impl RecordingEmitter {
    pub fn events(&self) -> Vec<CheckEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl CheckEventEmitter for RecordingEmitter {
    fn emit(&self, event: CheckEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// In-memory state store with injectable failures.
#[derive(Default)]
pub struct MemoryStateStore {
    state: Mutex<Option<CheckState>>,
    corrupt: bool,
    fail_save: bool,
    loads: AtomicUsize,
    saves: AtomicUsize,
}

impl MemoryStateStore {
    pub fn with_state(state: CheckState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
            ..Default::default()
        }
    }

    pub fn corrupt() -> Self {
        Self {
            corrupt: true,
            ..Default::default()
        }
    }

    pub fn failing_save() -> Self {
        Self {
            fail_save: true,
            ..Default::default()
        }
    }

    pub fn stored(&self) -> Option<CheckState> {
        self.state.lock().unwrap().clone()
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CheckStateStore for MemoryStateStore {
    async fn load(&self) -> Result<CheckState, StateStoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.corrupt {
            return Err(StateStoreError::Corrupt {
                path: "memory://state".into(),
                reason: "expected value at line 1 column 1".to_string(),
            });
        }
        Ok(self.stored().unwrap_or_default())
    }

    async fn save(&self, state: &CheckState) -> Result<(), StateStoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_save {
            return Err(StateStoreError::Io {
                path: "memory://state".into(),
                reason: "read-only file system".to_string(),
            });
        }
        *self.state.lock().unwrap() = Some(state.clone());
        Ok(())
    }
}
