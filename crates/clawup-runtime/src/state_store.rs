//! JSON file check-state store.
//!
//! Format (shared with other heartbeat tasks):
//! ```json
//! {
//!   "lastChecks": {
//!     "update": 1767225600000
//!   }
//! }
//! ```
//!
//! Writes go to a sibling temp file which is then renamed over the target,
//! so a concurrent reader sees either the old or the new document.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use clawup_core::{CheckState, CheckStateStore, StateStoreError};
use tokio::fs;
use tracing::debug;

/// Check state persisted as a JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStateStore {
    path: PathBuf,
}

impl JsonFileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map_or_else(|| "state".into(), |n| n.to_string_lossy().into_owned());
        self.path
            .with_file_name(format!("{name}.{}.tmp", std::process::id()))
    }

    fn io_error(path: &Path, e: &io::Error) -> StateStoreError {
        StateStoreError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    }
}

#[async_trait]
impl CheckStateStore for JsonFileStateStore {
    async fn load(&self) -> Result<CheckState, StateStoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No check state yet");
                return Ok(CheckState::empty());
            }
            Err(e) => return Err(Self::io_error(&self.path, &e)),
        };

        // A zero-length file is what a concurrent truncating writer leaves.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(CheckState::empty());
        }

        serde_json::from_slice(&bytes).map_err(|e| StateStoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    async fn save(&self, state: &CheckState) -> Result<(), StateStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::io_error(parent, &e))?;
        }

        let mut json = serde_json::to_string_pretty(state)
            .map_err(|e| StateStoreError::Serialization(e.to_string()))?;
        json.push('\n');

        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| Self::io_error(&temp, &e))?;

        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(Self::io_error(&self.path, &e));
        }

        debug!(path = %self.path.display(), "Check state saved");
        Ok(())
    }
}
