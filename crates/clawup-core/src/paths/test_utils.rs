//! Environment helpers for workspace-resolution tests.
//!
//! `CLAWUP_WORKSPACE` is process-global, so every test touching it holds
//! [`ENV_LOCK`] for its whole body.

use std::env;
use std::sync::Mutex;

/// Held by any test that reads or writes `CLAWUP_WORKSPACE`.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Puts a variable back the way the test found it when dropped.
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    /// Point `key` at `value` for the guard's lifetime.
    pub fn set(key: &str, value: &str) -> Self {
        Self::replace(key, Some(value))
    }

    /// Clear `key` for the guard's lifetime.
    pub fn unset(key: &str) -> Self {
        Self::replace(key, None)
    }

    fn replace(key: &str, value: Option<&str>) -> Self {
        let previous = env::var(key).ok();
        write_var(key, value);
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        write_var(&self.key, self.previous.as_deref());
    }
}

// Callers hold ENV_LOCK, so no other test thread touches the environment.
#[allow(unsafe_code)]
fn write_var(key: &str, value: Option<&str>) {
    match value {
        Some(value) => unsafe { env::set_var(key, value) },
        None => unsafe { env::remove_var(key) },
    }
}
