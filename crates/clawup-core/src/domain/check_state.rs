//! Persisted throttle state for background checks.
//!
//! The on-disk shape is shared with other heartbeat tasks:
//!
//! ```json
//! { "lastChecks": { "update": 1706000000000, "email": 1706000100000 } }
//! ```
//!
//! Keys and top-level fields written by other tasks are carried through a
//! load/save cycle untouched, whatever their JSON type. Only integer values
//! count as timestamps; anything else (`null`, floats, strings) reads as
//! "never checked" for throttling.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Check key used by the silent update checker.
pub const UPDATE_CHECK_KEY: &str = "update";

/// Mapping from check name to the epoch-millisecond timestamp of its last run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckState {
    /// Last run of each named check, in milliseconds since the Unix epoch.
    ///
    /// Kept as raw JSON so entries from other writers survive verbatim.
    #[serde(rename = "lastChecks", default)]
    pub last_checks: BTreeMap<String, Value>,

    /// Fields owned by other heartbeat tasks.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Whether a check may run now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleStatus {
    /// The throttle window has elapsed (or the check never ran).
    Due,
    /// The check ran recently; `remaining` is the time left in the window.
    Throttled { remaining: Duration },
}

impl ThrottleStatus {
    pub const fn is_due(self) -> bool {
        matches!(self, Self::Due)
    }
}

impl CheckState {
    /// State with no recorded checks.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Timestamp of the last run of `key`, if recorded as an integer.
    pub fn last_check(&self, key: &str) -> Option<i64> {
        self.last_checks.get(key).and_then(Value::as_i64)
    }

    /// Timestamp of the last run of `key` as a UTC date.
    pub fn last_check_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.last_check(key)
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    /// Record that `key` ran at `now_ms`.
    pub fn record(&mut self, key: &str, now_ms: i64) {
        self.last_checks.insert(key.to_string(), Value::from(now_ms));
    }

    /// Forget `key`, returning its previous raw value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.last_checks.remove(key)
    }

    /// Evaluate `key` against a throttle window at time `now_ms`.
    ///
    /// A missing timestamp counts as `0`, i.e. infinitely overdue.
    pub fn throttle_status(&self, key: &str, now_ms: i64, window: Duration) -> ThrottleStatus {
        let last = self.last_check(key).unwrap_or(0);
        let elapsed = i128::from(now_ms) - i128::from(last);
        let window_ms = i128::try_from(window.as_millis()).unwrap_or(i128::MAX);

        if elapsed < window_ms {
            let remaining = u64::try_from(window_ms - elapsed).unwrap_or(u64::MAX);
            ThrottleStatus::Throttled {
                remaining: Duration::from_millis(remaining),
            }
        } else {
            ThrottleStatus::Due
        }
    }
}
