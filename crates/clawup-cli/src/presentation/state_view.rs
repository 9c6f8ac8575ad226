//! Rendering of persisted check state for `clawup state show`.

use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use clawup_core::{CheckState, ThrottleStatus};

/// Compact human duration, e.g. `2h 5m`, `45s`.
pub fn format_age(duration: Duration) -> String {
    let secs = duration.as_secs();
    let (days, hours, minutes, seconds) = (
        secs / 86_400,
        (secs % 86_400) / 3_600,
        (secs % 3_600) / 60,
        secs % 60,
    );

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

fn describe_entry(timestamp_ms: i64, now_ms: i64) -> String {
    let when = DateTime::<Utc>::from_timestamp_millis(timestamp_ms).map_or_else(
        || format!("{timestamp_ms} (out of range)"),
        |t| t.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
    );

    let age_ms = now_ms.saturating_sub(timestamp_ms);
    let age = Duration::from_millis(age_ms.unsigned_abs());
    if age_ms >= 0 {
        format!("{when} ({} ago)", format_age(age))
    } else {
        format!("{when} (in the future by {})", format_age(age))
    }
}

/// Render every recorded check and the status of `key`.
pub fn render_state(
    path: &Path,
    state: &CheckState,
    key: &str,
    status: ThrottleStatus,
    now_ms: i64,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "State file: {}", path.display());

    if state.last_checks.is_empty() {
        let _ = writeln!(out, "No checks recorded yet.");
    } else {
        let width = state.last_checks.keys().map(String::len).max().unwrap_or(0);
        for (name, value) in &state.last_checks {
            let description = value.as_i64().map_or_else(
                || format!("{value} (not a timestamp)"),
                |timestamp| describe_entry(timestamp, now_ms),
            );
            let _ = writeln!(out, "  {name:<width$}  {description}");
        }
    }

    match status {
        ThrottleStatus::Due => {
            let _ = write!(out, "Update check '{key}': due now");
        }
        ThrottleStatus::Throttled { remaining } => {
            let _ = write!(
                out,
                "Update check '{key}': throttled, due in {}",
                format_age(remaining)
            );
        }
    }
    out
}
