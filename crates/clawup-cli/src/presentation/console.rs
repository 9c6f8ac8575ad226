//! Console rendering of check events.

use clawup_core::{CheckEvent, CheckEventEmitter};

/// How much a check prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Full progress for a human at the terminal.
    #[default]
    Interactive,
    /// Nothing except the update announcement.
    Heartbeat,
}

/// Where a rendered line goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Out(String),
    Err(String),
}

/// Render one event for `mode`, or `None` if the mode hides it.
pub fn render_event(mode: OutputMode, event: &CheckEvent) -> Option<Line> {
    match (mode, event) {
        (OutputMode::Heartbeat, CheckEvent::UpdateDetected { current, remote }) => Some(Line::Out(
            format!(
                "🚨 **UPDATE DETECTED**\nCurrent: {current} | New: {remote}\nInitiating auto-update sequence..."
            ),
        )),
        (OutputMode::Heartbeat, _) => None,

        (_, CheckEvent::CheckStarted { package }) => {
            Some(Line::Out(format!("Checking for {package} updates...")))
        }
        (_, CheckEvent::VersionQueryFailed { side, reason }) => Some(Line::Err(format!(
            "Failed to get {side} version: {reason}"
        ))),
        (_, CheckEvent::VersionsUnavailable) => {
            Some(Line::Err("Could not determine versions.".to_string()))
        }
        (_, CheckEvent::VersionsResolved { current, remote }) => Some(Line::Out(format!(
            "Current: {current}\nRemote:  {remote}"
        ))),
        (_, CheckEvent::UpToDate { .. }) => Some(Line::Out("System is up to date.".to_string())),
        (_, CheckEvent::UpdateStarting { .. }) => Some(Line::Out(
            "Update available! Initiating update sequence...".to_string(),
        )),
        (_, CheckEvent::UpdateDetected { current, remote }) => Some(Line::Out(format!(
            "Update detected: {current} -> {remote}"
        ))),
        (_, CheckEvent::TriggerFailed { reason }) => {
            Some(Line::Err(format!("Update failed: {reason}")))
        }
    }
}

/// Prints check events to stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEmitter {
    mode: OutputMode,
}

impl ConsoleEmitter {
    pub const fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl CheckEventEmitter for ConsoleEmitter {
    fn emit(&self, event: CheckEvent) {
        match render_event(self.mode, &event) {
            Some(Line::Out(text)) => println!("{text}"),
            Some(Line::Err(text)) => eprintln!("{text}"),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clawup_core::VersionSide;

    fn detected() -> CheckEvent {
        CheckEvent::UpdateDetected {
            current: "1.2.0".to_string(),
            remote: "1.3.0".to_string(),
        }
    }

    #[test]
    fn heartbeat_prints_only_the_announcement() {
        assert_eq!(
            render_event(OutputMode::Heartbeat, &detected()),
            Some(Line::Out(
                "🚨 **UPDATE DETECTED**\nCurrent: 1.2.0 | New: 1.3.0\nInitiating auto-update sequence..."
                    .to_string()
            ))
        );
        assert_eq!(
            render_event(OutputMode::Heartbeat, &CheckEvent::VersionsUnavailable),
            None
        );
        assert_eq!(
            render_event(
                OutputMode::Heartbeat,
                &CheckEvent::TriggerFailed {
                    reason: "boom".to_string()
                }
            ),
            None
        );
    }

    #[test]
    fn interactive_reports_versions() {
        assert_eq!(
            render_event(
                OutputMode::Interactive,
                &CheckEvent::VersionsResolved {
                    current: "1.2.0".to_string(),
                    remote: "1.3.0".to_string(),
                }
            ),
            Some(Line::Out("Current: 1.2.0\nRemote:  1.3.0".to_string()))
        );
    }

    #[test]
    fn interactive_failures_go_to_stderr() {
        let line = render_event(
            OutputMode::Interactive,
            &CheckEvent::VersionQueryFailed {
                side: VersionSide::Registry,
                reason: "timed out".to_string(),
            },
        );
        assert_eq!(
            line,
            Some(Line::Err(
                "Failed to get remote version: timed out".to_string()
            ))
        );
        assert!(matches!(
            render_event(OutputMode::Interactive, &CheckEvent::VersionsUnavailable),
            Some(Line::Err(_))
        ));
    }
}
