//! Version tokens and the update decision engine.
//!
//! Versions are opaque tokens. They are never parsed or ordered: the remote
//! channel always names "whatever is newest", so any difference between the
//! installed and published token (including an apparent downgrade) means the
//! installation should converge on the remote one. Adding semver ordering
//! here would change when updates are triggered.

use serde::{Deserialize, Serialize};

/// Outcome of comparing the installed version against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateDecision {
    /// Both versions are known and identical.
    UpToDate,
    /// Both versions are known and differ.
    UpdateAvailable,
    /// At least one version could not be retrieved.
    Indeterminate,
}

impl UpdateDecision {
    /// Whether the update trigger should fire for this decision.
    pub const fn should_trigger(self) -> bool {
        matches!(self, Self::UpdateAvailable)
    }
}

impl std::fmt::Display for UpdateDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpToDate => write!(f, "up to date"),
            Self::UpdateAvailable => write!(f, "update available"),
            Self::Indeterminate => write!(f, "indeterminate"),
        }
    }
}

/// Decide whether an update is needed.
///
/// Byte equality is the only comparison performed.
pub fn decide(current: Option<&str>, remote: Option<&str>) -> UpdateDecision {
    match (current, remote) {
        (Some(current), Some(remote)) if current == remote => UpdateDecision::UpToDate,
        (Some(_), Some(_)) => UpdateDecision::UpdateAvailable,
        _ => UpdateDecision::Indeterminate,
    }
}

/// Installed and published versions captured by a single check.
///
/// Produced fresh on every check and never persisted. `None` means the
/// corresponding query failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionPair {
    /// Locally installed version.
    pub current: Option<String>,
    /// Latest version published on the configured channel.
    pub remote: Option<String>,
}

impl VersionPair {
    /// Create a pair from two retrieval outcomes.
    pub const fn new(current: Option<String>, remote: Option<String>) -> Self {
        Self { current, remote }
    }

    /// Run the decision engine over this pair.
    pub fn decide(&self) -> UpdateDecision {
        decide(self.current.as_deref(), self.remote.as_deref())
    }

    /// Both versions, if both were retrieved.
    pub fn both(&self) -> Option<(&str, &str)> {
        Some((self.current.as_deref()?, self.remote.as_deref()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_versions_are_up_to_date() {
        assert_eq!(decide(Some("1.2.0"), Some("1.2.0")), UpdateDecision::UpToDate);
    }

    #[test]
    fn different_versions_need_update() {
        assert_eq!(
            decide(Some("1.2.0"), Some("1.3.0")),
            UpdateDecision::UpdateAvailable
        );
    }

    #[test]
    fn downgrade_still_converges() {
        // Remote channel is authoritative; no ordering is applied.
        assert_eq!(
            decide(Some("2.0.0"), Some("1.9.9")),
            UpdateDecision::UpdateAvailable
        );
    }

    #[test]
    fn comparison_is_byte_exact() {
        assert_eq!(
            decide(Some("1.2.0"), Some("v1.2.0")),
            UpdateDecision::UpdateAvailable
        );
        assert_eq!(
            decide(Some("1.2.0-beta.1"), Some("1.2.0-Beta.1")),
            UpdateDecision::UpdateAvailable
        );
    }

    #[test]
    fn missing_version_is_indeterminate() {
        assert_eq!(decide(None, Some("1.2.0")), UpdateDecision::Indeterminate);
        assert_eq!(decide(Some("1.2.0"), None), UpdateDecision::Indeterminate);
        assert_eq!(decide(None, None), UpdateDecision::Indeterminate);
    }

    #[test]
    fn only_update_available_triggers() {
        assert!(UpdateDecision::UpdateAvailable.should_trigger());
        assert!(!UpdateDecision::UpToDate.should_trigger());
        assert!(!UpdateDecision::Indeterminate.should_trigger());
    }

    #[test]
    fn pair_delegates_to_engine() {
        let pair = VersionPair::new(Some("1.0.0".into()), Some("1.0.1".into()));
        assert_eq!(pair.decide(), UpdateDecision::UpdateAvailable);
        assert_eq!(pair.both(), Some(("1.0.0", "1.0.1")));

        let partial = VersionPair::new(Some("1.0.0".into()), None);
        assert_eq!(partial.decide(), UpdateDecision::Indeterminate);
        assert_eq!(partial.both(), None);
    }
}
