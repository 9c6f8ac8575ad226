//! Core services orchestrating ports and the decision engine.

mod error;
mod interactive;
mod silent;
mod updater_core;
mod version_probe;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::CheckError;
pub use interactive::{InteractiveChecker, InteractiveOutcome};
pub use silent::{SilentChecker, SilentOutcome, ThrottlePolicy};
pub use updater_core::UpdaterCore;
pub use version_probe::{VersionProbe, VersionReport};
