//! Pure domain types: version pairs, the decision engine and check state.

mod check_state;
mod version;

pub use check_state::{CheckState, ThrottleStatus, UPDATE_CHECK_KEY};
pub use version::{UpdateDecision, VersionPair, decide};
