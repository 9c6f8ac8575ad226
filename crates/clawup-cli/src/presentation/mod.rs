//! Shared CLI presentation utilities.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Functions return strings where practical so they can be tested

mod console;
mod state_view;

pub use console::{ConsoleEmitter, Line, OutputMode, render_event};
pub use state_view::{format_age, render_state};
