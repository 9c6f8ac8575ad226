//! Command-line adapter for clawup.
//!
//! `main.rs` parses arguments, calls [`bootstrap`] to wire the runtime
//! adapters into a [`clawup_core::UpdaterCore`], and dispatches to a handler.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

// Used by main.rs only
use tokio as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, StateCommand};
pub use error::CliError;
pub use parser::Cli;
pub use presentation::OutputMode;
