//! Process and filesystem adapters for clawup.
//!
//! Each type here implements one port from `clawup-core`:
//!
//! | Port | Adapter |
//! |------|---------|
//! | `InstalledVersionPort` | [`CommandVersionSource`] |
//! | `RegistryPort` | [`CommandRegistry`] |
//! | `UpdateTriggerPort` | [`CommandUpdateTrigger`] |
//! | `CheckStateStore` | [`JsonFileStateStore`] |
//! | `ClockPort` | [`SystemClock`] |
#![deny(unsafe_code)]

mod clock;
pub mod command;
mod state_store;
mod trigger;
mod version_source;

pub use clock::SystemClock;
pub use command::{CommandLine, CommandLineError};
pub use state_store::JsonFileStateStore;
pub use trigger::CommandUpdateTrigger;
pub use version_source::{CommandRegistry, CommandVersionSource};
