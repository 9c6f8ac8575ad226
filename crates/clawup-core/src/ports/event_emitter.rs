//! Event emitter trait for check progress reporting.
//!
//! This module defines the abstraction for surfacing [`CheckEvent`]s.
//! Implementations handle presentation details (console, logs, nothing).

use crate::events::CheckEvent;

/// Trait for emitting check events.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and contexts that don't present progress
/// - Adapter-specific implementations (console output in the CLI)
pub trait CheckEventEmitter: Send + Sync {
    /// Emit a check event.
    ///
    /// Must return promptly: the next step may be a call that never returns.
    fn emit(&self, event: CheckEvent);
}

/// A no-op event emitter.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl CheckEventEmitter for NoopEmitter {
    fn emit(&self, _event: CheckEvent) {
        // Intentionally do nothing
    }
}
