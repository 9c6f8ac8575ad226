//! Wall-clock port.

/// Source of the current time in milliseconds since the Unix epoch.
pub trait ClockPort: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// A clock frozen at a fixed instant. Useful in tests and dry runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}
