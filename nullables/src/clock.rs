//! Nullable clock — deterministic time for testing.

use patina_types::Timestamp;
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_millis: u64) -> Self {
        Self {
            current: Cell::new(initial_millis),
        }
    }

    /// Get the current time.
    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }

    /// Advance time by a number of milliseconds.
    pub fn advance(&self, millis: u64) {
        self.current.set(self.current.get() + millis);
    }

    /// Advance time by a whole number of hours.
    pub fn advance_hours(&self, hours: u64) {
        self.advance(hours * 60 * 60 * 1000);
    }

    /// Set the time to a specific value.
    pub fn set(&self, millis: u64) {
        self.current.set(millis);
    }
}
