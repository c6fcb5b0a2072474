//! Timestamp type used throughout the registry.
//!
//! Timestamps are Unix epoch milliseconds (UTC), matching the persisted
//! `created_at` / `expires_at` columns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const MILLIS_PER_HOUR: u64 = 60 * 60 * 1000;

/// A Unix timestamp in milliseconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(millis: u64) -> Self {
        Self(millis)
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_millis() as u64;
        Self(millis)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// This timestamp advanced by a whole number of hours.
    pub fn plus_hours(&self, hours: u64) -> Self {
        Self(self.0.saturating_add(hours.saturating_mul(MILLIS_PER_HOUR)))
    }

    /// Milliseconds elapsed since this timestamp (relative to `now`).
    pub fn elapsed_since(&self, now: Timestamp) -> u64 {
        now.0.saturating_sub(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_hours_adds_millis() {
        let t = Timestamp::new(1_000);
        assert_eq!(t.plus_hours(2).as_millis(), 1_000 + 2 * MILLIS_PER_HOUR);
    }

    #[test]
    fn plus_hours_saturates() {
        let t = Timestamp::new(u64::MAX - 10);
        assert_eq!(t.plus_hours(1).as_millis(), u64::MAX);
    }

    #[test]
    fn elapsed_since_is_zero_for_future_timestamps() {
        let t = Timestamp::new(5_000);
        assert_eq!(t.elapsed_since(Timestamp::new(1_000)), 0);
        assert_eq!(t.elapsed_since(Timestamp::new(7_500)), 2_500);
    }

    #[test]
    fn ordering_follows_millis() {
        assert!(Timestamp::new(1) < Timestamp::new(2));
        assert!(Timestamp::EPOCH < Timestamp::new(1));
    }
}
