//! Access code storage trait.

use crate::StoreError;
use patina_types::{AccessCode, Timestamp};

/// Trait for storing access codes.
///
/// `record_usage` and `sweep_expired` are single logical updates so the
/// backend can execute each as one atomic statement.
pub trait AccessCodeStore: Send + Sync {
    /// Persist a freshly issued code. Codes are random enough that a key
    /// collision is a [`StoreError::Duplicate`], not an upsert.
    fn insert(&self, code: &AccessCode) -> Result<(), StoreError>;

    /// Look up a non-deleted code by its (already upper-cased) token.
    ///
    /// Expired-but-unswept codes are still returned; expiry is the caller's
    /// check, independent of the `deleted` flag.
    fn get_active(&self, code: &str) -> Result<Option<AccessCode>, StoreError>;

    /// Increment the usage counter and stamp `last_used`, returning the
    /// updated record. Last-write-wins under concurrent validation.
    fn record_usage(&self, code: &str, now: Timestamp) -> Result<AccessCode, StoreError>;

    /// Soft-delete a code. Returns `false` when no non-deleted code matched.
    fn mark_deleted(&self, code: &str) -> Result<bool, StoreError>;

    /// Soft-delete every non-deleted code with `expires_at < now`; returns
    /// the number affected. Idempotent.
    fn sweep_expired(&self, now: Timestamp) -> Result<u64, StoreError>;

    /// All non-deleted codes, newest first.
    fn list_active(&self) -> Result<Vec<AccessCode>, StoreError>;
}
