//! Antique record storage trait.

use crate::StoreError;
use patina_types::{AntiqueRecord, Identifier};

/// Trait for storing antique records, keyed by composite identifier.
pub trait AntiqueStore: Send + Sync {
    /// Insert or replace the record for its identifier.
    ///
    /// Registration never intentionally re-registers an identifier, but the
    /// operation is an idempotent upsert so a retry cannot fail on the key.
    fn upsert(&self, record: &AntiqueRecord) -> Result<(), StoreError>;

    /// Fetch a record by (already normalized) identifier.
    fn get(&self, identifier: &Identifier) -> Result<Option<AntiqueRecord>, StoreError>;

    /// Whether a record exists for the identifier.
    fn exists(&self, identifier: &Identifier) -> Result<bool, StoreError> {
        Ok(self.get(identifier)?.is_some())
    }

    /// All stored identifiers. Used by the orphan-repair sweep.
    fn identifiers(&self) -> Result<Vec<Identifier>, StoreError>;
}
