//! Ledger record storage trait.

use crate::StoreError;
use patina_types::{Identifier, LedgerRecord};

/// Trait for the append-only ledger's backing store.
///
/// Implementations must declare `record_hash` unique and enforce referential
/// integrity from `subject` to a stored antique record, so a racing or
/// mis-ordered insert fails instead of corrupting the chain.
pub trait LedgerStore: Send + Sync {
    /// The highest-sequence record, or `None` if the ledger is empty.
    fn load_tail(&self) -> Result<Option<LedgerRecord>, StoreError>;

    /// Durably persist a new record.
    ///
    /// Fails with [`StoreError::Duplicate`] on a `record_hash` collision and
    /// [`StoreError::ForeignKey`] when `subject` has no antique record.
    fn insert(&self, record: &LedgerRecord) -> Result<(), StoreError>;

    /// The record attesting an identifier, if any.
    fn find_by_subject(&self, identifier: &Identifier)
        -> Result<Option<LedgerRecord>, StoreError>;

    /// Every record, ordered by `sequence_index`. Used for chain audits.
    fn load_all(&self) -> Result<Vec<LedgerRecord>, StoreError>;
}
