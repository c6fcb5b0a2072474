//! Serialized append over a [`LedgerStore`].

use crate::error::LedgerError;
use crate::record_hash::record_hash;
use crate::validate::validate_chain;
use patina_store::LedgerStore;
use patina_types::{Identifier, LedgerRecord, Timestamp};
use std::sync::{Arc, Mutex};
use tracing::info;

/// The append-only ledger.
///
/// `append` holds an in-process mutex across the whole read-tail-then-insert
/// unit, so in-flight appends are strictly serialized and sequence indices
/// are gap-free. The store's unique `record_hash` constraint remains the
/// backstop against anything that slips past the lock (e.g. a second
/// process). Reads take no lock.
pub struct Ledger {
    store: Arc<dyn LedgerStore>,
    append_lock: Mutex<()>,
}

impl Ledger {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self {
            store,
            append_lock: Mutex::new(()),
        }
    }

    /// Append a registration event for `subject`, chained to the current tail.
    ///
    /// The subject's antique record must already exist; the store rejects the
    /// insert otherwise and the failure surfaces as
    /// [`LedgerError::AppendFailed`].
    pub fn append(
        &self,
        subject: &Identifier,
        owner: &str,
        now: Timestamp,
    ) -> Result<LedgerRecord, LedgerError> {
        let _guard = self
            .append_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let tail = self.store.load_tail()?;
        let sequence_index = tail.as_ref().map_or(0, |t| t.sequence_index + 1);
        let previous_hash = tail.map(|t| t.record_hash);
        let previous_hex = previous_hash.as_ref().map_or("", |h| h.as_str());

        let record = LedgerRecord {
            sequence_index,
            timestamp: now,
            subject: subject.clone(),
            owner: owner.to_string(),
            record_hash: record_hash(sequence_index, now, subject, owner, previous_hex),
            previous_hash,
        };

        self.store
            .insert(&record)
            .map_err(LedgerError::AppendFailed)?;

        info!(
            index = record.sequence_index,
            subject = %record.subject,
            owner = %record.owner,
            "ledger record appended"
        );
        Ok(record)
    }

    /// The record attesting an identifier, if any.
    pub fn find_by_subject(
        &self,
        subject: &Identifier,
    ) -> Result<Option<LedgerRecord>, LedgerError> {
        Ok(self.store.find_by_subject(subject)?)
    }

    /// The current tail record, if the ledger is non-empty.
    pub fn tail(&self) -> Result<Option<LedgerRecord>, LedgerError> {
        Ok(self.store.load_tail()?)
    }

    /// Walk the full chain and verify linkage, indexing, and record hashes.
    pub fn audit(&self) -> Result<(), LedgerError> {
        let records = self.store.load_all()?;
        validate_chain(&records)?;
        Ok(())
    }
}
