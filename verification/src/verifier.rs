//! The verifier — read-only, idempotent, safe under arbitrary concurrency.

use patina_store::{AntiqueStore, LedgerStore, StoreError};
use patina_types::{AntiqueRecord, Identifier, LedgerRecord};
use std::sync::Arc;
use tracing::warn;

/// Result of verifying a claimed identifier.
#[derive(Clone, Debug)]
pub enum VerifyOutcome {
    /// A ledger record attests the identifier. `antique` is `None` when the
    /// antique store is inconsistent with the ledger — a data-integrity
    /// warning for the caller, not a hard error.
    Found {
        record: LedgerRecord,
        antique: Option<AntiqueRecord>,
    },
    /// No ledger record references the identifier.
    NotFound,
}

/// Looks up claimed identifiers against the ledger and the antique store.
pub struct Verifier {
    ledger: Arc<dyn LedgerStore>,
    antiques: Arc<dyn AntiqueStore>,
}

impl Verifier {
    pub fn new(ledger: Arc<dyn LedgerStore>, antiques: Arc<dyn AntiqueStore>) -> Self {
        Self { ledger, antiques }
    }

    /// Verify a claimed identifier. Normalization makes the lookup case- and
    /// whitespace-insensitive; no mutation anywhere.
    pub fn verify(&self, claimed: &str) -> Result<VerifyOutcome, StoreError> {
        let identifier = Identifier::new(claimed);
        let Some(record) = self.ledger.find_by_subject(&identifier)? else {
            return Ok(VerifyOutcome::NotFound);
        };

        let antique = self.antiques.get(&identifier)?;
        if antique.is_none() {
            warn!(
                subject = %identifier,
                index = record.sequence_index,
                "ledger record has no backing antique record"
            );
        }
        Ok(VerifyOutcome::Found { record, antique })
    }
}
