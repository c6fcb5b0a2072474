//! The service-level error taxonomy.
//!
//! Expected conditions (missing record, expired code) are modeled as data in
//! the operation results; everything here is an actual failure.

use patina_access::AccessCodeError;
use patina_fingerprint::FingerprintError;
use patina_ledger::LedgerError;
use patina_store::StoreError;
use patina_types::Identifier;
use thiserror::Error;

/// A request was rejected before touching the store.
#[derive(Debug, Error)]
#[error("missing required field(s): {}", missing.join(", "))]
pub struct ValidationError {
    /// The specific missing fields, e.g. `name`, `images.front`.
    pub missing: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Bad input (an undecodable image), distinct from infrastructure
    /// failure.
    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// The antique record was durably saved but the ledger append failed,
    /// leaving a registered-but-unchained antique. `repair_unchained`
    /// re-attempts only the append step.
    #[error("antique {identifier} saved but not chained: {source}")]
    PartialRegistration {
        identifier: Identifier,
        source: LedgerError,
    },

    /// A ledger record already attests this identifier; registering the
    /// same content twice is reported, not silently double-chained.
    #[error("antique {identifier} already registered at ledger index {index}")]
    AlreadyRegistered { identifier: Identifier, index: u64 },

    #[error(transparent)]
    AccessCode(#[from] AccessCodeError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("configuration error: {0}")]
    Config(String),
}
