use crate::validate::ChainFault;
use patina_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// The insert step of an append was rejected (duplicate hash, broken
    /// foreign key, backend failure). Callers must treat this as a failed
    /// registration; the antique record may already be durably saved.
    #[error("ledger append failed: {0}")]
    AppendFailed(StoreError),

    #[error(transparent)]
    Chain(#[from] ChainFault),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
