//! Chain validation — walk the ledger and flag the first broken position.

use crate::record_hash::record_hash;
use patina_types::LedgerRecord;
use thiserror::Error;

/// Why a position failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ChainFaultKind {
    #[error("sequence index is not predecessor + 1")]
    IndexGap,

    #[error("back-link does not match predecessor hash")]
    BrokenLink,

    #[error("stored hash does not match recomputed hash")]
    HashMismatch,

    #[error("genesis record must have index 0 and an empty back-link")]
    BadGenesis,
}

/// The first broken position found during validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("chain broken at position {position}: {kind}")]
pub struct ChainFault {
    pub position: u64,
    pub kind: ChainFaultKind,
}

/// Validate an ordered slice of ledger records.
///
/// Checks, per position: index continuity, the back-link against the
/// predecessor's stored hash, and the stored hash against a recomputation.
/// Returns the first fault; an empty ledger is valid.
pub fn validate_chain(records: &[LedgerRecord]) -> Result<(), ChainFault> {
    for (i, record) in records.iter().enumerate() {
        let position = i as u64;
        if i == 0 {
            if record.sequence_index != 0 || record.previous_hash.is_some() {
                return Err(ChainFault {
                    position,
                    kind: ChainFaultKind::BadGenesis,
                });
            }
        } else {
            let prev = &records[i - 1];
            if record.sequence_index != prev.sequence_index + 1 {
                return Err(ChainFault {
                    position,
                    kind: ChainFaultKind::IndexGap,
                });
            }
            if record.previous_hash.as_ref() != Some(&prev.record_hash) {
                return Err(ChainFault {
                    position,
                    kind: ChainFaultKind::BrokenLink,
                });
            }
        }

        let recomputed = record_hash(
            record.sequence_index,
            record.timestamp,
            &record.subject,
            &record.owner,
            record.previous_hex(),
        );
        if recomputed != record.record_hash {
            return Err(ChainFault {
                position,
                kind: ChainFaultKind::HashMismatch,
            });
        }
    }
    Ok(())
}
