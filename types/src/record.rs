//! Ledger records — the links of the hash chain.

use crate::{Identifier, RecordHash, Timestamp};
use serde::{Deserialize, Serialize};

/// One registration event in the append-only ledger.
///
/// Chain invariants, for all `i > 0`:
/// `ledger[i].previous_hash == ledger[i-1].record_hash` and
/// `ledger[i].sequence_index == ledger[i-1].sequence_index + 1`.
/// A violation of either signals tampering or corruption.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Monotonically increasing, starts at 0.
    pub sequence_index: u64,
    /// Append time, epoch millis.
    pub timestamp: Timestamp,
    /// The antique identifier this record attests.
    pub subject: Identifier,
    /// Free-text owner/registrant label at time of append.
    pub owner: String,
    /// Back-link to the predecessor; `None` for the genesis record.
    pub previous_hash: Option<RecordHash>,
    /// SHA3-512 over (index, timestamp, subject, owner, previous).
    pub record_hash: RecordHash,
}

impl LedgerRecord {
    /// The back-link as it appears in the hash preimage: the predecessor's
    /// hex digest, or the empty string at genesis.
    pub fn previous_hex(&self) -> &str {
        self.previous_hash.as_ref().map(RecordHash::as_str).unwrap_or("")
    }

    pub fn is_genesis(&self) -> bool {
        self.previous_hash.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_back_link_renders_empty() {
        let record = LedgerRecord {
            sequence_index: 0,
            timestamp: Timestamp::new(1),
            subject: Identifier::new("abc"),
            owner: "estate".into(),
            previous_hash: None,
            record_hash: RecordHash::from_hex("ff"),
        };
        assert_eq!(record.previous_hex(), "");
        assert!(record.is_genesis());
    }
}
