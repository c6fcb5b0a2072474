//! Deterministic record hashing.

use patina_crypto::sha3_512_hex;
use patina_types::{Identifier, RecordHash, Timestamp};

/// Compute the hash binding a record to its position and predecessor.
///
/// SHA3-512 over the five-tuple joined with `|`; the genesis back-link is
/// the empty string. The preimage layout is part of the persisted format —
/// changing it invalidates every existing chain.
pub fn record_hash(
    sequence_index: u64,
    timestamp: Timestamp,
    subject: &Identifier,
    owner: &str,
    previous_hex: &str,
) -> RecordHash {
    let preimage = format!(
        "{}|{}|{}|{}|{}",
        sequence_index,
        timestamp.as_millis(),
        subject,
        owner,
        previous_hex
    );
    RecordHash::from_hex(sha3_512_hex(preimage.as_bytes()))
}
