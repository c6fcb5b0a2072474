//! Ledger record hashes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A SHA3-512 record hash, stored as a lower-case hex string.
///
/// Record hashes are persisted, compared, and chained as hex strings, so the
/// newtype wraps the rendered form rather than raw bytes.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordHash(String);

impl RecordHash {
    /// Wrap an already-rendered hex digest.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for RecordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordHash({})", &self.0[..self.0.len().min(8)])
    }
}
