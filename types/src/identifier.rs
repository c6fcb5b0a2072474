//! Antique identifiers — normalized composite fingerprint strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The composite fingerprint identifying a registered antique.
///
/// Identifiers are hex strings produced by the fingerprint engine. All
/// comparisons are case- and whitespace-insensitive, so the raw input is
/// trimmed and lower-cased on construction and never touched again.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Normalize a raw identifier (trim surrounding whitespace, lower-case).
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Full composites are 128 chars; a prefix is enough to identify one.
        write!(f, "Identifier({})", &self.0[..self.0.len().min(12)])
    }
}

impl From<&str> for Identifier {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
