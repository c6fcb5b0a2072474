//! Access codes — expiring bearer tokens for the verification surface.

use crate::Timestamp;
use serde::{Deserialize, Serialize};

/// A short-lived access code gating public verification.
///
/// Codes are not tied to the ledger cryptographically; they are plain
/// expiring bearer tokens issued by staff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessCode {
    /// Human-typable token, e.g. `K3QX-7NMP`.
    pub code: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    /// Issuing identity label.
    pub created_by: String,
    pub usage_count: u64,
    pub last_used: Option<Timestamp>,
    /// Soft-delete flag: explicit revocation or expiry sweep.
    pub deleted: bool,
}

impl AccessCode {
    /// Whether the validity window has closed.
    ///
    /// Checked independently of `deleted`: a code past `expires_at` is
    /// invalid even before a cleanup sweep marks it.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }
}
