//! The stored antique record.

use crate::{Identifier, ImageSet, Timestamp};
use serde::{Deserialize, Serialize};

/// The three sub-signatures that produced a composite identifier.
///
/// Retained on the record for audit and debugging; verification never needs
/// to recompute them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintComponents {
    /// SHA3-256 over the four per-slot perceptual signatures.
    pub image_signature: String,
    /// Top-10 bag-of-words token string (not a digest).
    pub text_signature: String,
    /// SHA3-256 over the canonical provenance JSON.
    pub provenance_digest: String,
}

/// A registered antique, keyed by its composite fingerprint.
///
/// Created exactly once at registration and immutable thereafter; persistence
/// is an idempotent upsert keyed by `identifier`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AntiqueRecord {
    pub identifier: Identifier,
    pub name: String,
    pub description: String,
    pub images: ImageSet,
    pub created_at: Timestamp,
    pub components: FingerprintComponents,
    /// Free-form provenance metadata (origin, prior owners, condition, ...).
    pub provenance: Option<serde_json::Value>,
}
