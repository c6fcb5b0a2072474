//! Explicit request schemas, validated at the boundary.

use crate::error::ValidationError;
use patina_types::ImageSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A registration request: name, description, the four image slots, an
/// optional owner label, and optional provenance metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub images: ImageSet,
    /// Owner label for the ledger record; falls back to `name`.
    #[serde(default)]
    pub owner: Option<String>,
    /// Free-form provenance metadata, fingerprinted as canonical JSON.
    #[serde(default)]
    pub provenance: Option<Value>,
}

impl RegisterRequest {
    /// Reject the request before any store access, enumerating every
    /// missing field rather than stopping at the first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name".to_string());
        }
        for slot in self.images.missing_slots() {
            missing.push(format!("images.{slot}"));
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// The owner label recorded in the ledger.
    pub fn owner_label(&self) -> &str {
        match &self.owner {
            Some(owner) if !owner.trim().is_empty() => owner,
            _ => &self.name,
        }
    }
}
