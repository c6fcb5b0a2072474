//! Service configuration with TOML file support.

use crate::error::ServiceError;
use patina_access::GateLimits;
use serde::{Deserialize, Serialize};

/// Configuration for the registry service.
///
/// Can be loaded from a TOML file via [`ServiceConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Shortest expiration an access code may be issued with, in hours.
    #[serde(default = "default_min_expiration_hours")]
    pub min_expiration_hours: u64,

    /// Longest expiration an access code may be issued with, in hours.
    #[serde(default = "default_max_expiration_hours")]
    pub max_expiration_hours: u64,

    /// Issuer label stamped on codes when the caller supplies none.
    #[serde(default = "default_issuer")]
    pub default_issuer: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_min_expiration_hours() -> u64 {
    1
}

fn default_max_expiration_hours() -> u64 {
    168
}

fn default_issuer() -> String {
    "staff".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ServiceError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ServiceError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ServiceError> {
        toml::from_str(s).map_err(|e| ServiceError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("ServiceConfig is always serializable to TOML")
    }

    /// The expiration bounds as gate limits.
    pub fn gate_limits(&self) -> GateLimits {
        GateLimits {
            min_hours: self.min_expiration_hours,
            max_hours: self.max_expiration_hours,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            min_expiration_hours: default_min_expiration_hours(),
            max_expiration_hours: default_max_expiration_hours(),
            default_issuer: default_issuer(),
        }
    }
}
