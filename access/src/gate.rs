//! The access-code gate: issue, validate, revoke, sweep.

use crate::codegen::generate_code;
use crate::error::AccessCodeError;
use patina_store::AccessCodeStore;
use patina_types::{AccessCode, Timestamp};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

const ISSUE_ATTEMPTS: u32 = 8;

/// Allowed expiration range for issued codes, in hours.
#[derive(Clone, Copy, Debug)]
pub struct GateLimits {
    pub min_hours: u64,
    pub max_hours: u64,
}

impl Default for GateLimits {
    fn default() -> Self {
        Self {
            min_hours: 1,
            max_hours: 168,
        }
    }
}

/// Why a code failed validation.
///
/// A revoked code reports the same reason as an unknown one on purpose:
/// the response must not reveal whether a code ever existed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidReason {
    NotFound,
    Expired,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::NotFound => f.write_str("code not found"),
            InvalidReason::Expired => f.write_str("code expired"),
        }
    }
}

/// Outcome of validating a code. Expected invalids are data, not errors.
#[derive(Clone, Debug)]
pub enum Validation {
    /// The code is live; counters reflect this validation.
    Valid(AccessCode),
    Invalid(InvalidReason),
}

/// Issues and validates the expiring bearer codes gating verification.
pub struct AccessCodeGate {
    store: Arc<dyn AccessCodeStore>,
    limits: GateLimits,
}

impl AccessCodeGate {
    pub fn new(store: Arc<dyn AccessCodeStore>) -> Self {
        Self::with_limits(store, GateLimits::default())
    }

    pub fn with_limits(store: Arc<dyn AccessCodeStore>, limits: GateLimits) -> Self {
        Self { store, limits }
    }

    /// Issue a fresh code valid for `expiration_hours` from `now`.
    ///
    /// Hours outside the configured range are rejected. Key collisions are
    /// retried with a fresh code.
    pub fn issue(
        &self,
        expiration_hours: u64,
        issuer: &str,
        now: Timestamp,
    ) -> Result<AccessCode, AccessCodeError> {
        if expiration_hours < self.limits.min_hours || expiration_hours > self.limits.max_hours {
            return Err(AccessCodeError::InvalidExpiration {
                hours: expiration_hours,
                min: self.limits.min_hours,
                max: self.limits.max_hours,
            });
        }

        let mut rng = rand::thread_rng();
        for _ in 0..ISSUE_ATTEMPTS {
            let code = AccessCode {
                code: generate_code(&mut rng),
                created_at: now,
                expires_at: now.plus_hours(expiration_hours),
                created_by: issuer.to_string(),
                usage_count: 0,
                last_used: None,
                deleted: false,
            };
            match self.store.insert(&code) {
                Ok(()) => {
                    info!(
                        issuer = %code.created_by,
                        expires_at = %code.expires_at,
                        "access code issued"
                    );
                    return Ok(code);
                }
                Err(patina_store::StoreError::Duplicate(_)) => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Err(AccessCodeError::CodeSpaceExhausted {
            attempts: ISSUE_ATTEMPTS,
        })
    }

    /// Validate a code at `now`, incrementing its usage counter on success.
    ///
    /// Expiry is checked here, independent of the soft-delete flag: a code
    /// past `expires_at` is invalid even before a sweep marks it. The
    /// counter increment is last-write-wins under concurrent validation —
    /// coarse usage telemetry, not a security counter.
    pub fn validate(&self, raw: &str, now: Timestamp) -> Result<Validation, AccessCodeError> {
        let normalized = raw.trim().to_uppercase();
        let Some(code) = self.store.get_active(&normalized)? else {
            debug!(code = %normalized, "validation failed: code not found");
            return Ok(Validation::Invalid(InvalidReason::NotFound));
        };
        if code.is_expired(now) {
            debug!(code = %normalized, "validation failed: code expired");
            return Ok(Validation::Invalid(InvalidReason::Expired));
        }
        let updated = self.store.record_usage(&normalized, now)?;
        Ok(Validation::Valid(updated))
    }

    /// Soft-delete a code immediately, independent of expiry.
    /// Returns whether a live code was actually revoked.
    pub fn revoke(&self, raw: &str) -> Result<bool, AccessCodeError> {
        let revoked = self.store.mark_deleted(&raw.trim().to_uppercase())?;
        if revoked {
            info!(code = %raw.trim().to_uppercase(), "access code revoked");
        }
        Ok(revoked)
    }

    /// Soft-delete every expired, not-yet-deleted code. Idempotent.
    pub fn sweep_expired(&self, now: Timestamp) -> Result<u64, AccessCodeError> {
        let removed = self.store.sweep_expired(now)?;
        if removed > 0 {
            info!(removed, "expired access codes swept");
        }
        Ok(removed)
    }

    /// All non-deleted codes, newest first.
    pub fn list(&self) -> Result<Vec<AccessCode>, AccessCodeError> {
        Ok(self.store.list_active()?)
    }
}
