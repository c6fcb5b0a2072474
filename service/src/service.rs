//! The registry service — registration, verification, access-code gating.

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::request::RegisterRequest;
use patina_access::{AccessCodeGate, Validation};
use patina_fingerprint::FingerprintEngine;
use patina_ledger::Ledger;
use patina_store::{AccessCodeStore, AntiqueStore, LedgerStore};
use patina_types::{AccessCode, AntiqueRecord, Identifier, LedgerRecord, Timestamp};
use patina_verification::{Verifier, VerifyOutcome};
use std::sync::Arc;
use tracing::{info, warn};

/// A successful registration: the derived identifier and its chain entry.
#[derive(Clone, Debug)]
pub struct Registration {
    pub identifier: Identifier,
    pub record: LedgerRecord,
}

/// Coordinates the fingerprint engine, stores, ledger, verifier, and gate.
///
/// Every operation is a synchronous request/response call; no state is held
/// across calls beyond the external store, so abandoning a call mid-flight
/// leaves nothing dangling in this process.
pub struct RegistryService {
    engine: FingerprintEngine,
    antiques: Arc<dyn AntiqueStore>,
    ledger: Ledger,
    verifier: Verifier,
    gate: AccessCodeGate,
    config: ServiceConfig,
}

impl RegistryService {
    pub fn new(
        engine: FingerprintEngine,
        antiques: Arc<dyn AntiqueStore>,
        chain: Arc<dyn LedgerStore>,
        codes: Arc<dyn AccessCodeStore>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            engine,
            ledger: Ledger::new(Arc::clone(&chain)),
            verifier: Verifier::new(chain, Arc::clone(&antiques)),
            gate: AccessCodeGate::with_limits(codes, config.gate_limits()),
            antiques,
            config,
        }
    }

    /// Register an antique: validate, fingerprint, persist, chain.
    ///
    /// The antique record is saved before the ledger append because the
    /// chain references it. If the append then fails, the antique stays
    /// durably saved but unchained — surfaced as
    /// [`ServiceError::PartialRegistration`] so callers can run
    /// [`RegistryService::repair_unchained`] later rather than re-upload.
    pub fn register(&self, request: RegisterRequest) -> Result<Registration, ServiceError> {
        request.validate()?;

        let fingerprint = self.engine.compute(
            &request.name,
            &request.description,
            &request.images,
            request.provenance.as_ref(),
        )?;
        let identifier = fingerprint.composite.clone();

        if let Some(existing) = self.ledger.find_by_subject(&identifier)? {
            warn!(
                identifier = %identifier,
                index = existing.sequence_index,
                "registration matched an already chained identifier"
            );
            return Err(ServiceError::AlreadyRegistered {
                identifier,
                index: existing.sequence_index,
            });
        }

        let now = Timestamp::now();
        let antique = AntiqueRecord {
            identifier: identifier.clone(),
            name: request.name.clone(),
            description: request.description.clone(),
            images: request.images.clone(),
            created_at: now,
            components: fingerprint.components,
            provenance: request.provenance.clone(),
        };
        self.antiques.upsert(&antique)?;

        let record = self
            .ledger
            .append(&identifier, request.owner_label(), now)
            .map_err(|source| ServiceError::PartialRegistration {
                identifier: identifier.clone(),
                source,
            })?;

        info!(
            identifier = %identifier,
            index = record.sequence_index,
            "antique registered"
        );
        Ok(Registration { identifier, record })
    }

    /// Verify a claimed identifier against the ledger.
    pub fn verify(&self, claimed: &str) -> Result<VerifyOutcome, ServiceError> {
        Ok(self.verifier.verify(claimed)?)
    }

    /// Fetch an antique record by claimed identifier.
    pub fn get_antique(&self, claimed: &str) -> Result<Option<AntiqueRecord>, ServiceError> {
        Ok(self.antiques.get(&Identifier::new(claimed))?)
    }

    /// Append a ledger record for every stored antique that lacks one.
    ///
    /// The repair half of a partial registration: the owner label falls back
    /// to the antique's name, exactly as an owner-less registration would
    /// have recorded it.
    pub fn repair_unchained(&self) -> Result<Vec<Identifier>, ServiceError> {
        let mut repaired = Vec::new();
        for identifier in self.antiques.identifiers()? {
            if self.ledger.find_by_subject(&identifier)?.is_some() {
                continue;
            }
            let Some(antique) = self.antiques.get(&identifier)? else {
                continue;
            };
            self.ledger.append(&identifier, &antique.name, Timestamp::now())?;
            info!(identifier = %identifier, "unchained antique repaired");
            repaired.push(identifier);
        }
        Ok(repaired)
    }

    /// Walk the full chain and verify its invariants.
    pub fn audit_chain(&self) -> Result<(), ServiceError> {
        Ok(self.ledger.audit()?)
    }

    // ── Access-code operations ─────────────────────────────────────────

    pub fn issue_access_code(
        &self,
        expiration_hours: u64,
        issuer: Option<&str>,
    ) -> Result<AccessCode, ServiceError> {
        let issuer = issuer.unwrap_or(&self.config.default_issuer);
        Ok(self.gate.issue(expiration_hours, issuer, Timestamp::now())?)
    }

    pub fn validate_access_code(&self, code: &str) -> Result<Validation, ServiceError> {
        Ok(self.gate.validate(code, Timestamp::now())?)
    }

    pub fn revoke_access_code(&self, code: &str) -> Result<bool, ServiceError> {
        Ok(self.gate.revoke(code)?)
    }

    pub fn sweep_expired_access_codes(&self) -> Result<u64, ServiceError> {
        Ok(self.gate.sweep_expired(Timestamp::now())?)
    }

    pub fn list_access_codes(&self) -> Result<Vec<AccessCode>, ServiceError> {
        Ok(self.gate.list()?)
    }
}
