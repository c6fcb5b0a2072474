//! Verification — pair a claimed identifier with its ledger record.

pub mod verifier;

pub use verifier::{Verifier, VerifyOutcome};
