//! Access codes — expiring bearer tokens for the public verification page.
//!
//! Codes gate access for outside parties; they are not cryptographically
//! tied to the ledger.

pub mod codegen;
pub mod error;
pub mod gate;

pub use codegen::{generate_code, CODE_ALPHABET};
pub use error::AccessCodeError;
pub use gate::{AccessCodeGate, GateLimits, InvalidReason, Validation};
