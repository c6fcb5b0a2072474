//! The append-only hash-chain ledger.
//!
//! One record per registration event, each cryptographically bound to its
//! predecessor. A linear, single-writer, unreplicated chain: tamper-evident
//! linkage, not a consensus system.

pub mod error;
pub mod ledger;
pub mod record_hash;
pub mod validate;

pub use error::LedgerError;
pub use ledger::Ledger;
pub use record_hash::record_hash;
pub use validate::{validate_chain, ChainFault, ChainFaultKind};
