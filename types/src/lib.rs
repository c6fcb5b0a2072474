//! Fundamental types for the Patina provenance registry.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: identifiers, record hashes, timestamps, image slots, and the
//! three persisted entities (antique records, ledger records, access codes).

pub mod antique;
pub mod code;
pub mod hash;
pub mod identifier;
pub mod image;
pub mod record;
pub mod time;

pub use antique::{AntiqueRecord, FingerprintComponents};
pub use code::AccessCode;
pub use hash::RecordHash;
pub use identifier::Identifier;
pub use image::{ImageData, ImageSet, ImageSlot};
pub use record::LedgerRecord;
pub use time::Timestamp;
