//! Multi-modal content fingerprinting.
//!
//! Derives a stable composite identifier for an antique from its four image
//! slots, its name and description, and optional provenance metadata. The
//! computation is a pure function of its inputs: identical content always
//! yields the identical composite.

pub mod engine;
pub mod error;
pub mod signer;
pub mod text;

pub use engine::{Fingerprint, FingerprintEngine, NO_IMAGE_SENTINEL};
pub use error::FingerprintError;
pub use signer::{ImageSigner, PerceptualSigner, SignerError};
pub use text::{text_signature, NO_TEXT_SENTINEL};
