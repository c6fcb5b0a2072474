//! Pluggable per-image signatures.
//!
//! The contract only requires determinism and fixed-length output; the
//! specific algorithm sits behind [`ImageSigner`] so it can be swapped
//! without touching the engine.

use image_hasher::{HashAlg, Hasher, HasherConfig};
use thiserror::Error;

/// A per-slot signature computation failed.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SignerError(pub String);

/// Computes a deterministic signature for one image payload.
pub trait ImageSigner: Send + Sync {
    /// Signature of the decoded image. Must be deterministic and of fixed
    /// length for a given implementation.
    fn signature(&self, bytes: &[u8]) -> Result<String, SignerError>;

    /// Implementation name, recorded for diagnostics.
    fn name(&self) -> &str;
}

/// Perceptual (content-similarity-tolerant) signer.
///
/// A gradient hash over the decoded image, so near-identical re-encodings of
/// the same photograph still produce the same signature.
pub struct PerceptualSigner {
    hasher: Hasher,
}

impl PerceptualSigner {
    pub fn new() -> Self {
        Self {
            hasher: HasherConfig::new()
                .hash_size(8, 8)
                .hash_alg(HashAlg::Gradient)
                .to_hasher(),
        }
    }
}

impl Default for PerceptualSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSigner for PerceptualSigner {
    fn signature(&self, bytes: &[u8]) -> Result<String, SignerError> {
        let decoded = image::load_from_memory(bytes).map_err(|e| SignerError(e.to_string()))?;
        Ok(self.hasher.hash_image(&decoded).to_base64())
    }

    fn name(&self) -> &str {
        "perceptual-gradient-8x8"
    }
}
