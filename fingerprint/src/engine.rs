//! The fingerprint engine — components and composite.

use crate::error::FingerprintError;
use crate::signer::{ImageSigner, PerceptualSigner};
use crate::text::text_signature;
use patina_crypto::{sha3_256_hex, sha3_512_hex_multi};
use patina_types::{FingerprintComponents, Identifier, ImageSet, ImageSlot};
use serde_json::Value;

/// Token substituted for an absent image slot.
pub const NO_IMAGE_SENTINEL: &str = "noimg";

/// Separator joining per-slot signatures and the three components.
const SEP: &str = "|";

/// The full output of a fingerprint computation.
///
/// Components are returned alongside the composite so callers can persist
/// them for audit without recomputing.
#[derive(Clone, Debug)]
pub struct Fingerprint {
    pub components: FingerprintComponents,
    pub composite: Identifier,
}

/// Derives composite identifiers from multi-modal antique content.
pub struct FingerprintEngine {
    signer: Box<dyn ImageSigner>,
}

impl FingerprintEngine {
    pub fn new(signer: Box<dyn ImageSigner>) -> Self {
        Self { signer }
    }

    /// Engine with the default perceptual signer.
    pub fn perceptual() -> Self {
        Self::new(Box::new(PerceptualSigner::new()))
    }

    /// Compute all three component signatures and the composite identifier.
    ///
    /// Pure function of its inputs, no side effects. Fails only when an image
    /// payload cannot be decoded or provenance cannot be serialized.
    pub fn compute(
        &self,
        name: &str,
        description: &str,
        images: &ImageSet,
        provenance: Option<&Value>,
    ) -> Result<Fingerprint, FingerprintError> {
        let image_signature = self.image_signature(images)?;
        let text_sig = text_signature(name, description);
        let provenance_digest = provenance_digest(provenance)?;

        let composite = sha3_512_hex_multi(&[
            image_signature.as_bytes(),
            SEP.as_bytes(),
            text_sig.as_bytes(),
            SEP.as_bytes(),
            provenance_digest.as_bytes(),
        ]);

        Ok(Fingerprint {
            components: FingerprintComponents {
                image_signature,
                text_signature: text_sig,
                provenance_digest,
            },
            composite: Identifier::new(composite),
        })
    }

    /// Per-slot signatures in canonical order, collapsed to one digest.
    fn image_signature(&self, images: &ImageSet) -> Result<String, FingerprintError> {
        let mut slot_signatures = Vec::with_capacity(ImageSlot::ALL.len());
        for slot in ImageSlot::ALL {
            match images.get(slot) {
                None => slot_signatures.push(NO_IMAGE_SENTINEL.to_string()),
                Some(data) => {
                    let sig = self.signer.signature(&data.bytes).map_err(|e| {
                        FingerprintError::UndecodableImage {
                            slot,
                            detail: e.to_string(),
                        }
                    })?;
                    slot_signatures.push(sig);
                }
            }
        }
        Ok(sha3_256_hex(slot_signatures.join(SEP).as_bytes()))
    }
}

/// Digest of the canonical JSON serialization of the provenance metadata.
///
/// `serde_json`'s default map is ordered, so equal content always serializes
/// identically. Absent provenance digests as the empty object.
fn provenance_digest(provenance: Option<&Value>) -> Result<String, FingerprintError> {
    let canonical = match provenance {
        Some(value) => {
            serde_json::to_string(value).map_err(|e| FingerprintError::Provenance(e.to_string()))?
        }
        None => "{}".to_string(),
    };
    Ok(sha3_256_hex(canonical.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::SignerError;
    use image::{ImageFormat, Rgb, RgbImage};
    use patina_types::ImageData;
    use serde_json::json;
    use std::io::Cursor;

    fn png(r: u8, g: u8, b: u8) -> Vec<u8> {
        let img = RgbImage::from_pixel(10, 10, Rgb([r, g, b]));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    fn four_views() -> ImageSet {
        let mut set = ImageSet::default();
        set.set(ImageSlot::Front, ImageData::new(png(200, 30, 30), "image/png"));
        set.set(ImageSlot::Back, ImageData::new(png(30, 200, 30), "image/png"));
        set.set(ImageSlot::Left, ImageData::new(png(30, 30, 200), "image/png"));
        set.set(ImageSlot::Right, ImageData::new(png(200, 200, 30), "image/png"));
        set
    }

    #[test]
    fn ming_vase_scenario() {
        let engine = FingerprintEngine::perceptual();
        let fp = engine
            .compute("Ming Vase", "blue and white porcelain", &four_views(), None)
            .unwrap();

        // 512-bit composite rendered as hex.
        assert_eq!(fp.composite.as_str().len(), 128);
        assert!(fp.composite.as_str().chars().all(|c| c.is_ascii_hexdigit()));

        // Component signatures are shorter than the composite.
        assert_eq!(fp.components.image_signature.len(), 64);
        assert_eq!(fp.components.provenance_digest.len(), 64);
        assert!(fp.components.text_signature.len() < 128);
    }

    #[test]
    fn identical_content_yields_identical_identifier() {
        let engine = FingerprintEngine::perceptual();
        let first = engine
            .compute("Ming Vase", "blue and white porcelain", &four_views(), None)
            .unwrap();
        let second = engine
            .compute("Ming Vase", "blue and white porcelain", &four_views(), None)
            .unwrap();
        assert_eq!(first.composite, second.composite);
        assert_eq!(first.components, second.components);
    }

    #[test]
    fn different_images_change_the_identifier() {
        let engine = FingerprintEngine::perceptual();
        let base = engine.compute("Vase", "", &four_views(), None).unwrap();

        let mut altered = four_views();
        altered.set(ImageSlot::Front, ImageData::new(png(0, 0, 0), "image/png"));
        let other = engine.compute("Vase", "", &altered, None).unwrap();

        assert_ne!(base.composite, other.composite);
        assert_ne!(base.components.image_signature, other.components.image_signature);
    }

    #[test]
    fn absent_slot_uses_sentinel_not_failure() {
        let engine = FingerprintEngine::perceptual();
        let mut set = four_views();
        set.right = None;
        let fp = engine.compute("Vase", "", &set, None).unwrap();
        let complete = engine.compute("Vase", "", &four_views(), None).unwrap();
        assert_ne!(fp.components.image_signature, complete.components.image_signature);
    }

    #[test]
    fn undecodable_payload_aborts_with_slot() {
        let engine = FingerprintEngine::perceptual();
        let mut set = four_views();
        set.set(ImageSlot::Left, ImageData::new(vec![0xde, 0xad], "image/png"));
        let err = engine.compute("Vase", "", &set, None).unwrap_err();
        match err {
            FingerprintError::UndecodableImage { slot, .. } => {
                assert_eq!(slot, ImageSlot::Left)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn absent_provenance_digests_as_empty_object() {
        let engine = FingerprintEngine::perceptual();
        let none = engine.compute("Vase", "", &four_views(), None).unwrap();
        let empty = engine
            .compute("Vase", "", &four_views(), Some(&json!({})))
            .unwrap();
        assert_eq!(
            none.components.provenance_digest,
            empty.components.provenance_digest
        );
        assert_eq!(none.composite, empty.composite);
    }

    #[test]
    fn provenance_key_order_is_canonical() {
        let engine = FingerprintEngine::perceptual();
        let a = json!({"origin": "Jingdezhen", "condition": "good"});
        let b = json!({"condition": "good", "origin": "Jingdezhen"});
        let fa = engine.compute("Vase", "", &four_views(), Some(&a)).unwrap();
        let fb = engine.compute("Vase", "", &four_views(), Some(&b)).unwrap();
        assert_eq!(fa.composite, fb.composite);
    }

    #[test]
    fn provenance_content_changes_the_identifier() {
        let engine = FingerprintEngine::perceptual();
        let base = engine.compute("Vase", "", &four_views(), None).unwrap();
        let with = engine
            .compute("Vase", "", &four_views(), Some(&json!({"origin": "Delft"})))
            .unwrap();
        assert_ne!(base.composite, with.composite);
    }

    /// A signer that fails on a marker byte, for engine-level error mapping.
    struct FussySigner;

    impl ImageSigner for FussySigner {
        fn signature(&self, bytes: &[u8]) -> Result<String, SignerError> {
            if bytes.first() == Some(&0xff) {
                Err(SignerError("marker byte".into()))
            } else {
                Ok(format!("sig{}", bytes.len()))
            }
        }

        fn name(&self) -> &str {
            "fussy"
        }
    }

    #[test]
    fn engine_is_signer_agnostic() {
        let engine = FingerprintEngine::new(Box::new(FussySigner));
        let mut set = ImageSet::default();
        for slot in ImageSlot::ALL {
            set.set(slot, ImageData::new(vec![1, 2, 3], "image/png"));
        }
        let fp = engine.compute("Chair", "oak", &set, None).unwrap();
        assert_eq!(fp.composite.as_str().len(), 128);

        set.set(ImageSlot::Back, ImageData::new(vec![0xff], "image/png"));
        assert!(matches!(
            engine.compute("Chair", "oak", &set, None),
            Err(FingerprintError::UndecodableImage {
                slot: ImageSlot::Back,
                ..
            })
        ));
    }
}
