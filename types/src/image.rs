//! Image slots and payloads for antique registration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fixed photographic views required for registration.
///
/// The order of [`ImageSlot::ALL`] is the canonical order used when deriving
/// the image signature; changing it would change every fingerprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSlot {
    Front,
    Back,
    Left,
    Right,
}

impl ImageSlot {
    /// All slots, in canonical fingerprint order.
    pub const ALL: [ImageSlot; 4] = [
        ImageSlot::Front,
        ImageSlot::Back,
        ImageSlot::Left,
        ImageSlot::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSlot::Front => "front",
            ImageSlot::Back => "back",
            ImageSlot::Left => "left",
            ImageSlot::Right => "right",
        }
    }
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single uploaded image: raw payload plus the declared media type.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub media_type: String,
}

impl ImageData {
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
        }
    }
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Payloads can be megabytes; never dump them into logs.
        write!(f, "ImageData({} bytes, {})", self.bytes.len(), self.media_type)
    }
}

/// The four named image slots of an antique.
///
/// Slots are optional at the type level; registration enforces that all four
/// are present, while the fingerprint engine substitutes a sentinel for any
/// absent slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSet {
    pub front: Option<ImageData>,
    pub back: Option<ImageData>,
    pub left: Option<ImageData>,
    pub right: Option<ImageData>,
}

impl ImageSet {
    pub fn get(&self, slot: ImageSlot) -> Option<&ImageData> {
        match slot {
            ImageSlot::Front => self.front.as_ref(),
            ImageSlot::Back => self.back.as_ref(),
            ImageSlot::Left => self.left.as_ref(),
            ImageSlot::Right => self.right.as_ref(),
        }
    }

    pub fn set(&mut self, slot: ImageSlot, data: ImageData) {
        match slot {
            ImageSlot::Front => self.front = Some(data),
            ImageSlot::Back => self.back = Some(data),
            ImageSlot::Left => self.left = Some(data),
            ImageSlot::Right => self.right = Some(data),
        }
    }

    /// Slots with no payload, in canonical order.
    pub fn missing_slots(&self) -> Vec<ImageSlot> {
        ImageSlot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_slots().is_empty()
    }
}
