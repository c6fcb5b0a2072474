use patina_types::ImageSlot;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FingerprintError {
    /// An image payload could not be decoded. This aborts the whole
    /// computation: substituting a sentinel for corrupt bytes would make the
    /// identifier depend on which corrupt upload happened to arrive.
    #[error("image in slot {slot} could not be decoded: {detail}")]
    UndecodableImage { slot: ImageSlot, detail: String },

    #[error("provenance metadata could not be serialized: {0}")]
    Provenance(String),
}
