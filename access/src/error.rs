use patina_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessCodeError {
    #[error("expiration of {hours}h outside allowed range {min}..={max}h")]
    InvalidExpiration { hours: u64, min: u64, max: u64 },

    /// Generated codes kept colliding with stored ones. With a 32^8 code
    /// space this means the store is effectively full or the RNG is broken.
    #[error("could not generate an unused code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
