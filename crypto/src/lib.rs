//! Digest primitives for the Patina provenance registry.

pub mod hash;

pub use hash::{sha3_256_hex, sha3_256_hex_multi, sha3_512_hex, sha3_512_hex_multi};
