//! SHA3 hashing for fingerprints and ledger records.
//!
//! Every digest in the registry is persisted and compared as a lower-case
//! hex string: SHA3-256 (64 chars) for fingerprint components, SHA3-512
//! (128 chars) for composite identifiers and record hashes.

use sha3::{Digest, Sha3_256, Sha3_512};

/// Compute a SHA3-256 hex digest of arbitrary data.
pub fn sha3_256_hex(data: &[u8]) -> String {
    hex::encode(Sha3_256::digest(data))
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha3_256_hex_multi(parts: &[&[u8]]) -> String {
    let mut hasher = Sha3_256::new();
    for part in parts {
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}

/// Compute a SHA3-512 hex digest of arbitrary data.
pub fn sha3_512_hex(data: &[u8]) -> String {
    hex::encode(Sha3_512::digest(data))
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha3_512_hex_multi(parts: &[&[u8]]) -> String {
    let mut hasher = Sha3_512::new();
    for part in parts {
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha3_256_deterministic() {
        let h1 = sha3_256_hex(b"ming vase");
        let h2 = sha3_256_hex(b"ming vase");
        assert_eq!(h1, h2);
    }

    #[test]
    fn sha3_256_is_64_hex_chars() {
        let h = sha3_256_hex(b"");
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn sha3_512_is_128_hex_chars() {
        let h = sha3_512_hex(b"porcelain");
        assert_eq!(h.len(), 128);
    }

    #[test]
    fn different_inputs_differ() {
        assert_ne!(sha3_512_hex(b"front"), sha3_512_hex(b"back"));
    }

    #[test]
    fn multi_equivalent_to_concatenation() {
        assert_eq!(
            sha3_256_hex(b"helloworld"),
            sha3_256_hex_multi(&[b"hello", b"world"])
        );
        assert_eq!(
            sha3_512_hex(b"helloworld"),
            sha3_512_hex_multi(&[b"hello", b"world"])
        );
    }

    #[test]
    fn known_empty_input_vector() {
        // SHA3-256("") — fixed by the standard.
        assert_eq!(
            sha3_256_hex(b""),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }
}
