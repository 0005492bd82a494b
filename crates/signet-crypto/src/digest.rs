//! # SHA-256 Digest Computation
//!
//! The hash half of the hash-then-sign sequence. Input length is
//! unbounded; output is always the 32-byte [`MessageDigest`].

use sha2::{Digest, Sha256};
use signet_core::{MessageDigest, DIGEST_LEN};

/// Compute the SHA-256 digest of a message.
pub fn sha256_digest(message: &[u8]) -> MessageDigest {
    let hash = Sha256::digest(message);
    let mut bytes = [0u8; DIGEST_LEN];
    bytes.copy_from_slice(&hash);
    MessageDigest::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_deterministic() {
        assert_eq!(sha256_digest(b"hello"), sha256_digest(b"hello"));
    }

    #[test]
    fn test_known_empty_input_vector() {
        // SHA-256 of the empty input is a fixed, well-known value.
        assert_eq!(
            sha256_digest(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_known_hello_vector() {
        // Verified against `printf hello | sha256sum`.
        assert_eq!(
            sha256_digest(b"hello").to_hex(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_different_inputs_different_digests() {
        assert_ne!(sha256_digest(b"hello"), sha256_digest(b"hellO"));
    }
}
