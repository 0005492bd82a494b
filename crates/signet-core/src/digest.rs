//! # Message Digest
//!
//! The fixed-width SHA-256 digest that sits between the signing input and
//! the RSA operation. A digest is derived data: computed from the message,
//! consumed by the signer, never stored.

/// Byte length of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// A SHA-256 digest of a signing input.
///
/// Always exactly 32 bytes regardless of input length, including the
/// empty input, whose digest is well-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageDigest([u8; DIGEST_LEN]);

impl MessageDigest {
    /// Wrap raw digest bytes.
    ///
    /// Prefer `signet_crypto::sha256_digest` for computing digests from
    /// message bytes.
    pub fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Return the raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for MessageDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_rendering() {
        let digest = MessageDigest::new([0xab; DIGEST_LEN]);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c == 'a' || c == 'b'));
        assert_eq!(format!("{digest}"), hex);
    }

    #[test]
    fn test_round_trip_bytes() {
        let bytes = [7u8; DIGEST_LEN];
        let digest = MessageDigest::new(bytes);
        assert_eq!(digest.as_bytes(), &bytes);
    }
}
