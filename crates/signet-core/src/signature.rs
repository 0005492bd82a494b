//! # Signature Bytes
//!
//! The output artifact of the signing operation. An RSA PKCS#1 v1.5
//! signature is a byte sequence whose length equals the byte length of
//! the signing key's modulus (256 bytes for a 2048-bit key).
//!
//! Signatures leave the system as standard base64 text, so the newtype
//! owns that encoding: serde serializes to and from a base64 string, and
//! `Display` renders the same form. `Debug` prints only a prefix.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RSA PKCS#1 v1.5 signature.
///
/// PKCS#1 v1.5 signing is deterministic: the same key and message always
/// produce the same `SignatureBytes`.
#[derive(Clone, PartialEq, Eq)]
pub struct SignatureBytes(Vec<u8>);

impl SignatureBytes {
    /// Wrap raw signature bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Return the raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the signature in bytes. Equals the modulus byte length
    /// of the key that produced it.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the signature holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the signature as standard base64 with padding.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// Parse a signature from standard base64 text.
    pub fn from_base64(text: &str) -> Result<Self, base64::DecodeError> {
        STANDARD.decode(text.trim()).map(Self)
    }
}

impl Serialize for SignatureBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for SignatureBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_base64(&text).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for SignatureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SignatureBytes({}..., {} bytes)",
            b64_prefix(&self.0),
            self.0.len()
        )
    }
}

impl std::fmt::Display for SignatureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base64())
    }
}

fn b64_prefix(bytes: &[u8]) -> String {
    let take = bytes.len().min(6);
    STANDARD.encode(&bytes[..take])
}
