//! # PKCS#1 v1.5 Signing
//!
//! The sign half of the hash-then-sign sequence. The scheme embeds the
//! SHA-256 `DigestInfo` structure into the deterministic PKCS#1 v1.5
//! padding block and applies the RSA private-key operation, so a given
//! key and message always produce the same signature bytes. No source of
//! randomness is involved.

use rsa::Pkcs1v15Sign;
use sha2::Sha256;
use signet_core::{SignError, SignatureBytes};

use crate::digest::sha256_digest;
use crate::keys::RsaKeyMaterial;

/// Sign a message with the given key material.
///
/// Computes `SHA-256(message)` and produces a PKCS#1 v1.5 signature over
/// the digest. The signature length equals
/// [`RsaKeyMaterial::signature_len`]. The empty message is valid input.
///
/// The key is re-validated before the private-key operation; a key object
/// is not trusted on provenance alone. Either a complete signature is
/// returned or an error, never a partial result.
pub fn sign(key: &RsaKeyMaterial, message: &[u8]) -> Result<SignatureBytes, SignError> {
    let digest = sha256_digest(message);

    key.private_key()
        .validate()
        .map_err(|e| SignError::InvalidKey(e.to_string()))?;

    let raw = key
        .private_key()
        .sign(Pkcs1v15Sign::new::<Sha256>(), digest.as_bytes())
        .map_err(|e| SignError::Operation(e.to_string()))?;
    Ok(SignatureBytes::new(raw))
}
