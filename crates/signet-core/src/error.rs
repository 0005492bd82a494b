//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Key errors are non-retryable. A blob that fails to decode today will
//!   fail tomorrow; the caller is misconfigured.
//! - I/O errors from reading a key source are surfaced unchanged, never
//!   rewrapped into a format error.
//! - Signing errors distinguish "this is not an RSA private key" from
//!   "the RSA operation itself failed", because the first points at the
//!   provisioned key and the second at corrupted key material.

use thiserror::Error;

/// Failure to produce usable RSA key material from a key source.
#[derive(Error, Debug)]
pub enum KeyError {
    /// The blob is not valid PEM armor, the DER payload is not a PKCS#8
    /// `PrivateKeyInfo`, or the RSA components inside it failed the
    /// format's consistency checks.
    #[error("invalid key encoding: {0}")]
    Format(String),

    /// The PKCS#8 container decoded cleanly but wraps a key of a
    /// different algorithm (EC, Ed25519, ...).
    #[error("unsupported key algorithm {oid}, expected rsaEncryption")]
    Algorithm {
        /// Object identifier found in the container's algorithm field.
        oid: String,
    },

    /// Reading the key source failed.
    #[error("key source io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of the signing operation itself.
#[derive(Error, Debug)]
pub enum SignError {
    /// The supplied key did not re-validate as an RSA private key.
    ///
    /// The loader should have excluded this already; the signer checks
    /// again rather than trusting the key object's provenance.
    #[error("invalid signing key: {0}")]
    InvalidKey(String),

    /// The RSA private-key operation failed. Rare for well-formed keys.
    #[error("rsa signing operation failed: {0}")]
    Operation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_error_display() {
        let err = KeyError::Format("no PEM armor found".to_string());
        assert_eq!(err.to_string(), "invalid key encoding: no PEM armor found");

        let err = KeyError::Algorithm {
            oid: "1.2.840.10045.2.1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported key algorithm 1.2.840.10045.2.1, expected rsaEncryption"
        );
    }

    #[test]
    fn test_io_error_surfaces_unchanged() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = KeyError::from(io);
        assert!(matches!(err, KeyError::Io(_)));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_sign_error_display() {
        let err = SignError::Operation("message representative out of range".to_string());
        assert!(err.to_string().starts_with("rsa signing operation failed"));
    }
}
