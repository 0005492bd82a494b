//! # Application State
//!
//! Shared state for the Axum application: the loaded signing key.
//!
//! The key is held behind `Arc` as read-only shared data. Signing never
//! mutates key material, so concurrent requests need no locking.

use std::path::Path;
use std::sync::Arc;

use signet_core::KeyError;
use signet_crypto::RsaKeyMaterial;

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    key: Arc<RsaKeyMaterial>,
}

impl AppState {
    /// Build state around already-loaded key material.
    pub fn new(key: RsaKeyMaterial) -> Self {
        Self { key: Arc::new(key) }
    }

    /// Load the signing key from a PEM file and build state around it.
    ///
    /// Called once at startup; a bad path or malformed key stops the
    /// service before it accepts traffic.
    pub fn load(key_path: impl AsRef<Path>) -> Result<Self, KeyError> {
        Ok(Self::new(RsaKeyMaterial::load(key_path)?))
    }

    /// The service signing key.
    pub fn key(&self) -> &RsaKeyMaterial {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSA_PEM: &str = include_str!("../../../testdata/rsa2048-a.pem");

    #[test]
    fn test_state_shares_one_key() {
        let state = AppState::new(RsaKeyMaterial::from_pkcs8_pem(RSA_PEM).unwrap());
        let clone = state.clone();
        assert_eq!(state.key().modulus_bits(), clone.key().modulus_bits());
        assert!(Arc::ptr_eq(&state.key, &clone.key));
    }

    #[test]
    fn test_load_missing_key_fails() {
        let result = AppState::load("/nonexistent/private_key.pem");
        assert!(matches!(result, Err(KeyError::Io(_))));
    }

    #[test]
    fn test_load_from_disk() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../testdata/rsa2048-a.pem");
        let state = AppState::load(path).unwrap();
        assert_eq!(state.key().signature_len(), 256);
    }
}
