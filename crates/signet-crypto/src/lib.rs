//! # signet-crypto: Core Signing Operations
//!
//! Provides the two operations the Signet service is built around:
//!
//! - **Key loading.** [`RsaKeyMaterial`] decodes a PEM-armored PKCS#8
//!   private key blob into validated RSA key material, rejecting non-RSA
//!   keys with a distinct error.
//! - **Signing.** [`sign()`] computes the SHA-256 digest of a message and
//!   produces a deterministic PKCS#1 v1.5 signature over it.
//!
//! The operations are separable on purpose: callers decide whether to
//! reload the key per call or hold it resident. Loaded key material is
//! immutable, so a single [`RsaKeyMaterial`] can serve concurrent signing
//! calls without locking.
//!
//! ## Crate Policy
//!
//! - Depends only on `signet-core` internally.
//! - No mocking of cryptographic operations in tests; all tests use real
//!   PKCS#8 fixtures, real SHA-256, real RSA.
//! - Private key material is never logged, serialized, or exposed through
//!   `Debug`.

pub mod digest;
pub mod keys;
pub mod signer;

pub use digest::sha256_digest;
pub use keys::RsaKeyMaterial;
pub use signer::sign;
