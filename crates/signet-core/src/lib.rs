//! # signet-core: Foundational Types for the Signet Signing Service
//!
//! Defines the types shared by every other crate in the workspace:
//!
//! 1. **Error taxonomy.** [`KeyError`] for everything that can go wrong
//!    turning a key-source blob into usable RSA key material, and
//!    [`SignError`] for failures of the signing operation itself. Errors
//!    always propagate to the immediate caller; nothing in the core logs
//!    and swallows.
//!
//! 2. **`MessageDigest` newtype.** A SHA-256 digest is always exactly
//!    32 bytes. The newtype keeps digest values from being confused with
//!    arbitrary byte buffers on their way into the signer.
//!
//! 3. **`SignatureBytes` newtype.** Signatures leave the system as
//!    standard base64 text. The newtype owns that encoding (serde,
//!    `Display`) so no caller ever re-encodes by hand.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `signet-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod error;
pub mod signature;

// Re-export primary types for ergonomic imports.
pub use digest::{MessageDigest, DIGEST_LEN};
pub use error::{KeyError, SignError};
pub use signature::SignatureBytes;
