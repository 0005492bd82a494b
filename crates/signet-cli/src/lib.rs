//! # signet-cli: Signet Command-Line Interface
//!
//! ## Subcommands
//!
//! - `serve`: run the HTTP signing API
//! - `sign`: sign a payload offline and print the base64 signature
//!
//! Both paths load the key and sign through `signet-crypto`, so an
//! offline `sign` run produces byte-identical output to the service.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to domain crates; no signing logic here.

pub mod serve;
pub mod sign;
