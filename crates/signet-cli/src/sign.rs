//! # Sign Subcommand
//!
//! Offline signing for provisioning checks and scripting. Reads the
//! payload from a file or stdin and prints the base64 signature, the
//! same bytes the HTTP endpoint would return for that payload.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use signet_crypto::RsaKeyMaterial;

/// Arguments for the sign subcommand.
#[derive(Args, Debug)]
pub struct SignArgs {
    /// Path to the PEM-encoded PKCS#8 RSA private key.
    #[arg(long, default_value = "private_key.pem")]
    pub key: PathBuf,

    /// File holding the payload to sign; stdin when omitted.
    pub input: Option<PathBuf>,
}

/// Sign the payload and print the base64 signature on stdout.
pub fn run(args: SignArgs) -> anyhow::Result<()> {
    let key = RsaKeyMaterial::load(&args.key)
        .with_context(|| format!("loading signing key from {}", args.key.display()))?;

    let message = match &args.input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let signature = signet_crypto::sign(&key, &message)?;
    println!("{signature}");
    Ok(())
}
