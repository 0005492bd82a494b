//! # Serve Subcommand
//!
//! Loads the signing key, then serves the Axum application. The key path
//! and listen address are explicit arguments; a bad key fails here, with
//! context, before the listener ever binds.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use signet_api::AppState;

/// Arguments for the serve subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to the PEM-encoded PKCS#8 RSA private key.
    #[arg(long, default_value = "private_key.pem")]
    pub key: PathBuf,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub listen: SocketAddr,
}

/// Run the HTTP signing service until shutdown.
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let state = AppState::load(&args.key)
        .with_context(|| format!("loading signing key from {}", args.key.display()))?;
    tracing::info!(
        key = %args.key.display(),
        modulus_bits = state.key().modulus_bits(),
        "signing key loaded"
    );

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("binding {}", args.listen))?;
    tracing::info!(addr = %args.listen, "listening");

    axum::serve(listener, signet_api::app(state)).await?;
    Ok(())
}
