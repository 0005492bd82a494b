//! # signet CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Signet: RSA signing service.
///
/// Serves an HTTP endpoint that signs text payloads with a PKCS#8 RSA
/// private key, and performs the same signing offline.
#[derive(Parser, Debug)]
#[command(name = "signet", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the signing API over HTTP.
    Serve(signet_cli::serve::ServeArgs),
    /// Sign a payload offline and print the base64 signature.
    Sign(signet_cli::sign::SignArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => signet_cli::serve::run(args).await,
        Commands::Sign(args) => signet_cli::sign::run(args),
    }
}
