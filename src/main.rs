//! genrelay - credential-shielding relay for a hosted generative-text API
//!
//! A small server that accepts a prompt, forwards it to the upstream
//! generative-text API using a server-held credential, and falls back over
//! ranked model identifiers when a model fails.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use genrelay::relay;
use genrelay::Config;

#[derive(Parser)]
#[command(name = "genrelay")]
#[command(about = "Credential-shielding relay for a hosted generative-text API")]
#[command(version)]
struct Cli {
    /// Override the listen port (defaults to the PORT env var, then 3000)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "genrelay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config.listen = format!("0.0.0.0:{}", port);
    }

    relay::run_server(config).await
}
