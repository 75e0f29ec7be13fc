use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use imagefetch::application::{ServerConfig, serve};
use imagefetch::infrastructure::client::ImageFetchClient;
use imagefetch::infrastructure::clipboard::Osc52Clipboard;
use imagefetch::presentation::cli::{Cli, Commands, example, fetch};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(cmd) => {
            serve(ServerConfig {
                bind_address: cmd.bind_address,
                api_url: cli.api_url,
            })
            .await
        }
        Commands::Fetch(cmd) => {
            let client = ImageFetchClient::from_base_url(&cli.api_url)?;
            fetch::run(Arc::new(client), Arc::new(Osc52Clipboard::stderr()), cmd).await
        }
        Commands::Example(cmd) => example::run(cmd),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    // Logs go to stderr; stdout carries command output.
    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
