//! Axiom Relay - Headless Shim
//!
//! A pure Rust HTTP server that:
//! - Claims the /_axiom/* route namespace
//! - Relays web-vitals and log payloads to the configured ingest endpoints
//! - Answers callers with an empty 204, never the ingest service's reply
//!
//! Ingest targets come from the environment (AXIOM_TOKEN, AXIOM_DATASET,
//! AXIOM_URL, per-kind endpoint overrides), resolved once at startup.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;

use axiom_relay_core::relay::config as relay_config;
use axiom_relay_core::relay::{RelayServer, ServerStartConfig};
use axiom_relay_types::{EndpointKind, IngestConfig};
use cli::{Cli, Commands, ConfigCommands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level: Level = cli.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Resolved once; request handling never re-reads the environment
    let ingest = relay_config::from_env();

    match cli.command {
        Some(Commands::Config(ConfigCommands::Show { json })) => show_config(&ingest, json),
        Some(Commands::Serve { host, port }) => serve(host, port, ingest).await,
        None => serve(cli.host, cli.port, ingest).await,
    }
}

async fn serve(host: String, port: u16, ingest: IngestConfig) -> Result<()> {
    info!("Axiom relay starting on {}:{}", host, port);

    if ingest.is_unconfigured() {
        info!("no ingest endpoints resolved; /_axiom traffic will pass through");
    } else {
        log_endpoint(&ingest, EndpointKind::WebVitals);
        log_endpoint(&ingest, EndpointKind::Logs);
    }

    let server = RelayServer::new(ServerStartConfig { host, port, ingest });
    server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("relay server failed: {}", e))
}

fn log_endpoint(ingest: &IngestConfig, kind: EndpointKind) {
    match ingest.ingest_url(kind) {
        Some(url) => info!("{} -> {}", kind, url),
        None => info!("{} -> (unset)", kind),
    }
}

fn show_config(ingest: &IngestConfig, json: bool) -> Result<()> {
    let web_vitals = ingest.ingest_url(EndpointKind::WebVitals).map(|u| u.as_str().to_string());
    let logs = ingest.ingest_url(EndpointKind::Logs).map(|u| u.as_str().to_string());
    let token = if ingest.token.is_empty() { "(unset)" } else { "(redacted)" };

    if json {
        let value = serde_json::json!({
            "web_vitals_url": web_vitals,
            "logs_url": logs,
            "token": token,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("web-vitals: {}", web_vitals.as_deref().unwrap_or("(unset)"));
        println!("logs:       {}", logs.as_deref().unwrap_or("(unset)"));
        println!("token:      {}", token);
    }

    Ok(())
}
