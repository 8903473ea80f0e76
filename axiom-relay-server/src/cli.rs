use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "axiom-relay",
    about = "Axiom Relay - edge shim for the /_axiom telemetry namespace",
    version = env!("CARGO_PKG_VERSION"),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, env = "AXIOM_RELAY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(short, long, env = "AXIOM_RELAY_PORT", default_value = "8777")]
    pub port: u16,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the relay server (default if no command specified)")]
    Serve {
        #[arg(long, env = "AXIOM_RELAY_HOST", default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, env = "AXIOM_RELAY_PORT", default_value = "8777")]
        port: u16,
    },

    #[command(subcommand, about = "Inspect resolved ingest configuration")]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show resolved ingest endpoints (token redacted)")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}
