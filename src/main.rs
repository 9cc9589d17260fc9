mod api;
mod app;
mod catalog;
mod config;
mod models;
mod render;
mod server;

#[cfg(test)]
mod test_support;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::app::AppState;
use crate::config::{AppConfig, DEFAULT_API_BASE};

#[derive(Parser, Debug)]
#[command(name = "groupie-tracker")]
#[command(about = "Browse artists, concert locations and dates from the Groupie Trackers API")]
#[command(version)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port for the web server
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Base URL of the upstream JSON API
    #[arg(long, env = "GROUPIE_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Directory served under /static
    #[arg(long, env = "GROUPIE_STATIC_DIR", default_value = "static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG takes precedence, fallback to info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = AppConfig::default()
        .with_listen_addr(SocketAddr::new(args.host, args.port))
        .with_api_base(args.api_base)
        .with_static_dir(args.static_dir);
    config.validate()?;

    tracing::info!(
        api_base = config.api_base(),
        static_dir = %config.static_dir().display(),
        "Starting groupie-tracker"
    );

    let state = AppState::from_config(&config)?;
    server::run_server(config, state).await
}
