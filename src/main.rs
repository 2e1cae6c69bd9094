//! Locale Gateway
//!
//! An edge service for a bilingual marketing site, built with Tokio and
//! Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                LOCALE GATEWAY                 │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐   ┌────────────┐   ┌─────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│  routing   │──▶│ content │  │
//!                    │  │ server  │   │ exclusions │   │  store  │  │
//!                    │  └─────────┘   │ + locale   │   └─────────┘  │
//!                    │                └─────┬──────┘                 │
//!                    │                      │ 307 when unprefixed   │
//!   Client Response  │                      ▼                        │
//!   ◀────────────────┼── pass-through page render or redirect        │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │         Cross-Cutting Concerns           │ │
//!                    │  │  config │ observability │ lifecycle      │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use locale_gateway::config::loader::load_config;
use locale_gateway::config::GatewayConfig;
use locale_gateway::content::{Dictionaries, MemoryPageStore, PageStore};
use locale_gateway::http::HttpServer;
use locale_gateway::lifecycle::{signals, Shutdown};
use locale_gateway::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "locale-gateway", version, about = "Locale-aware edge gateway")]
struct Cli {
    /// Path to a TOML config file. Defaults are used when absent.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging("locale_gateway=debug,tower_http=debug");

    tracing::info!("locale-gateway v0.1.0 starting");

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        supported_locales = ?config.locales.supported,
        default_locale = %config.locales.default_locale,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validation guarantees the address parses for loaded configs.
        let metrics_addr: std::net::SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(metrics_addr);
    }

    let dictionaries = match &config.content.dictionary_dir {
        Some(dir) => Dictionaries::load_dir(
            Path::new(dir),
            &config.locales.supported,
            &config.locales.default_locale,
        )?,
        None => Dictionaries::builtin(&config.locales.default_locale),
    };

    let pages: Arc<dyn PageStore> = if config.content.pages.is_empty() {
        Arc::new(MemoryPageStore::default_site(&config.locales.supported))
    } else {
        Arc::new(MemoryPageStore::from_config(&config.content.pages))
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::with_content(config, dictionaries, pages);
    server.run(listener, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
