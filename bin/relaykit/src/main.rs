//! Relaykit - Relay pagination demo server.
//!
//! # Usage
//!
//! ```bash
//! # Start with default config
//! relaykit
//!
//! # Start with environment overrides
//! PORT=8080 LOG_LEVEL=debug relaykit
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::signal;
use tokio::sync::watch;
use tracing::{Instrument, debug, error, info, info_span, warn};
use tracing_subscriber::{EnvFilter, fmt};

use relaykit_core::metrics::init_metrics;
use relaykit_graphql::starwars::StarWarsData;
use relaykit_graphql::{ServerConfig, build_star_wars_schema, serve_with_shutdown};

/// Relaykit CLI - Relay cursor pagination over GraphQL.
#[derive(Parser, Debug)]
#[command(name = "relaykit")]
#[command(about = "Relaykit - Relay-compliant GraphQL demo server")]
#[command(version)]
struct Cli {
    /// Address the GraphQL server binds to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// GraphQL server port.
    #[arg(long, env = "PORT", default_value = "4000")]
    port: u16,

    /// Prometheus metrics port. Metrics are disabled when unset.
    #[arg(long, env = "METRICS_PORT")]
    metrics_port: Option<u16>,

    /// Enable JSON log output.
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,

    /// Do not serve GraphiQL at `/`.
    #[arg(long, env = "DISABLE_PLAYGROUND")]
    disable_playground: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    // ─────────────────────────────────────────────────────────────────────────
    // 🚀 STARTUP
    // ─────────────────────────────────────────────────────────────────────────
    info!("🚀 Starting Relaykit");

    // Prometheus metrics exporter (optional - failures don't crash the app)
    let metrics_port = cli.metrics_port.filter(|&port| start_metrics_exporter(&cli.host, port));

    let graphql_config = ServerConfig {
        host: cli.host.clone(),
        port: cli.port,
        enable_playground: !cli.disable_playground,
    };
    debug!(
        addr = %graphql_config.addr(),
        playground = graphql_config.enable_playground,
        "Server config"
    );

    let data = Arc::new(StarWarsData::new());
    let schema = build_star_wars_schema(data);

    // ─────────────────────────────────────────────────────────────────────────
    // ⚡ SERVICES START
    // ─────────────────────────────────────────────────────────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let mut graphql_handle = tokio::spawn(
        async move {
            let shutdown_signal = async move {
                while !*shutdown_rx.borrow() {
                    if shutdown_rx.changed().await.is_err() {
                        break;
                    }
                }
            };

            serve_with_shutdown(schema, graphql_config, shutdown_signal).await
        }
        .instrument(info_span!("graphql")),
    );

    // ─────────────────────────────────────────────────────────────────────────
    // ✅ READY
    // ─────────────────────────────────────────────────────────────────────────
    info!("✅ Relaykit ready");
    info!("   ⚡ GraphQL:  http://localhost:{}/graphql", cli.port);
    match metrics_port {
        Some(port) => info!("   📊 Metrics:  http://localhost:{}/metrics", port),
        None => info!("   📊 Metrics:  disabled"),
    }
    info!("   Press Ctrl+C to stop");

    tokio::select! {
        _ = shutdown_signal() => {}
        joined = &mut graphql_handle => {
            // Server exited without a shutdown request, usually a bind failure.
            return joined
                .context("GraphQL server task failed")?
                .context("GraphQL server error");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // 🛑 SHUTDOWN
    // ─────────────────────────────────────────────────────────────────────────
    info!("🛑 Shutting down...");
    let _ = shutdown_tx.send(true);

    match tokio::time::timeout(std::time::Duration::from_secs(10), graphql_handle).await {
        Ok(Ok(Ok(()))) => debug!("GraphQL stopped"),
        Ok(Ok(Err(e))) => error!(error = %e, "❌ Server error"),
        Ok(Err(e)) => error!(error = %e, "❌ Server task failed"),
        Err(_) => warn!("⚠️  GraphQL shutdown timed out"),
    }

    info!("🛑 Shutdown complete");
    Ok(())
}

/// Initialize tracing subscriber.
fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .init();
    }
}

/// Install the Prometheus exporter, returning whether it is running.
fn start_metrics_exporter(host: &str, port: u16) -> bool {
    let addr = match format!("{host}:{port}").parse::<SocketAddr>() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("⚠️  Invalid metrics address: {}. Continuing without metrics.", e);
            return false;
        }
    };

    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            init_metrics();
            true
        }
        Err(e) => {
            warn!("⚠️  Failed to start metrics exporter: {}. Continuing without metrics.", e);
            false
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "❌ Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "❌ Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
