mod config;
mod es;
mod handlers;
mod models;
mod templates;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Args, Config};
use es::EsClient;
use handlers::AppState;

/// Prodleva mezi signálem a zastavením serveru
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI argumenty (chyba parsování ukončí proces přes clap)
    let args = Args::parse();

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // Inicializuj logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(config).await {
        Ok(()) => {
            tracing::info!("exited");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("exited with error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<()> {
    tracing::info!("Starting KB dashboard...");

    let client = EsClient::from_config(&config)?;
    tracing::info!("Using Elasticsearch at {}", client.base_url());

    // Ověř spojení s clusterem ještě před startem serveru
    client.detect_version().await
        .context("Failed to connect to Elasticsearch")?;

    if config.access_token.is_empty() {
        tracing::warn!("KB_ACCESS_TOKEN is empty, dashboard is not protected");
    }

    let state = Arc::new(AppState {
        client,
        access_token: config.access_token.clone(),
        debug: config.debug,
        request_timeout: config.request_timeout,
    });

    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    tracing::info!("listening at {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    Ok(())
}

/// Čeká na SIGINT/SIGTERM, pak nechá doběhnout rozjeté requesty
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    };

    tracing::info!("signal caught: {}", signal);
    tokio::time::sleep(SHUTDOWN_GRACE).await;
}
