// Framework bootstrap for the readiness server runtime.

use crate::frameworks::config::{Config, ConfigError, LogFormat};
use crate::interface_adapters::routes;
use std::io;
use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match format {
        LogFormat::Json => subscriber.json().with_current_span(true).init(),
        LogFormat::Compact => subscriber.compact().init(),
    }

    // Route panics through tracing so they land in the same log stream.
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Process entry point: environment, logging, config, then serve.
pub async fn start() -> Result<(), StartupError> {
    // A missing .env is fine; variables already set always win.
    let _ = dotenvy::dotenv();
    init_tracing(LogFormat::from_env());

    // Resolve config before touching the network so a bad PORT never opens a socket.
    let config = Config::from_env()?;
    run_with_config(&config).await
}

pub async fn run_with_config(config: &Config) -> Result<(), StartupError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| {
            tracing::error!(%addr, error = %source, "failed to bind");
            StartupError::Bind { addr, source }
        })?;

    run(listener).await
}

// Serve the app on an already bound listener; blocks until the server stops.
pub async fn run(listener: tokio::net::TcpListener) -> Result<(), StartupError> {
    let addr = listener.local_addr().map_err(StartupError::Serve)?;
    let app = routes::app();

    tracing::info!(%addr, "server starting");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.map_err(|error| {
        tracing::error!(%error, "server error");
        StartupError::Serve(error)
    })
}
