//! Host for the loan approval predictor page.
//!
//! Server-renders the Leptos page and serves its WASM bundle. Predictions
//! themselves are requested by the browser directly from the external
//! service; nothing here talks to it.

mod config;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos setup failed: {0}")]
    Leptos(String),
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "loan-predict stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app().map_err(ServerError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(ServerError::Bind)?;

    let predict_api = client::net::api::ApiTransport::from_build_env();
    tracing::info!(port = config.port, predict_api = predict_api.url(), "loan-predict listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
