mod config;
mod error;
mod ffmpeg;
mod routes;
mod scratch;
mod transcribe;

use axum::http::Request;
use axum::body::Body;
use config::Config;
use routes::AppState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env()?);
    tracing::info!(
        addr = %config.addr,
        work_dir = %config.work_dir.display(),
        transcription = config.transcribe_url.is_some(),
        "starting"
    );

    let state = AppState {
        config: config.clone(),
        http: reqwest::Client::new(),
    };
    let app = routes::router(state).layer(TraceLayer::new_for_http().make_span_with(
        |request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        },
    ));

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown handler");
        return;
    }
    tracing::info!("shutdown_signal_received");
}
