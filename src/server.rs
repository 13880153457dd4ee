use anyhow::{Context, Result};
use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers;
use crate::routes;

/// Builds the router for both canned routes.
///
/// Paths match exactly and accept any method. Every other path falls through
/// to axum's default fallback: `404 Not Found` with an empty body.
pub fn app() -> Router {
    Router::new()
        .route(routes::ERROR_PLEASE, any(handlers::error_please_handler))
        .route(routes::SUCCESS_YEAH, any(handlers::success_yeah_handler))
        .layer(TraceLayer::new_for_http())
}

/// Acquires the listening socket. Failure here is the only fatal condition.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.socket_addr();
    TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind listener on {}", addr))
}

pub async fn serve(listener: TcpListener) -> Result<()> {
    axum::serve(listener, app())
        .await
        .context("HTTP server error")
}

/// Binds and serves until the process is terminated.
pub async fn run(config: &Config) -> Result<()> {
    let listener = bind(config).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    serve(listener).await
}
