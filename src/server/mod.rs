pub mod handlers;
mod types;

pub use types::{ErrorResponse, HealthResponse, SummarizeRequest, SummarizeResponse};

use crate::{
    Result,
    config::Config,
    lifecycle::{ServiceHandle, ServiceLifecycle},
};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // Build the singleton before binding; a missing credential or prompt
    // aborts startup without serving a single request.
    let mut lifecycle = ServiceLifecycle::new();
    lifecycle.start(&config).await?;

    let app = router(lifecycle.handle());

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    lifecycle.stop().await?;

    Ok(())
}

pub fn router(handle: ServiceHandle) -> Router {
    let app_state = handlers::AppState { summarizer: handle };

    Router::new()
        .route("/health", get(handlers::health))
        .route("/summarize", post(handlers::summarize))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
