use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::AppError;
pub use state::AppState;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4001,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn create_app(state: AppState) -> Router {
    let routes = Router::new()
        .route("/news", get(handlers::news))
        .route("/filters", get(handlers::filters))
        .route("/stocks", get(handlers::stocks))
        .route("/summary", get(handlers::summary))
        .route("/health", get(handlers::health))
        .with_state(Arc::new(state));

    with_middleware(routes)
}

/// Unknown routes and handler panics both answer with the JSON error envelope.
pub fn with_middleware(router: Router) -> Router {
    router
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn serve(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!("🚀 finwire listening on http://{}", addr);

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

pub mod prelude {
    pub use crate::{create_app, serve, AppError, AppState, ServerConfig};
    pub use fw_core::{Article, Error, Quote, Result};
}
