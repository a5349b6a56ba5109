//! HTTP server for the public read API, health checks and Prometheus metrics

use crate::api::handlers;
use crate::service::AppState;
use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::{info, warn};

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host to bind to (typically "0.0.0.0" for all interfaces)
    pub host: String,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl ApiServerConfig {
    pub fn from_app_config(config: &crate::config::AppConfig) -> Self {
        Self {
            port: config.service.http_port,
            host: config.service.host.clone(),
        }
    }
}

/// Build the router with every endpoint
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/api/teams", get(handlers::teams_handler))
        .route("/api/players", get(handlers::players_handler))
        .route("/api/matches", get(handlers::matches_handler))
        .route("/api/matches/{id}/stats", get(handlers::match_stats_handler))
        .route("/api/schedule/{sport}", get(handlers::schedule_handler))
        .route("/api/standings/{sport}", get(handlers::standings_handler))
        .route("/api/top-scorers/{sport}", get(handlers::top_scorers_handler))
        .route("/api/cheerleading/rankings", get(handlers::rankings_handler))
        .with_state(state)
}

/// HTTP server with broadcast-driven graceful shutdown
pub struct ApiServer {
    config: ApiServerConfig,
    state: Arc<AppState>,
    shutdown_tx: broadcast::Sender<()>,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(config: ApiServerConfig, state: Arc<AppState>) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            config,
            state,
            shutdown_tx,
        }
    }

    /// Bind and serve until [`ApiServer::stop`] is called
    pub async fn start(&self) -> Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .context("Invalid API server address")?;

        let app = router(self.state.clone());
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("API server listening on http://{}", addr);

        let mut shutdown_rx = self.shutdown_tx.subscribe();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
                info!("API server shutdown signal received");
            })
            .await?;

        info!("API server stopped");
        Ok(())
    }

    /// Signal the server to stop accepting connections
    pub fn stop(&self) {
        info!("Stopping API server...");

        if let Err(e) = self.shutdown_tx.send(()) {
            warn!("Failed to send shutdown signal to API server: {}", e);
        }
    }
}
