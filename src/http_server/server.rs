//! HTTP server
//!
//! Combines the session and explanation routers over one shared state:
//! the immutable catalogue (fanned out read-only to every session) and
//! the session registry.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::catalogue::Catalogue;
use crate::observability::{Logger, Severity};
use crate::session::SessionManager;

use super::config::HttpServerConfig;
use super::explain_routes::explain_routes;
use super::session_routes::session_routes;

/// State shared by all handlers
pub struct AppState {
    /// The immutable catalogue, shared across sessions without locking
    pub catalogue: Arc<Catalogue>,
    /// Session-local derived state
    pub sessions: SessionManager,
}

/// Dashboard HTTP server
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server with default configuration
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self::with_config(catalogue, HttpServerConfig::default())
    }

    /// Server with custom configuration
    pub fn with_config(catalogue: Arc<Catalogue>, config: HttpServerConfig) -> Self {
        let router = Self::build_router(catalogue);
        Self { config, router }
    }

    fn build_router(catalogue: Arc<Catalogue>) -> Router {
        let sources = catalogue.classification().len();
        let explained_sources = catalogue.contributions().len();
        let state = Arc::new(AppState {
            catalogue,
            sessions: SessionManager::new(),
        });

        // The dashboard frontend is served from a separate origin, so
        // the API stays fully permissive.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route(
                "/health",
                get(move || async move {
                    Json(json!({
                        "status": "ok",
                        "sources": sources,
                        "explained_sources": explained_sources,
                    }))
                }),
            )
            .merge(session_routes(state.clone()))
            .merge(explain_routes(state))
            .layer(cors)
    }

    /// The configured socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds and serves until shutdown.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {e}", self.config.socket_addr()),
            )
        })?;

        Logger::log(
            Severity::Info,
            "server_started",
            &[("addr", &addr.to_string())],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
