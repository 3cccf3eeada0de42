//! HTTP server assembly
//!
//! Combines the route tables into one axum `Router`, applies CORS and
//! request tracing, and drives the listener.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::repo::BookRepository;

use super::book_routes::{book_routes, landing_routes, BooksState};

/// HTTP server for the bookstore API
pub struct HttpServer {
    config: ServiceConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given repository.
    pub fn new(config: ServiceConfig, repo: BookRepository) -> Self {
        let router = Self::build_router(&config, repo);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServiceConfig, repo: BookRepository) -> Router {
        let state = Arc::new(BooksState::new(repo));

        // Permissive CORS when no origins are configured (development),
        // the configured list otherwise
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(landing_routes())
            .merge(book_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener and serve until the process exits.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "bookstore listening");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
