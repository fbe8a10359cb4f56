//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the redirect routes
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve on an already-bound listener
//! - Drain and stop when the shutdown broadcast fires
//!
//! Requests for any other path get Axum's default 404.

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::redirect;
use crate::http::request::{propagate_request_id_layer, request_span, set_request_id_layer};

/// HTTP server for the redirect endpoint.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig) -> Router {
        Self::with_middleware(config, redirect::routes())
    }

    /// Wrap `routes` in the request-id, tracing and timeout layers.
    #[allow(deprecated)]
    fn with_middleware(config: &ServerConfig, routes: Router) -> Router {
        routes
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(set_request_id_layer())
    }

    /// The assembled router, for driving the server in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the server until `shutdown` fires, accepting connections on `listener`.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
