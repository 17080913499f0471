//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, trace headers, auth)
//! - Build the upstream transport and client
//! - Bind server to listener and stop on shutdown signal

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::actuator::actuator_router;
use crate::config::RelayConfig;
use crate::http::handlers;
use crate::observability::inject_trace_headers;
use crate::security::auth::{basic_auth_middleware, BasicAuth};
use crate::upstream::UpstreamClient;

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to build upstream transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with a default upstream transport.
    pub fn new(config: RelayConfig) -> Result<Self, ServerError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_transport(config, http))
    }

    /// Create a new HTTP server using the given upstream transport.
    pub fn with_transport(config: RelayConfig, http: reqwest::Client) -> Self {
        let state = AppState {
            upstream: UpstreamClient::new(&config.upstream, http),
        };
        let auth = Arc::new(BasicAuth::from_config(&config.security));

        tracing::debug!(
            upstream = %state.upstream.base_url(),
            auth_enabled = config.security.enabled,
            "HTTP server configured"
        );

        let router = Self::build_router(state, auth);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The trace context wraps the auth gate so rejected requests still get
    /// trace headers.
    fn build_router(state: AppState, auth: Arc<BasicAuth>) -> Router {
        Router::new()
            .route("/posts", get(handlers::list_posts))
            .route("/posts/{post_id}", get(handlers::get_post))
            .route("/posts/{post_id}/comments", get(handlers::get_post_with_comments))
            .route("/comments/{post_id}", get(handlers::get_post_comments))
            .with_state(state)
            .merge(actuator_router())
            .fallback(handlers::unknown_route)
            .layer(middleware::from_fn_with_state(auth, basic_auth_middleware))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(middleware::from_fn(inject_trace_headers)),
            )
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}
