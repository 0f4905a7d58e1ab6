//! HTTP server setup and request entry points.
//!
//! # Responsibilities
//! - Create the Axum router: health endpoint plus the /api proxy mount
//! - Wire up middleware (tracing, request ID, server-side timeout)
//! - Adapt inbound axum requests into `InboundRequest` for the dispatcher
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::error::{GatewayError, RouteTableError};
use crate::http::request::MakeRequestUuid;
use crate::http::X_REQUEST_ID;
use crate::observability::metrics;
use crate::proxy::{translator, Dispatcher, GatewayResponse, InboundRequest};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared per-request pipeline.
    pub dispatcher: Arc<Dispatcher>,
    /// Inbound body size cap, from listener config.
    pub max_body_bytes: usize,
}

/// HTTP server for the API gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails when the route table is misconfigured (overlapping or empty
    /// prefixes) — startup is the right time to find out.
    pub fn new(config: GatewayConfig) -> Result<Self, RouteTableError> {
        let dispatcher = Arc::new(Dispatcher::from_config(&config)?);
        let state = AppState {
            dispatcher,
            max_body_bytes: config.listener.max_body_bytes,
        };
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/health/", get(health_handler))
            .route("/api/{*rest}", any(proxy_handler))
            .fallback(fallback_handler)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.server_secs,
                    ))),
            )
    }

    /// Run the server until the shutdown signal fires.
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
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Health endpoint. Answers from the gateway itself, independent of
/// backend availability, and bypasses the dispatcher entirely.
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "api-gateway",
        "version": "1.0.0",
    }))
}

/// Paths outside the /api mount and the health endpoint. Still a
/// structured JSON response; the gateway never answers with a bare body.
async fn fallback_handler(request: Request<Body>) -> GatewayResponse {
    translator::respond_error(&GatewayError::RouteNotFound {
        path: request.uri().path().to_string(),
    })
}

/// Proxy entry point: adapts the axum request into an `InboundRequest`
/// and hands it to the dispatcher.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> GatewayResponse {
    let start_time = Instant::now();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let method = request.method().clone();
    // The raw (undecoded) path keeps percent-escapes visible to the
    // safety check.
    let full_path = request.uri().path().to_string();
    let raw_path = full_path
        .strip_prefix("/api/")
        .unwrap_or_default()
        .to_string();
    let route_label = raw_path
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string();
    let query = request
        .uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default();
    let auth_header = request.headers().get(header::AUTHORIZATION).cloned();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %full_path,
        "Inbound request"
    );

    let body = match axum::body::to_bytes(request.into_body(), state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Failed to read request body");
            let response = translator::respond_error(&GatewayError::Unexpected {
                detail: format!("failed to read request body: {e}"),
            });
            metrics::record_request(method.as_str(), response.status.as_u16(), &route_label, start_time);
            return response;
        }
    };

    let inbound = InboundRequest {
        method: method.clone(),
        raw_path,
        query,
        body,
        auth_header,
    };

    let response = state.dispatcher.dispatch(inbound).await;
    metrics::record_request(method.as_str(), response.status.as_u16(), &route_label, start_time);
    response
}
