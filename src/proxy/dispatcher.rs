//! Per-request dispatch: the linear pipeline from inbound request to
//! gateway response.

use axum::body::Bytes;
use axum::http::{HeaderValue, Method};

use crate::config::GatewayConfig;
use crate::error::{GatewayError, RouteTableError};
use crate::proxy::forwarder::Forwarder;
use crate::proxy::path;
use crate::proxy::translator::{self, GatewayResponse};
use crate::routing::RouteTable;

/// One inbound request, owned by the dispatcher for its duration.
///
/// `raw_path` is the path after the gateway's `/api/` mount, exactly as
/// received (no percent-decoding). Never persisted.
#[derive(Debug)]
pub struct InboundRequest {
    /// HTTP method.
    pub method: Method,
    /// Path after the `/api/` mount.
    pub raw_path: String,
    /// Query parameters in wire order.
    pub query: Vec<(String, String)>,
    /// Request body bytes (empty when absent).
    pub body: Bytes,
    /// Inbound `Authorization` header, if any.
    pub auth_header: Option<HeaderValue>,
}

/// Top-level request pipeline: route lookup, path validation, forwarding,
/// translation. Stateless across requests beyond the immutable table and
/// the shared client.
pub struct Dispatcher {
    table: RouteTable,
    forwarder: Forwarder,
}

impl Dispatcher {
    /// Build the dispatcher from configuration.
    ///
    /// Fails fast when the route table is misconfigured; an unconfigured
    /// (empty) service URL is not a construction error — that route
    /// answers 500 per request while the others keep working.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, RouteTableError> {
        let table = RouteTable::from_services(&config.services)?;
        tracing::debug!(routes = table.routes().len(), "Route table built");
        Ok(Self {
            table,
            forwarder: Forwarder::new(&config.timeouts),
        })
    }

    /// Handle one request. Always produces exactly one response.
    pub async fn dispatch(&self, inbound: InboundRequest) -> GatewayResponse {
        match self.try_dispatch(&inbound).await {
            Ok(response) => response,
            Err(err) => {
                match &err {
                    GatewayError::UnsafePath { path } => {
                        tracing::warn!(path = %path, security = true, "Rejected unsafe request path");
                    }
                    GatewayError::Unexpected { detail } => {
                        tracing::error!(detail = %detail, "Request failed unexpectedly");
                    }
                    other => {
                        tracing::debug!(error = %other, "Request rejected");
                    }
                }
                translator::respond_error(&err)
            }
        }
    }

    async fn try_dispatch(&self, inbound: &InboundRequest) -> Result<GatewayResponse, GatewayError> {
        if !matches!(
            inbound.method,
            Method::GET | Method::POST | Method::PUT | Method::DELETE
        ) {
            return Err(GatewayError::MethodNotAllowed {
                method: inbound.method.clone(),
            });
        }

        let resolved = self
            .table
            .resolve(&inbound.raw_path)
            .ok_or_else(|| GatewayError::RouteNotFound {
                path: inbound.raw_path.clone(),
            })?;

        if !path::is_safe(resolved.remainder) {
            return Err(GatewayError::UnsafePath {
                path: inbound.raw_path.clone(),
            });
        }

        if resolved.route.backend_base_url.is_empty() {
            return Err(GatewayError::NotConfigured {
                route: resolved.route.name.clone(),
            });
        }

        tracing::debug!(
            method = %inbound.method,
            route = %resolved.route.name,
            remainder = %resolved.remainder,
            "Forwarding request"
        );

        let outcome = self
            .forwarder
            .forward(
                &resolved.route.backend_base_url,
                resolved.remainder,
                &inbound.method,
                &inbound.query,
                &inbound.body,
                inbound.auth_header.as_ref(),
            )
            .await?;

        Ok(translator::respond(outcome))
    }
}
