//! Translation of internal outcomes into gateway HTTP responses.
//!
//! This is the single place where backend outcomes and request-scoped
//! errors become external, stable HTTP semantics. Raw transport errors
//! never reach callers; every request ends in a structured JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::error::GatewayError;
use crate::proxy::forwarder::BackendOutcome;

/// The gateway's answer to one inbound request: a status code and a JSON
/// body, always both.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse {
    /// HTTP status returned to the caller.
    pub status: StatusCode,
    /// JSON body returned to the caller.
    pub body: Value,
}

impl GatewayResponse {
    /// Build a response from parts.
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "error": message.into() }))
    }
}

impl IntoResponse for GatewayResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Map a backend call outcome to the gateway response.
///
/// A parseable JSON body (or an empty body, read as `{}`) passes through
/// with the backend's own status code. A non-empty body that fails to
/// parse is reported as a bad upstream response, never forwarded raw.
pub fn respond(outcome: BackendOutcome) -> GatewayResponse {
    match outcome {
        BackendOutcome::Success { status, raw_body } => {
            if raw_body.is_empty() {
                return GatewayResponse::new(status, json!({}));
            }
            match serde_json::from_slice::<Value>(&raw_body) {
                Ok(body) => GatewayResponse::new(status, body),
                Err(e) => {
                    tracing::warn!(status = %status, error = %e, "Backend returned unparseable body");
                    GatewayResponse::error(StatusCode::BAD_GATEWAY, "Invalid response from service")
                }
            }
        }
        BackendOutcome::ConnectionFailed => {
            GatewayResponse::error(StatusCode::SERVICE_UNAVAILABLE, "Service unavailable")
        }
        BackendOutcome::TimedOut => {
            GatewayResponse::error(StatusCode::GATEWAY_TIMEOUT, "Service timeout")
        }
    }
}

/// Map a request-scoped gateway error to its response.
pub fn respond_error(err: &GatewayError) -> GatewayResponse {
    match err {
        GatewayError::UnsafePath { .. } => {
            GatewayResponse::error(StatusCode::BAD_REQUEST, "Invalid request path")
        }
        GatewayError::RouteNotFound { .. } => {
            GatewayResponse::error(StatusCode::NOT_FOUND, "Not found")
        }
        GatewayError::MethodNotAllowed { .. } => {
            GatewayResponse::error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
        }
        GatewayError::NotConfigured { .. } => {
            GatewayResponse::error(StatusCode::INTERNAL_SERVER_ERROR, "Service URL not configured")
        }
        GatewayError::Unexpected { detail } => {
            GatewayResponse::error(StatusCode::INTERNAL_SERVER_ERROR, detail.clone())
        }
    }
}
