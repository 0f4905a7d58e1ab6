//! Outbound request construction and execution.
//!
//! # Responsibilities
//! - Build the outbound request from the validated inbound pieces
//! - Issue exactly one backend call per inbound request, no retries
//! - Bound every call with the configured backend timeout
//! - Buffer the backend response body for translation
//!
//! # Design Decisions
//! - Only the `Authorization` header crosses the gateway; no other
//!   inbound header is propagated
//! - Query parameters travel only on GET, the body only on POST/PUT
//! - Connection-phase failures and timeouts are outcomes, not errors:
//!   the translator owes the caller a response for both

use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::config::TimeoutConfig;
use crate::error::GatewayError;

/// Backend responses larger than this are treated as unexpected failures
/// rather than buffered unboundedly.
const MAX_BUFFERED_RESPONSE: usize = 2 * 1024 * 1024;

/// Result of one outbound backend call.
#[derive(Debug)]
pub enum BackendOutcome {
    /// The backend answered; status and raw body are passed to the
    /// translator untouched.
    Success {
        /// Backend HTTP status, forwarded as-is on JSON bodies.
        status: StatusCode,
        /// Raw response body bytes.
        raw_body: Bytes,
    },
    /// The connection could not be established (refused, DNS, unroutable).
    ConnectionFailed,
    /// The backend did not answer within the configured timeout.
    TimedOut,
}

/// Issues outbound calls over a shared HTTP client.
#[derive(Clone)]
pub struct Forwarder {
    client: Client<HttpConnector, Body>,
    timeout: Duration,
}

impl Forwarder {
    /// Create a forwarder with connect and per-request timeouts from
    /// configuration.
    pub fn new(timeouts: &TimeoutConfig) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(Duration::from_secs(timeouts.connect_secs)));
        let client = Client::builder(TokioExecutor::new()).build(connector);
        Self {
            client,
            timeout: Duration::from_secs(timeouts.backend_secs),
        }
    }

    /// Forward a validated request to `backend_base_url` and return the
    /// outcome.
    ///
    /// The target is `<backend_base_url>/api/<remainder>`, the fixed
    /// convention all backend services expose.
    pub async fn forward(
        &self,
        backend_base_url: &str,
        remainder: &str,
        method: &Method,
        query: &[(String, String)],
        body: &Bytes,
        auth_header: Option<&HeaderValue>,
    ) -> Result<BackendOutcome, GatewayError> {
        let uri = build_target_uri(backend_base_url, remainder, method, query)?;

        let mut builder = axum::http::Request::builder().method(method.clone()).uri(uri);
        if let Some(auth) = auth_header {
            builder = builder.header(header::AUTHORIZATION, auth.clone());
        }
        let outbound_body = match *method {
            Method::POST | Method::PUT => Body::from(body.clone()),
            _ => Body::empty(),
        };
        let request = builder.body(outbound_body).map_err(|e| GatewayError::Unexpected {
            detail: format!("failed to build outbound request: {e}"),
        })?;

        match tokio::time::timeout(self.timeout, self.client.request(request)).await {
            Err(_) => Ok(BackendOutcome::TimedOut),
            Ok(Err(e)) if e.is_connect() => {
                tracing::debug!(error = %e, "Backend connection failed");
                Ok(BackendOutcome::ConnectionFailed)
            }
            Ok(Err(e)) => Err(GatewayError::Unexpected {
                detail: format!("backend transport error: {e}"),
            }),
            Ok(Ok(response)) => {
                let status = response.status();
                let (_, incoming) = response.into_parts();
                let raw_body = collect_body(incoming).await?;
                Ok(BackendOutcome::Success { status, raw_body })
            }
        }
    }
}

/// Buffer a backend response body, bounded by `MAX_BUFFERED_RESPONSE`.
async fn collect_body(body: hyper::body::Incoming) -> Result<Bytes, GatewayError> {
    axum::body::to_bytes(Body::new(body), MAX_BUFFERED_RESPONSE)
        .await
        .map_err(|e| GatewayError::Unexpected {
            detail: format!("failed to read backend response: {e}"),
        })
}

/// Join the base URL, the fixed `/api/` segment, the remainder, and (for
/// GET) the re-serialized query into an outbound URI.
fn build_target_uri(
    backend_base_url: &str,
    remainder: &str,
    method: &Method,
    query: &[(String, String)],
) -> Result<Uri, GatewayError> {
    let mut target = format!("{}/api/{}", backend_base_url.trim_end_matches('/'), remainder);
    if *method == Method::GET && !query.is_empty() {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();
        target.push('?');
        target.push_str(&encoded);
    }
    target.parse::<Uri>().map_err(|e| GatewayError::Unexpected {
        detail: format!("invalid outbound URL '{target}': {e}"),
    })
}
