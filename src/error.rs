//! Gateway error taxonomy.
//!
//! # Responsibilities
//! - Name every failure state the gateway can reach on a request path
//! - Keep failure handling per-request: no variant is fatal to the process
//!
//! # Design Decisions
//! - Backend call outcomes (connection failure, timeout) are modeled as
//!   `BackendOutcome` variants in the forwarder, not errors — they are
//!   expected results of talking to a network
//! - Every variant is recovered at the dispatcher/translator boundary and
//!   becomes a structured JSON response; none escape as panics

use axum::http::Method;
use thiserror::Error;

/// Request-scoped failures recovered at the translation boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The sub-path failed the safety check (traversal, absolute path,
    /// embedded URL scheme, or disallowed characters).
    #[error("unsafe request path: {path}")]
    UnsafePath {
        /// The rejected path, as received.
        path: String,
    },

    /// No registered route prefix matches the request path.
    #[error("no route for path: {path}")]
    RouteNotFound {
        /// The unmatched path.
        path: String,
    },

    /// The HTTP method is outside the supported set (GET/POST/PUT/DELETE).
    #[error("method not allowed: {method}")]
    MethodNotAllowed {
        /// The offending method.
        method: Method,
    },

    /// The matched route has no backend base URL configured.
    #[error("service URL not configured for route '{route}'")]
    NotConfigured {
        /// Name of the route missing its backend URL.
        route: String,
    },

    /// Anything the gateway did not anticipate (malformed outbound URL,
    /// transport failure after connect, oversized body).
    #[error("{detail}")]
    Unexpected {
        /// Human-readable description, surfaced in the response body.
        detail: String,
    },
}

/// Errors detected while building the route table at startup.
///
/// These are fatal by design: a misconfigured table must fail the process
/// before it accepts traffic, not surface per request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    /// A route was registered with an empty prefix.
    #[error("route '{route}' has an empty prefix")]
    EmptyPrefix {
        /// Name of the offending route.
        route: String,
    },

    /// Two registered prefixes overlap (one is a prefix of the other),
    /// which would make matching order-dependent.
    #[error("route prefixes overlap: '{first}' and '{second}'")]
    OverlappingPrefixes {
        /// The shorter prefix.
        first: String,
        /// The prefix it shadows.
        second: String,
    },
}
