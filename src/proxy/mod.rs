//! Proxy core: the per-request forwarding pipeline.
//!
//! # Data Flow
//! ```text
//! InboundRequest (method, path, query, body, auth header)
//!     → dispatcher.rs (method check, route lookup)
//!     → path.rs (sub-path safety check, before any network I/O)
//!     → forwarder.rs (one outbound call, bounded by timeout)
//!     → translator.rs (BackendOutcome / GatewayError → GatewayResponse)
//! ```
//!
//! # Design Decisions
//! - The pipeline is linear: each request terminates in exactly one
//!   GatewayResponse, with no retries and no state kept across requests
//! - Backend payloads stay opaque (raw bytes / JSON values); the gateway
//!   never interprets business data
//! - translator.rs is the only place internal failure states become
//!   external HTTP semantics

pub mod dispatcher;
pub mod forwarder;
pub mod path;
pub mod translator;

pub use dispatcher::{Dispatcher, InboundRequest};
pub use forwarder::{BackendOutcome, Forwarder};
pub use translator::GatewayResponse;
