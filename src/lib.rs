//! API Gateway
//!
//! A reverse-proxy gateway built with Tokio and Axum. It fronts the user,
//! product, and order services: inbound requests are matched by route
//! prefix, their sub-paths validated, then forwarded with authentication
//! context to the owning backend, and every backend outcome — including
//! connection failures, timeouts, and malformed bodies — is translated
//! into a stable, documented JSON response.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                  API GATEWAY                    │
//!                    │                                                 │
//!   Client Request   │  ┌────────┐   ┌──────────┐   ┌──────────────┐  │
//!   ─────────────────┼─▶│  http  │──▶│ routing  │──▶│ proxy        │  │
//!                    │  │ server │   │ table    │   │ (validate,   │  │
//!                    │  └────────┘   └──────────┘   │  forward,    │──┼──▶ Backend
//!   Client Response  │       ▲                      │  translate)  │  │    Service
//!   ◀────────────────┼───────┴──────────────────────└──────────────┘  │
//!                    │                                                 │
//!                    │  ┌──────────────────────────────────────────┐   │
//!                    │  │          Cross-Cutting Concerns           │   │
//!                    │  │  ┌────────┐ ┌─────────────┐ ┌──────────┐ │   │
//!                    │  │  │ config │ │observability│ │lifecycle │ │   │
//!                    │  │  └────────┘ └─────────────┘ └──────────┘ │   │
//!                    │  └──────────────────────────────────────────┘   │
//!                    └────────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod proxy;
pub mod routing;

// Cross-cutting concerns
pub mod error;
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use error::{GatewayError, RouteTableError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
