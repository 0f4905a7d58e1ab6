//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, /health, /api mount)
//!     → request.rs (request ID)
//!     → proxy::Dispatcher (route, validate, forward, translate)
//!     → Send GatewayResponse to client
//! ```

pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::HttpServer;
