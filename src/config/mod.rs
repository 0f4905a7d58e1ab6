//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → GatewayConfig (validated, immutable)
//!     → injected into Dispatcher / HttpServer at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no runtime reload
//! - All fields have defaults so a minimal (or absent) config works
//! - Service URLs may be empty: the affected route answers "not
//!   configured" per request instead of failing startup, so the other
//!   routes keep serving

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{GatewayConfig, ListenerConfig, ObservabilityConfig, ServicesConfig, TimeoutConfig};
