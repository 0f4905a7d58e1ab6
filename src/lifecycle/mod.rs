//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging/metrics → Build server → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C / trigger → broadcast → serve loop drains → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast at startup: config and route-table errors are fatal
//! - Shutdown is cooperative: the serve loop stops accepting and drains

pub mod shutdown;

pub use shutdown::Shutdown;
