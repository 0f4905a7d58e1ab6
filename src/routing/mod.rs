//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming path (after the /api/ mount)
//!     → table.rs (longest-prefix lookup)
//!     → Return: matched Route + remainder path, or explicit no-match
//!
//! Table construction (at startup):
//!     ServicesConfig
//!     → Register one prefix per service (plus the plural product alias)
//!     → Reject overlapping prefixes (fail fast)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built at startup, immutable at runtime (shared without locks)
//! - Longest-literal-prefix match, case-sensitive, no regex
//! - Prefix disjointness enforced at construction, so matching is
//!   order-independent and deterministic
//! - Explicit no-match rather than silent default

pub mod table;

pub use table::{Resolved, Route, RouteTable};
