//! Forwarded sub-path safety check.
//!
//! # Responsibilities
//! - Decide whether a remainder path is safe to hand to a backend
//! - Run before any network I/O; rejection short-circuits the request
//!
//! # Design Decisions
//! - Whitelist over blacklist: anything outside `[A-Za-z0-9/_.-]` is out
//! - `..` is rejected anywhere in the path, not just as a full segment
//! - Embedded URL schemes are rejected case-insensitively to close the
//!   open-redirect/SSRF hole of a backend that echoes its request path

/// URL scheme markers that must never appear inside a forwarded path.
const SCHEME_MARKERS: [&str; 3] = ["http://", "https://", "ftp://"];

/// Returns true if `path` is safe to forward to a backend.
///
/// A path is unsafe if it contains `..`, begins with `/`, contains an
/// absolute-URL scheme marker anywhere (case-insensitive), or contains a
/// character outside `[A-Za-z0-9/_.-]`. The empty path is safe: it
/// addresses the root of the backend resource.
pub fn is_safe(path: &str) -> bool {
    if path.contains("..") {
        return false;
    }
    if path.starts_with('/') {
        return false;
    }
    let lowered = path.to_ascii_lowercase();
    if SCHEME_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return false;
    }
    path.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '.' | '-'))
}
