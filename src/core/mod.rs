//! Core utilities shared across the dashboard
//!
//! - `cache`: snapshot file locations and small file helpers
//! - `http`: default request headers for the upstream API

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{snapshot_path, try_read_to_string, write_string};
pub use http::{default_headers, BROWSER_USER_AGENT};
