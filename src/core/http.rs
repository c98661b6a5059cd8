//! HTTP utilities for upstream API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

/// The upstream API rejects obvious bot user agents, so present as a browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Headers sent with every upstream request.
///
/// `user_agent` replaces the browser default when given.
pub fn default_headers(user_agent: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let ua = match user_agent.map(str::trim) {
        Some(ua) if !ua.is_empty() => HeaderValue::from_str(ua)?,
        _ => HeaderValue::from_static(BROWSER_USER_AGENT),
    };
    h.insert(USER_AGENT, ua);
    Ok(h)
}
