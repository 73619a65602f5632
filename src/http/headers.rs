//! Response header parsing
//!
//! Rate-limit and access-level metadata travel in response headers rather
//! than in the JSON body.

use reqwest::header::HeaderMap;

use crate::types::{AccessLevel, RateLimitStatus};

const RATE_LIMIT_LIMIT: &str = "x-rate-limit-limit";
const RATE_LIMIT_REMAINING: &str = "x-rate-limit-remaining";
const RATE_LIMIT_RESET: &str = "x-rate-limit-reset";
const ACCESS_LEVEL: &str = "x-access-level";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::trim)
}

/// Rate-limit status advertised by the `X-Rate-Limit-*` headers.
///
/// All three headers must be present and numeric, otherwise `None`.
pub fn rate_limit_status(headers: &HeaderMap) -> Option<RateLimitStatus> {
    let limit = header_str(headers, RATE_LIMIT_LIMIT)?.parse().ok()?;
    let remaining = header_str(headers, RATE_LIMIT_REMAINING)?.parse().ok()?;
    let reset = header_str(headers, RATE_LIMIT_RESET)?.parse().ok()?;
    Some(RateLimitStatus::new(limit, remaining, reset))
}

/// Access level of the token used for the request (`X-Access-Level`).
pub fn access_level(headers: &HeaderMap) -> AccessLevel {
    header_str(headers, ACCESS_LEVEL)
        .map(AccessLevel::from_header)
        .unwrap_or(AccessLevel::None)
}
