//! Raw HTTP responses
//!
//! The transport hands this crate fully buffered responses. Nothing here
//! performs requests; [`RawResponse::from_reqwest`] only drains a response the
//! caller already received.

mod headers;
mod response;

pub use headers::{access_level, rate_limit_status};
pub use response::{RawResponse, RawResponseBuilder};

pub use reqwest::StatusCode;
pub use reqwest::header::HeaderMap;
