//! Response metadata shared by every top-level response object.

use crate::http::{self, RawResponse};

use super::RateLimitStatus;

/// Permission level of the access token that made the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AccessLevel {
    /// Header missing or not recognized.
    #[default]
    None,
    Read,
    ReadWrite,
    ReadWriteDirectMessages,
}

impl AccessLevel {
    /// Map an `X-Access-Level` header value.
    pub fn from_header(value: &str) -> Self {
        match value {
            "read" => AccessLevel::Read,
            "read-write" => AccessLevel::ReadWrite,
            "read-write-directmessages" | "read-write-privatemessages" => {
                AccessLevel::ReadWriteDirectMessages
            }
            _ => AccessLevel::None,
        }
    }
}

/// Metadata read off the HTTP response an object was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseMeta {
    pub rate_limit_status: Option<RateLimitStatus>,
    pub access_level: AccessLevel,
    /// The parsed top-level document, kept only when the JSON store is enabled.
    pub raw_json: Option<serde_json::Value>,
}

impl ResponseMeta {
    pub fn from_response(res: &RawResponse) -> Self {
        Self {
            rate_limit_status: http::rate_limit_status(res.headers()),
            access_level: http::access_level(res.headers()),
            raw_json: None,
        }
    }

    pub fn with_raw_json(mut self, json: Option<serde_json::Value>) -> Self {
        self.raw_json = json;
        self
    }
}

/// Capabilities common to every object built from a whole response.
pub trait TwitterResponse {
    fn response_meta(&self) -> &ResponseMeta;

    /// Rate-limit status advertised with the response, if any.
    fn rate_limit_status(&self) -> Option<&RateLimitStatus> {
        self.response_meta().rate_limit_status.as_ref()
    }

    fn access_level(&self) -> AccessLevel {
        self.response_meta().access_level
    }

    /// Raw JSON document (JSON store must be enabled).
    fn raw_json(&self) -> Option<&serde_json::Value> {
        self.response_meta().raw_json.as_ref()
    }
}

/// Write access used by builders to attach metadata after deserialization.
pub(crate) trait AttachMeta {
    fn attach_meta(&mut self, meta: ResponseMeta);
}

/// Implements [`TwitterResponse`] and [`AttachMeta`] for types with a
/// `meta: ResponseMeta` field.
macro_rules! twitter_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::types::TwitterResponse for $ty {
                fn response_meta(&self) -> &$crate::types::ResponseMeta {
                    &self.meta
                }
            }

            impl $crate::types::meta::AttachMeta for $ty {
                fn attach_meta(&mut self, meta: $crate::types::ResponseMeta) {
                    self.meta = meta;
                }
            }
        )+
    };
}

pub(crate) use twitter_response;
