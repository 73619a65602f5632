use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{Error, ParseFailure};

/// An already-received HTTP response held in memory.
///
/// Immutable once built; deferred proxies share it through an `Arc` and only
/// ever read from it.
#[derive(Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl std::fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}

impl RawResponse {
    /// Create a new response from components
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Create a response with no headers
    pub fn from_body(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self::new(status, HeaderMap::new(), body)
    }

    pub fn builder() -> RawResponseBuilder {
        RawResponseBuilder::default()
    }

    /// Buffer a `reqwest` response into memory.
    ///
    /// The status is not checked: deciding whether a non-success response is
    /// an error belongs to the transport.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, Error> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        tracing::trace!(status = status.as_u16(), body_len = body.len(), "buffered response");
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Get the HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Value of a header, if present and valid visible ASCII
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get the raw body bytes
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body as UTF-8 text
    pub fn text(&self) -> Result<&str, ParseFailure> {
        std::str::from_utf8(&self.body)
            .map_err(|e| ParseFailure::from(e).with_status(self.status.as_u16()))
    }

    /// Parse the body as a JSON document.
    ///
    /// On failure the returned error carries the HTTP status and at most
    /// `fragment_limit` characters of the body.
    pub fn json_value(&self, fragment_limit: usize) -> Result<serde_json::Value, ParseFailure> {
        let text = self.text()?;
        serde_json::from_str(text).map_err(|e| {
            ParseFailure::from(e)
                .with_status(self.status.as_u16())
                .with_payload(text, fragment_limit)
        })
    }
}

/// Builder for constructing in-memory responses with a fluent API
#[derive(Debug, Default)]
pub struct RawResponseBuilder {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Bytes,
}

impl RawResponseBuilder {
    /// Set the HTTP status (defaults to 200)
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Add a header
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, Error> {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::Config(format!("Invalid header name '{name}': {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| Error::Config(format!("Invalid header value '{value}': {e}")))?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Set the response body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> RawResponse {
        RawResponse {
            status: self.status.unwrap_or(StatusCode::OK),
            headers: self.headers,
            body: self.body,
        }
    }
}
