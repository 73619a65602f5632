//! Core error types.

use thiserror::Error;

use crate::lazy::ObjectKind;

/// Coarse category of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The body is not well-formed JSON.
    Syntax,
    /// The JSON is well-formed but does not have the expected shape
    /// (missing field, wrong type, bad date).
    Shape,
    /// The body is not valid UTF-8.
    Encoding,
}

impl ParseErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::Syntax => "syntax",
            ParseErrorKind::Shape => "shape",
            ParseErrorKind::Encoding => "encoding",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured failure produced by a builder when a raw response cannot be
/// turned into a domain object.
///
/// Carries the HTTP status of the response it was built from and, when the
/// body was readable, a bounded fragment of the offending payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} error: {message}{}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
pub struct ParseFailure {
    kind: ParseErrorKind,
    message: String,
    status: Option<u16>,
    fragment: Option<String>,
}

impl ParseFailure {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            fragment: None,
        }
    }

    /// Shorthand for a [`ParseErrorKind::Shape`] failure.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Shape, message)
    }

    /// Attach the HTTP status of the response being parsed.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach at most `limit` characters of the payload that failed to parse.
    pub fn with_payload(mut self, payload: &str, limit: usize) -> Self {
        if limit == 0 || payload.is_empty() {
            return self;
        }
        let fragment = match payload.char_indices().nth(limit) {
            Some((end, _)) => format!("{}...", &payload[..end]),
            None => payload.to_string(),
        };
        self.fragment = Some(fragment);
        self
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Fragment of the raw payload, truncated to the configured limit.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

/// A [`ParseFailure`] that surfaced while a deferred proxy was materializing.
///
/// The original failure is preserved as the error source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to materialize {kind}: {source}")]
pub struct MaterializationError {
    kind: ObjectKind,
    #[source]
    source: ParseFailure,
}

impl MaterializationError {
    pub fn new(kind: ObjectKind, source: ParseFailure) -> Self {
        Self { kind, source }
    }

    /// Domain type the proxy was trying to build.
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn cause(&self) -> &ParseFailure {
        &self.source
    }

    pub fn into_cause(self) -> ParseFailure {
        self.source
    }
}

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// An eager builder could not parse a response.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseFailure),

    /// A deferred proxy could not materialize.
    #[error("Materialization error: {0}")]
    Materialization(#[from] MaterializationError),

    /// The transport failed while buffering a response.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for tweetkit operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_fragment_is_truncated_on_char_boundary() {
        let failure = ParseFailure::shape("bad").with_payload("héllo world", 3);
        assert_eq!(failure.fragment(), Some("hél..."));

        let short = ParseFailure::shape("bad").with_payload("{}", 16);
        assert_eq!(short.fragment(), Some("{}"));

        let disabled = ParseFailure::shape("bad").with_payload("{}", 0);
        assert_eq!(disabled.fragment(), None);
    }

    #[test]
    fn display_includes_status_when_known() {
        let failure = ParseFailure::new(ParseErrorKind::Syntax, "expected value").with_status(200);
        assert_eq!(failure.to_string(), "syntax error: expected value (HTTP 200)");

        let bare = ParseFailure::shape("missing field `id`");
        assert_eq!(bare.to_string(), "shape error: missing field `id`");
    }

    #[test]
    fn materialization_error_keeps_original_cause() {
        use std::error::Error as _;

        let cause = ParseFailure::shape("missing field `id`").with_status(200);
        let err = MaterializationError::new(ObjectKind::Status, cause.clone());

        assert_eq!(err.kind(), ObjectKind::Status);
        assert_eq!(err.cause(), &cause);
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some(cause.to_string())
        );
        assert!(err.to_string().starts_with("failed to materialize status:"));
    }
}
