//! Type Conversions for the error types
//!
//! This module contains From trait implementations for converting
//! common error types into `ParseFailure` and `Error`.

use serde_json::error::Category;

use super::types::{Error, ParseErrorKind, ParseFailure};

impl From<serde_json::Error> for ParseFailure {
    fn from(err: serde_json::Error) -> Self {
        let kind = match err.classify() {
            Category::Data => ParseErrorKind::Shape,
            Category::Syntax | Category::Eof | Category::Io => ParseErrorKind::Syntax,
        };
        ParseFailure::new(kind, err.to_string())
    }
}

impl From<std::str::Utf8Error> for ParseFailure {
    fn from(err: std::str::Utf8Error) -> Self {
        ParseFailure::new(ParseErrorKind::Encoding, err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json_syntax_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let failure: ParseFailure = json_err.into();
        assert_eq!(failure.kind(), ParseErrorKind::Syntax);
    }

    #[test]
    fn test_from_serde_json_data_error() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Needs {
            id: i64,
        }
        let json_err = serde_json::from_str::<Needs>("{}").unwrap_err();
        let failure: ParseFailure = json_err.into();
        assert_eq!(failure.kind(), ParseErrorKind::Shape);
        assert!(failure.message().contains("missing field `id`"));
    }

    #[test]
    fn test_from_serde_json_error_into_crate_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
