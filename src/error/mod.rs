//! Error Handling Module
//!
//! This module provides the error types shared by the eager builders and the
//! deferred proxies:
//! - `ParseFailure`: structured, recoverable failure produced by a builder
//! - `MaterializationError`: a `ParseFailure` surfaced at first access of a proxy
//! - `Error`: crate-wide error enum used by the transport adapter and configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use tweetkit::error::{ParseErrorKind, ParseFailure};
//!
//! let failure = ParseFailure::new(ParseErrorKind::Shape, "missing field `id`");
//! assert_eq!(failure.kind(), ParseErrorKind::Shape);
//! ```

// Module declarations
mod conversions;
pub mod types;

// Re-exports for public API
pub use types::*;
