//! # tweetkit - deferred response objects for a social-network REST API
//!
//! tweetkit models the response side of an API client. A response that has
//! already been received is wrapped in a lightweight proxy; the typed object
//! is only built the first time it is used, and is built at most once.
//!
#![deny(unsafe_code)]

//! ## Features
//!
//! - **Deferred building**: `LazyFactory::create_*` returns immediately without parsing.
//! - **Memoization**: the first access builds and caches; later accesses reuse the value.
//! - **Retry on failure**: a failed build is not cached, so a later access tries again.
//! - **Checked or unchecked access**: `try_get` returns a `Result`, `Deref` panics.
//! - **Response metadata**: rate-limit status and access level travel with every object.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tweetkit::prelude::*;
//!
//! # async fn run(response: reqwest::Response) -> Result<(), tweetkit::Error> {
//! let raw = RawResponse::from_reqwest(response).await?;
//! let factory = LazyFactory::with_config(FactoryConfig::from_env()?);
//!
//! // Nothing is parsed yet.
//! let timeline = factory.create_status_list(raw);
//!
//! // First use builds the list; iteration reuses it.
//! for status in &timeline {
//!     println!("{status}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod http;
pub mod lazy;
pub mod types;

pub use config::{FactoryConfig, FactoryConfigBuilder};
pub use error::{Error, MaterializationError, ParseErrorKind, ParseFailure, Result};
pub use factory::{JsonFactory, ObjectFactory};
pub use http::RawResponse;
pub use lazy::{Deferred, DeferredCursorList, DeferredList, DomainBuilder, LazyFactory, ObjectKind};

/// Commonly used items.
pub mod prelude {
    pub use crate::config::FactoryConfig;
    pub use crate::error::{Error, MaterializationError, ParseFailure};
    pub use crate::factory::{JsonFactory, ObjectFactory};
    pub use crate::http::RawResponse;
    pub use crate::lazy::{Deferred, DeferredCursorList, DeferredList, LazyFactory, ObjectKind};
    pub use crate::types::{CursorList, ResponseList, TwitterResponse};
}
