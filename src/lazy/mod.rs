//! Deferred materialization
//!
//! Proxies that hold a [`RawResponse`](crate::http::RawResponse) and build
//! the domain object from it the first time it is used.
//!
//! - [`Deferred`] - the generic proxy, one per response
//! - [`DeferredList`] / [`DeferredCursorList`] - sequence proxies
//! - [`LazyFactory`] - one `create_*` per response shape
//! - [`DomainBuilder`] - the build step a proxy runs

mod deferred;
mod factory;
mod kind;
mod list;

pub use deferred::{Deferred, DomainBuilder};
pub use factory::LazyFactory;
pub use kind::ObjectKind;
pub use list::{DeferredCursorList, DeferredList};
