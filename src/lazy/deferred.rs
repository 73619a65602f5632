//! The generic deferred proxy.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::ObjectKind;
use crate::error::{MaterializationError, ParseFailure};
use crate::http::RawResponse;

/// Converts a raw response into one domain object.
///
/// Implementations must be pure: the same response always yields the same
/// result, and a failure leaves nothing behind.
pub trait DomainBuilder<T>: Send + Sync {
    fn build(&self, raw: &RawResponse) -> Result<T, ParseFailure>;
}

impl<T, F> DomainBuilder<T> for F
where
    F: Fn(&RawResponse) -> Result<T, ParseFailure> + Send + Sync,
{
    fn build(&self, raw: &RawResponse) -> Result<T, ParseFailure> {
        self(raw)
    }
}

/// A domain object that is built from its response on first use.
///
/// Creating a `Deferred` never reads the response. The first access runs the
/// builder and caches the value; every later access reuses it. A failed build
/// is not cached, so the next access tries again from scratch.
///
/// Access through `Deref`/`DerefMut` panics with the [`MaterializationError`]
/// message when the build fails; use [`try_get`](Self::try_get),
/// [`try_get_mut`](Self::try_get_mut) or [`into_inner`](Self::into_inner) to
/// handle the failure instead.
///
/// Concurrent first accesses through `&self` run the builder at most once
/// when it succeeds.
pub struct Deferred<T> {
    kind: ObjectKind,
    raw: Arc<RawResponse>,
    builder: Arc<dyn DomainBuilder<T>>,
    cell: OnceCell<T>,
}

impl<T> Deferred<T> {
    pub fn new(
        kind: ObjectKind,
        raw: impl Into<Arc<RawResponse>>,
        builder: Arc<dyn DomainBuilder<T>>,
    ) -> Self {
        tracing::trace!(%kind, "deferred proxy created");
        Self {
            kind,
            raw: raw.into(),
            builder,
            cell: OnceCell::new(),
        }
    }

    /// Proxy backed by a closure.
    pub fn from_fn<F>(kind: ObjectKind, raw: impl Into<Arc<RawResponse>>, build: F) -> Self
    where
        F: Fn(&RawResponse) -> Result<T, ParseFailure> + Send + Sync + 'static,
    {
        Self::new(kind, raw, Arc::new(build))
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn is_materialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Shared access, building the value if needed.
    pub fn try_get(&self) -> Result<&T, MaterializationError> {
        self.cell.get_or_try_init(|| self.materialize())
    }

    /// Exclusive access, building the value if needed.
    pub fn try_get_mut(&mut self) -> Result<&mut T, MaterializationError> {
        if self.cell.get().is_none() {
            let value = self.materialize()?;
            self.cell = OnceCell::with_value(value);
        }
        let kind = self.kind;
        self.cell.get_mut().ok_or_else(|| {
            MaterializationError::new(kind, ParseFailure::shape("built value was not stored"))
        })
    }

    /// Take the value out, building it if needed.
    pub fn into_inner(self) -> Result<T, MaterializationError> {
        let Deferred {
            kind,
            raw,
            builder,
            cell,
        } = self;
        match cell.into_inner() {
            Some(value) => Ok(value),
            None => run(kind, &raw, builder.as_ref()),
        }
    }

    fn materialize(&self) -> Result<T, MaterializationError> {
        run(self.kind, &self.raw, self.builder.as_ref())
    }
}

fn run<T>(
    kind: ObjectKind,
    raw: &RawResponse,
    builder: &dyn DomainBuilder<T>,
) -> Result<T, MaterializationError> {
    match builder.build(raw) {
        Ok(value) => {
            tracing::debug!(%kind, "materialized");
            Ok(value)
        }
        Err(cause) => {
            tracing::debug!(%kind, error = %cause, "materialization failed");
            Err(MaterializationError::new(kind, cause))
        }
    }
}

impl<T> Deref for Deferred<T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.try_get() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> DerefMut for Deferred<T> {
    fn deref_mut(&mut self) -> &mut T {
        match self.try_get_mut() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Clone> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            raw: Arc::clone(&self.raw),
            builder: Arc::clone(&self.builder),
            cell: self.cell.clone(),
        }
    }
}

/// Shows the kind and, only if already built, the value. Never builds.
impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("kind", &self.kind)
            .field("value", &self.cell.get())
            .finish()
    }
}

/// Formats the built value.
///
/// # Panics
/// If the value cannot be built, with the same message as `Deref`.
impl<T: fmt::Display> fmt::Display for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_get() {
            Ok(value) => value.fmt(f),
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: PartialEq> PartialEq for Deferred<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Deferred<T> {}

impl<T: PartialEq> PartialEq<T> for Deferred<T> {
    fn eq(&self, other: &T) -> bool {
        **self == *other
    }
}

impl<T: Hash> Hash for Deferred<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}
