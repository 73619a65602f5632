//! Sequence specializations of [`Deferred`].
//!
//! The full sequence API of [`ResponseList`] is reached through `Deref`, so
//! every call builds the list first and then delegates to it.

use super::Deferred;
use crate::error::MaterializationError;
use crate::types::{AccessLevel, CursorList, RateLimitStatus, ResponseList, ResponseMeta, TwitterResponse};

pub type DeferredList<T> = Deferred<ResponseList<T>>;

pub type DeferredCursorList<T> = Deferred<CursorList<T>>;

/// Metadata is read from the built value.
///
/// # Panics
/// If the value cannot be built; see [`Deferred::try_get`].
impl<T: TwitterResponse> TwitterResponse for Deferred<T> {
    fn response_meta(&self) -> &ResponseMeta {
        (**self).response_meta()
    }
}

/// Checked metadata access: the build failure is returned instead of
/// panicking.
impl<T: TwitterResponse> Deferred<T> {
    pub fn try_response_meta(&self) -> Result<&ResponseMeta, MaterializationError> {
        Ok(self.try_get()?.response_meta())
    }

    /// Rate-limit status of the response, or the build failure.
    pub fn try_rate_limit_status(&self) -> Result<Option<&RateLimitStatus>, MaterializationError> {
        Ok(self.try_response_meta()?.rate_limit_status.as_ref())
    }

    pub fn try_access_level(&self) -> Result<AccessLevel, MaterializationError> {
        Ok(self.try_response_meta()?.access_level)
    }
}

impl<'a, T> IntoIterator for &'a Deferred<ResponseList<T>> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        (**self).iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deferred<ResponseList<T>> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        (**self).iter_mut()
    }
}

impl<T> Extend<T> for Deferred<ResponseList<T>> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        (**self).extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseFailure;
    use crate::http::{RawResponse, StatusCode};
    use crate::lazy::ObjectKind;
    use crate::types::{AccessLevel, User};

    fn digits(raw: &RawResponse) -> Result<ResponseList<u32>, ParseFailure> {
        let text = raw.text()?;
        text.chars()
            .map(|c| {
                c.to_digit(10)
                    .ok_or_else(|| ParseFailure::shape(format!("not a digit: {c}")))
            })
            .collect()
    }

    fn proxy(body: &'static str) -> DeferredList<u32> {
        let raw = RawResponse::builder()
            .header("x-access-level", "read")
            .unwrap()
            .body(body)
            .build();
        Deferred::from_fn(ObjectKind::Custom("digits"), raw, |raw: &RawResponse| {
            let mut list = digits(raw)?;
            crate::types::meta::AttachMeta::attach_meta(&mut list, ResponseMeta::from_response(raw));
            Ok(list)
        })
    }

    #[test]
    fn iterates_and_extends_through_proxy() {
        let mut list = proxy("123");
        let collected: Vec<u32> = (&list).into_iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);

        for item in &mut list {
            *item *= 10;
        }
        list.extend([40]);
        assert_eq!(list.to_vec(), vec![10, 20, 30, 40]);
    }

    #[test]
    fn metadata_comes_from_built_list() {
        let list = proxy("7");
        assert!(!list.is_materialized());
        assert_eq!(list.access_level(), AccessLevel::Read);
        assert!(list.try_rate_limit_status().unwrap().is_none());
        assert!(list.is_materialized());
    }

    #[test]
    fn metadata_reports_build_failure() {
        let list = proxy("x");
        let err = list.try_rate_limit_status().unwrap_err();
        assert_eq!(err.kind(), ObjectKind::Custom("digits"));
        assert!(list.try_access_level().is_err());
    }

    #[test]
    fn checked_metadata_on_single_objects_and_pages() {
        let factory = crate::lazy::LazyFactory::default();
        let raw = RawResponse::builder()
            .header("x-access-level", "read-write")
            .unwrap()
            .header("x-rate-limit-remaining", "4")
            .unwrap()
            .header("x-rate-limit-limit", "15")
            .unwrap()
            .header("x-rate-limit-reset", "1700000000")
            .unwrap()
            .body(r#"{"users": [{"id": 1, "screen_name": "a"}], "next_cursor": 0}"#)
            .build();
        let page = factory.create_pagable_users(raw);
        assert_eq!(page.try_access_level().unwrap(), AccessLevel::ReadWrite);
        assert_eq!(page.try_rate_limit_status().unwrap().map(|r| r.remaining), Some(4));

        let broken: Deferred<User> =
            factory.create_user(RawResponse::from_body(StatusCode::OK, "[]"));
        assert_eq!(broken.try_access_level().unwrap_err().kind(), ObjectKind::User);
        assert!(broken.try_rate_limit_status().is_err());
    }
}
