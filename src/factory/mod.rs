//! Eager response builders
//!
//! An [`ObjectFactory`] turns a [`RawResponse`] into a domain object right
//! away. [`LazyFactory`](crate::lazy::LazyFactory) wraps one to defer that
//! work until the object is first used.

mod json;

pub use json::JsonFactory;

use crate::error::ParseFailure;
use crate::http::RawResponse;
use crate::types::{
    AccountSettings, AccountTotals, ApiConfiguration, Category, CursorList, DirectMessage,
    Friendship, IDs, Language, Location, OEmbed, Place, Query, QueryResult, RateLimitStatuses,
    RelatedResults, Relationship, ResponseList, SavedSearch, SimilarPlaces, Status, Trends, User,
    UserList,
};

/// Build domain objects from raw responses, one method per response shape.
pub trait ObjectFactory: Send + Sync {
    fn create_status(&self, raw: &RawResponse) -> Result<Status, ParseFailure>;

    fn create_status_list(&self, raw: &RawResponse) -> Result<ResponseList<Status>, ParseFailure>;

    fn create_user(&self, raw: &RawResponse) -> Result<User, ParseFailure>;

    /// Users from a top-level JSON array.
    fn create_users(&self, raw: &RawResponse) -> Result<ResponseList<User>, ParseFailure>;

    /// Users from the `users` field of a JSON object.
    fn create_users_from_object(
        &self,
        raw: &RawResponse,
    ) -> Result<ResponseList<User>, ParseFailure>;

    fn create_pagable_users(&self, raw: &RawResponse) -> Result<CursorList<User>, ParseFailure>;

    fn create_user_list(&self, raw: &RawResponse) -> Result<UserList, ParseFailure>;

    fn create_user_lists(&self, raw: &RawResponse)
    -> Result<ResponseList<UserList>, ParseFailure>;

    fn create_pagable_user_lists(
        &self,
        raw: &RawResponse,
    ) -> Result<CursorList<UserList>, ParseFailure>;

    fn create_direct_message(&self, raw: &RawResponse) -> Result<DirectMessage, ParseFailure>;

    fn create_direct_messages(
        &self,
        raw: &RawResponse,
    ) -> Result<ResponseList<DirectMessage>, ParseFailure>;

    fn create_relationship(&self, raw: &RawResponse) -> Result<Relationship, ParseFailure>;

    fn create_friendships(
        &self,
        raw: &RawResponse,
    ) -> Result<ResponseList<Friendship>, ParseFailure>;

    fn create_trends(&self, raw: &RawResponse) -> Result<Trends, ParseFailure>;

    /// Trends per time slot (daily and weekly endpoints), oldest first.
    fn create_trends_list(&self, raw: &RawResponse) -> Result<ResponseList<Trends>, ParseFailure>;

    fn create_locations(&self, raw: &RawResponse) -> Result<ResponseList<Location>, ParseFailure>;

    fn create_ids(&self, raw: &RawResponse) -> Result<IDs, ParseFailure>;

    /// Search results; `query` is kept on the result for paging.
    fn create_query_result(
        &self,
        raw: &RawResponse,
        query: &Query,
    ) -> Result<QueryResult, ParseFailure>;

    fn create_saved_search(&self, raw: &RawResponse) -> Result<SavedSearch, ParseFailure>;

    fn create_saved_searches(
        &self,
        raw: &RawResponse,
    ) -> Result<ResponseList<SavedSearch>, ParseFailure>;

    fn create_rate_limit_statuses(
        &self,
        raw: &RawResponse,
    ) -> Result<RateLimitStatuses, ParseFailure>;

    fn create_account_totals(&self, raw: &RawResponse) -> Result<AccountTotals, ParseFailure>;

    fn create_account_settings(&self, raw: &RawResponse)
    -> Result<AccountSettings, ParseFailure>;

    fn create_place(&self, raw: &RawResponse) -> Result<Place, ParseFailure>;

    fn create_places(&self, raw: &RawResponse) -> Result<ResponseList<Place>, ParseFailure>;

    fn create_similar_places(&self, raw: &RawResponse) -> Result<SimilarPlaces, ParseFailure>;

    fn create_categories(&self, raw: &RawResponse) -> Result<ResponseList<Category>, ParseFailure>;

    fn create_languages(&self, raw: &RawResponse) -> Result<ResponseList<Language>, ParseFailure>;

    fn create_api_configuration(&self, raw: &RawResponse)
    -> Result<ApiConfiguration, ParseFailure>;

    fn create_oembed(&self, raw: &RawResponse) -> Result<OEmbed, ParseFailure>;

    fn create_related_results(&self, raw: &RawResponse) -> Result<RelatedResults, ParseFailure>;

    /// Status from an already-parsed JSON object, e.g. one embedded in a
    /// streaming message. Carries no response metadata.
    fn status_from_value(&self, json: serde_json::Value) -> Result<Status, ParseFailure> {
        Ok(serde_json::from_value(json)?)
    }

    fn user_from_value(&self, json: serde_json::Value) -> Result<User, ParseFailure> {
        Ok(serde_json::from_value(json)?)
    }

    fn user_list_from_value(&self, json: serde_json::Value) -> Result<UserList, ParseFailure> {
        Ok(serde_json::from_value(json)?)
    }

    fn direct_message_from_value(
        &self,
        json: serde_json::Value,
    ) -> Result<DirectMessage, ParseFailure> {
        Ok(serde_json::from_value(json)?)
    }
}
