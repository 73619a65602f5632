//! `serde_json` implementation of [`ObjectFactory`].

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::ObjectFactory;
use crate::config::FactoryConfig;
use crate::error::ParseFailure;
use crate::http::RawResponse;
use crate::types::meta::AttachMeta;
use crate::types::{
    AccountSettings, AccountTotals, ApiConfiguration, Category, CursorList, DirectMessage,
    Friendship, IDs, IdsWire, Language, Location, OEmbed, Place, PlacesEnvelope, Query,
    QueryResult, QueryResultWire, RateLimitResources, RateLimitStatuses, RelatedResults,
    RelatedResultsWire, Relationship, RelationshipEnvelope, ResponseList, ResponseMeta,
    SavedSearch, SimilarPlaces, Status, Trends, TrendsEnvelope, TrendsHistory, User, UserList,
    wire,
};

/// Builds domain objects by deserializing the response body as JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonFactory {
    config: FactoryConfig,
}

/// `{"users": [...]}` / `{"lists": [...]}` with optional cursors.
#[derive(Deserialize)]
struct Cursored<T> {
    #[serde(alias = "users", alias = "lists")]
    items: Vec<T>,
    #[serde(default, deserialize_with = "wire::id_opt")]
    previous_cursor: Option<i64>,
    #[serde(default, deserialize_with = "wire::id_opt")]
    next_cursor: Option<i64>,
}

impl JsonFactory {
    pub fn new(config: FactoryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Deserialize the body as `W`, convert it, and attach response metadata.
    fn build<W, T, F>(&self, raw: &RawResponse, what: &str, convert: F) -> Result<T, ParseFailure>
    where
        W: DeserializeOwned,
        T: AttachMeta,
        F: FnOnce(W) -> Result<T, ParseFailure>,
    {
        let limit = self.config.fragment_limit;
        let value = raw.json_value(limit)?;
        let annotate = |e: ParseFailure| {
            e.with_status(raw.status().as_u16())
                .with_payload(&String::from_utf8_lossy(raw.body()), limit)
        };
        let wire = W::deserialize(&value).map_err(|e| annotate(e.into()))?;
        let mut built = convert(wire).map_err(annotate)?;

        let stored = self.config.json_store_enabled.then_some(value);
        built.attach_meta(ResponseMeta::from_response(raw).with_raw_json(stored));
        tracing::trace!(shape = what, status = raw.status().as_u16(), "parsed response");
        Ok(built)
    }

    /// Deserialize an already-parsed object. Only the JSON store applies;
    /// there is no response to read metadata from.
    fn from_value<T>(&self, json: serde_json::Value, what: &str) -> Result<T, ParseFailure>
    where
        T: DeserializeOwned + AttachMeta,
    {
        let mut built = T::deserialize(&json).map_err(|e| {
            ParseFailure::from(e).with_payload(&json.to_string(), self.config.fragment_limit)
        })?;
        if self.config.json_store_enabled {
            built.attach_meta(ResponseMeta::default().with_raw_json(Some(json)));
        }
        tracing::trace!(shape = what, "parsed embedded object");
        Ok(built)
    }

    fn build_direct<T>(&self, raw: &RawResponse, what: &str) -> Result<T, ParseFailure>
    where
        T: DeserializeOwned + AttachMeta,
    {
        self.build(raw, what, |t: T| Ok(t))
    }

    fn build_list<T>(&self, raw: &RawResponse, what: &str) -> Result<ResponseList<T>, ParseFailure>
    where
        T: DeserializeOwned,
    {
        self.build(raw, what, |items: Vec<T>| Ok(ResponseList::new(items)))
    }

    fn build_cursored<T>(&self, raw: &RawResponse, what: &str) -> Result<CursorList<T>, ParseFailure>
    where
        T: DeserializeOwned,
    {
        self.build(raw, what, |page: Cursored<T>| {
            Ok(CursorList::new(
                page.items,
                page.previous_cursor.unwrap_or_default(),
                page.next_cursor.unwrap_or_default(),
            ))
        })
    }
}

impl ObjectFactory for JsonFactory {
    fn create_status(&self, raw: &RawResponse) -> Result<Status, ParseFailure> {
        self.build_direct(raw, "status")
    }

    fn create_status_list(&self, raw: &RawResponse) -> Result<ResponseList<Status>, ParseFailure> {
        self.build_list(raw, "statuses")
    }

    fn create_user(&self, raw: &RawResponse) -> Result<User, ParseFailure> {
        self.build_direct(raw, "user")
    }

    fn create_users(&self, raw: &RawResponse) -> Result<ResponseList<User>, ParseFailure> {
        self.build_list(raw, "users")
    }

    fn create_users_from_object(
        &self,
        raw: &RawResponse,
    ) -> Result<ResponseList<User>, ParseFailure> {
        self.build(raw, "users", |page: Cursored<User>| {
            Ok(ResponseList::new(page.items))
        })
    }

    fn create_pagable_users(&self, raw: &RawResponse) -> Result<CursorList<User>, ParseFailure> {
        self.build_cursored(raw, "pagable users")
    }

    fn create_user_list(&self, raw: &RawResponse) -> Result<UserList, ParseFailure> {
        self.build_direct(raw, "user list")
    }

    fn create_user_lists(
        &self,
        raw: &RawResponse,
    ) -> Result<ResponseList<UserList>, ParseFailure> {
        self.build_list(raw, "user lists")
    }

    fn create_pagable_user_lists(
        &self,
        raw: &RawResponse,
    ) -> Result<CursorList<UserList>, ParseFailure> {
        self.build_cursored(raw, "pagable user lists")
    }

    fn create_direct_message(&self, raw: &RawResponse) -> Result<DirectMessage, ParseFailure> {
        self.build_direct(raw, "direct message")
    }

    fn create_direct_messages(
        &self,
        raw: &RawResponse,
    ) -> Result<ResponseList<DirectMessage>, ParseFailure> {
        self.build_list(raw, "direct messages")
    }

    fn create_relationship(&self, raw: &RawResponse) -> Result<Relationship, ParseFailure> {
        self.build(raw, "relationship", |w: RelationshipEnvelope| Ok(w.into()))
    }

    fn create_friendships(
        &self,
        raw: &RawResponse,
    ) -> Result<ResponseList<Friendship>, ParseFailure> {
        self.build_list(raw, "friendships")
    }

    fn create_trends(&self, raw: &RawResponse) -> Result<Trends, ParseFailure> {
        self.build(raw, "trends", |w: TrendsEnvelope| {
            w.into_trends()
                .ok_or_else(|| ParseFailure::shape("trends array is empty"))
        })
    }

    fn create_trends_list(&self, raw: &RawResponse) -> Result<ResponseList<Trends>, ParseFailure> {
        self.build(raw, "trends list", |w: TrendsHistory| Ok(w.into_trends_list()))
    }

    fn create_locations(&self, raw: &RawResponse) -> Result<ResponseList<Location>, ParseFailure> {
        self.build_list(raw, "locations")
    }

    fn create_ids(&self, raw: &RawResponse) -> Result<IDs, ParseFailure> {
        self.build(raw, "ids", |w: IdsWire| Ok(w.into()))
    }

    fn create_query_result(
        &self,
        raw: &RawResponse,
        query: &Query,
    ) -> Result<QueryResult, ParseFailure> {
        self.build(raw, "query result", |w: QueryResultWire| {
            Ok(w.into_result(query.clone()))
        })
    }

    fn create_saved_search(&self, raw: &RawResponse) -> Result<SavedSearch, ParseFailure> {
        self.build_direct(raw, "saved search")
    }

    fn create_saved_searches(
        &self,
        raw: &RawResponse,
    ) -> Result<ResponseList<SavedSearch>, ParseFailure> {
        self.build_list(raw, "saved searches")
    }

    fn create_rate_limit_statuses(
        &self,
        raw: &RawResponse,
    ) -> Result<RateLimitStatuses, ParseFailure> {
        self.build(raw, "rate limit statuses", |w: RateLimitResources| Ok(w.into()))
    }

    fn create_account_totals(&self, raw: &RawResponse) -> Result<AccountTotals, ParseFailure> {
        self.build_direct(raw, "account totals")
    }

    fn create_account_settings(
        &self,
        raw: &RawResponse,
    ) -> Result<AccountSettings, ParseFailure> {
        self.build_direct(raw, "account settings")
    }

    fn create_place(&self, raw: &RawResponse) -> Result<Place, ParseFailure> {
        self.build_direct(raw, "place")
    }

    fn create_places(&self, raw: &RawResponse) -> Result<ResponseList<Place>, ParseFailure> {
        self.build(raw, "places", |w: PlacesEnvelope| {
            Ok(ResponseList::new(w.into_places()))
        })
    }

    fn create_similar_places(&self, raw: &RawResponse) -> Result<SimilarPlaces, ParseFailure> {
        self.build(raw, "similar places", |w: PlacesEnvelope| Ok(w.into_similar()))
    }

    fn create_categories(&self, raw: &RawResponse) -> Result<ResponseList<Category>, ParseFailure> {
        self.build_list(raw, "categories")
    }

    fn create_languages(&self, raw: &RawResponse) -> Result<ResponseList<Language>, ParseFailure> {
        self.build_list(raw, "languages")
    }

    fn create_api_configuration(
        &self,
        raw: &RawResponse,
    ) -> Result<ApiConfiguration, ParseFailure> {
        self.build_direct(raw, "api configuration")
    }

    fn create_oembed(&self, raw: &RawResponse) -> Result<OEmbed, ParseFailure> {
        self.build_direct(raw, "oembed")
    }

    fn create_related_results(&self, raw: &RawResponse) -> Result<RelatedResults, ParseFailure> {
        self.build(raw, "related results", RelatedResultsWire::into_related)
    }

    fn status_from_value(&self, json: serde_json::Value) -> Result<Status, ParseFailure> {
        self.from_value(json, "status")
    }

    fn user_from_value(&self, json: serde_json::Value) -> Result<User, ParseFailure> {
        self.from_value(json, "user")
    }

    fn user_list_from_value(&self, json: serde_json::Value) -> Result<UserList, ParseFailure> {
        self.from_value(json, "user list")
    }

    fn direct_message_from_value(
        &self,
        json: serde_json::Value,
    ) -> Result<DirectMessage, ParseFailure> {
        self.from_value(json, "direct message")
    }
}
