use std::sync::Arc;

use super::{Deferred, DeferredCursorList, DeferredList, ObjectKind};
use crate::config::FactoryConfig;
use crate::error::ParseFailure;
use crate::factory::{JsonFactory, ObjectFactory};
use crate::http::RawResponse;
use crate::types::{
    AccountSettings, AccountTotals, ApiConfiguration, Category, DirectMessage, Friendship, IDs,
    Language, Location, OEmbed, Place, Query, QueryResult, RateLimitStatuses, RelatedResults,
    Relationship, ResponseList, SavedSearch, SimilarPlaces, Status, Trends, User, UserList,
};

/// Creates deferred proxies that build through an [`ObjectFactory`].
///
/// Every `create_*` call is cheap: it only pairs the response with the
/// matching builder. Nothing is parsed until the returned proxy is used, and
/// two calls always yield two independent proxies.
#[derive(Clone)]
pub struct LazyFactory {
    factory: Arc<dyn ObjectFactory>,
}

impl std::fmt::Debug for LazyFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyFactory").finish_non_exhaustive()
    }
}

impl Default for LazyFactory {
    fn default() -> Self {
        Self::new(JsonFactory::default())
    }
}

macro_rules! deferred_creators {
    ($($(#[$doc:meta])* $name:ident => $kind:ident : $out:ty;)+) => {
        $(
            $(#[$doc])*
            pub fn $name(&self, raw: impl Into<Arc<RawResponse>>) -> $out {
                let factory = Arc::clone(&self.factory);
                Deferred::from_fn(ObjectKind::$kind, raw, move |raw: &RawResponse| {
                    factory.$name(raw)
                })
            }
        )+
    };
}

impl LazyFactory {
    pub fn new(factory: impl ObjectFactory + 'static) -> Self {
        Self {
            factory: Arc::new(factory),
        }
    }

    /// Share an existing builder.
    pub fn from_shared(factory: Arc<dyn ObjectFactory>) -> Self {
        Self { factory }
    }

    /// Lazy factory over a [`JsonFactory`] with `config`.
    pub fn with_config(config: FactoryConfig) -> Self {
        Self::new(JsonFactory::new(config))
    }

    /// The eager builder behind this factory.
    pub fn object_factory(&self) -> &Arc<dyn ObjectFactory> {
        &self.factory
    }

    deferred_creators! {
        create_status => Status: Deferred<Status>;
        create_status_list => Statuses: DeferredList<Status>;
        create_user => User: Deferred<User>;
        /// Users from a top-level JSON array.
        create_users => Users: DeferredList<User>;
        /// Users from the `users` field of a JSON object.
        create_users_from_object => Users: DeferredList<User>;
        create_pagable_users => PagableUsers: DeferredCursorList<User>;
        create_user_list => UserList: Deferred<UserList>;
        create_user_lists => UserLists: DeferredList<UserList>;
        create_pagable_user_lists => PagableUserLists: DeferredCursorList<UserList>;
        create_direct_message => DirectMessage: Deferred<DirectMessage>;
        create_direct_messages => DirectMessages: DeferredList<DirectMessage>;
        create_relationship => Relationship: Deferred<Relationship>;
        create_friendships => Friendships: DeferredList<Friendship>;
        create_trends => Trends: Deferred<Trends>;
        /// Trends per time slot, oldest first.
        create_trends_list => TrendsList: DeferredList<Trends>;
        create_locations => Locations: DeferredList<Location>;
        create_ids => Ids: Deferred<IDs>;
        create_saved_search => SavedSearch: Deferred<SavedSearch>;
        create_saved_searches => SavedSearches: DeferredList<SavedSearch>;
        create_rate_limit_statuses => RateLimitStatuses: Deferred<RateLimitStatuses>;
        create_account_totals => AccountTotals: Deferred<AccountTotals>;
        create_account_settings => AccountSettings: Deferred<AccountSettings>;
        create_place => Place: Deferred<Place>;
        create_places => Places: DeferredList<Place>;
        create_similar_places => SimilarPlaces: Deferred<SimilarPlaces>;
        create_categories => Categories: DeferredList<Category>;
        create_languages => Languages: DeferredList<Language>;
        create_api_configuration => ApiConfiguration: Deferred<ApiConfiguration>;
        create_oembed => OEmbed: Deferred<OEmbed>;
        create_related_results => RelatedResults: Deferred<RelatedResults>;
    }

    /// Search results; the proxy keeps its own copy of `query`.
    pub fn create_query_result(
        &self,
        raw: impl Into<Arc<RawResponse>>,
        query: Query,
    ) -> Deferred<QueryResult> {
        let factory = Arc::clone(&self.factory);
        Deferred::from_fn(ObjectKind::QueryResult, raw, move |raw: &RawResponse| {
            factory.create_query_result(raw, &query)
        })
    }

    /// An empty list with no response behind it. Built eagerly.
    pub fn create_empty_list<T>(&self) -> ResponseList<T> {
        ResponseList::empty()
    }

    /// Status from an embedded JSON object. The object is already parsed,
    /// so this builds eagerly.
    pub fn status_from_value(&self, json: serde_json::Value) -> Result<Status, ParseFailure> {
        self.factory.status_from_value(json)
    }

    pub fn user_from_value(&self, json: serde_json::Value) -> Result<User, ParseFailure> {
        self.factory.user_from_value(json)
    }

    pub fn user_list_from_value(&self, json: serde_json::Value) -> Result<UserList, ParseFailure> {
        self.factory.user_list_from_value(json)
    }

    pub fn direct_message_from_value(
        &self,
        json: serde_json::Value,
    ) -> Result<DirectMessage, ParseFailure> {
        self.factory.direct_message_from_value(json)
    }
}

static_assertions::assert_impl_all!(LazyFactory: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Delegates to `JsonFactory` and counts status builds.
    #[derive(Default)]
    struct CountingStatuses {
        json: JsonFactory,
        builds: AtomicUsize,
    }

    macro_rules! delegate {
        ($($name:ident -> $out:ty;)+) => {
            $(
                fn $name(&self, raw: &RawResponse) -> Result<$out, ParseFailure> {
                    self.json.$name(raw)
                }
            )+
        };
    }

    impl ObjectFactory for CountingStatuses {
        fn create_status(&self, raw: &RawResponse) -> Result<Status, ParseFailure> {
            self.builds.fetch_add(1, Ordering::SeqCst);
            self.json.create_status(raw)
        }

        fn create_query_result(
            &self,
            raw: &RawResponse,
            query: &Query,
        ) -> Result<QueryResult, ParseFailure> {
            self.json.create_query_result(raw, query)
        }

        delegate! {
            create_status_list -> ResponseList<Status>;
            create_user -> User;
            create_users -> ResponseList<User>;
            create_users_from_object -> ResponseList<User>;
            create_pagable_users -> crate::types::CursorList<User>;
            create_user_list -> UserList;
            create_user_lists -> ResponseList<UserList>;
            create_pagable_user_lists -> crate::types::CursorList<UserList>;
            create_direct_message -> DirectMessage;
            create_direct_messages -> ResponseList<DirectMessage>;
            create_relationship -> Relationship;
            create_friendships -> ResponseList<Friendship>;
            create_trends -> Trends;
            create_trends_list -> ResponseList<Trends>;
            create_locations -> ResponseList<Location>;
            create_ids -> IDs;
            create_saved_search -> SavedSearch;
            create_saved_searches -> ResponseList<SavedSearch>;
            create_rate_limit_statuses -> RateLimitStatuses;
            create_account_totals -> AccountTotals;
            create_account_settings -> AccountSettings;
            create_place -> Place;
            create_places -> ResponseList<Place>;
            create_similar_places -> SimilarPlaces;
            create_categories -> ResponseList<Category>;
            create_languages -> ResponseList<Language>;
            create_api_configuration -> ApiConfiguration;
            create_oembed -> OEmbed;
            create_related_results -> RelatedResults;
        }
    }

    #[test]
    fn proxies_share_the_builder_not_the_value() {
        let counting = Arc::new(CountingStatuses::default());
        let factory = LazyFactory::from_shared(counting.clone());
        let raw = Arc::new(RawResponse::from_body(StatusCode::OK, r#"{"id": 5, "text": "t"}"#));

        let first = factory.create_status(Arc::clone(&raw));
        let second = factory.create_status(raw);
        assert_eq!(counting.builds.load(Ordering::SeqCst), 0);

        assert_eq!(first.id, 5);
        assert_eq!(second.id, 5);
        assert_eq!(first.id, 5);
        assert_eq!(counting.builds.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn kinds_follow_the_creator() {
        let factory = LazyFactory::default();
        let raw = || RawResponse::from_body(StatusCode::OK, "[]");
        assert_eq!(factory.create_status_list(raw()).kind(), ObjectKind::Statuses);
        assert_eq!(factory.create_pagable_users(raw()).kind(), ObjectKind::PagableUsers);
        assert_eq!(factory.create_trends_list(raw()).kind(), ObjectKind::TrendsList);
        assert_eq!(factory.create_related_results(raw()).kind(), ObjectKind::RelatedResults);
        assert_eq!(
            factory.create_query_result(raw(), Query::new("q")).kind(),
            ObjectKind::QueryResult
        );
    }

    #[test]
    fn query_result_keeps_the_query() {
        let factory = LazyFactory::default();
        let raw = RawResponse::from_body(
            StatusCode::OK,
            r#"{"statuses": [], "search_metadata": {"count": 15, "completed_in": 0.01}}"#,
        );
        let result = factory.create_query_result(raw, Query::new("rust").count(15));
        assert_eq!(result.query.query, "rust");
        assert_eq!(result.count, 15);
        assert!(!result.has_next());
    }

    #[test]
    fn embedded_objects_go_through_the_shared_builder() {
        let factory = LazyFactory::default();
        let status = factory
            .status_from_value(serde_json::json!({"id": 8, "text": "inline"}))
            .unwrap();
        assert_eq!(status.text, "inline");
        let dm = factory
            .direct_message_from_value(serde_json::json!({
                "id": 1, "text": "hey", "sender_id": 2, "recipient_id": 3
            }))
            .unwrap();
        assert_eq!(dm.recipient_id, 3);
    }

    #[test]
    fn empty_list_is_eager() {
        let list: ResponseList<Status> = LazyFactory::default().create_empty_list();
        assert!(list.is_empty());
    }
}
