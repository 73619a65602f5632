//! Search queries and their results.

use serde::Deserialize;

use super::meta::twitter_response;
use super::{ResponseMeta, Status, wire};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultType {
    Mixed,
    Recent,
    Popular,
}

impl ResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Mixed => "mixed",
            ResultType::Recent => "recent",
            ResultType::Popular => "popular",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "mixed" => Some(ResultType::Mixed),
            "recent" => Some(ResultType::Recent),
            "popular" => Some(ResultType::Popular),
            _ => None,
        }
    }
}

/// A search request. Kept alongside its result so the next page can be
/// requested with the same parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query {
    pub query: String,
    pub lang: Option<String>,
    pub locale: Option<String>,
    pub result_type: Option<ResultType>,
    pub count: Option<u32>,
    pub since_id: Option<i64>,
    pub max_id: Option<i64>,
    /// `YYYY-MM-DD`
    pub until: Option<String>,
    /// `latitude,longitude,radius`
    pub geocode: Option<String>,
}

impl Query {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn result_type(mut self, result_type: ResultType) -> Self {
        self.result_type = Some(result_type);
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn since_id(mut self, since_id: i64) -> Self {
        self.since_id = Some(since_id);
        self
    }

    pub fn max_id(mut self, max_id: i64) -> Self {
        self.max_id = Some(max_id);
        self
    }

    /// Apply a `?key=value&...` query string on top of this query.
    ///
    /// Unknown keys are ignored and values that fail to parse leave the
    /// field unchanged.
    fn apply_query_string(&mut self, raw: &str) {
        for pair in raw.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let value = value.replace('+', " ");
            let Ok(value) = urlencoding::decode(&value) else {
                continue;
            };
            let value = value.into_owned();
            match key {
                "q" => self.query = value,
                "lang" => self.lang = Some(value),
                "locale" => self.locale = Some(value),
                "until" => self.until = Some(value),
                "geocode" => self.geocode = Some(value),
                "result_type" => {
                    if let Some(rt) = ResultType::parse(&value) {
                        self.result_type = Some(rt);
                    }
                }
                "count" => {
                    if let Ok(count) = value.parse() {
                        self.count = Some(count);
                    }
                }
                "max_id" => {
                    if let Ok(id) = value.parse() {
                        self.max_id = Some(id);
                    }
                }
                "since_id" => {
                    if let Ok(id) = value.parse() {
                        self.since_id = Some(id);
                    }
                }
                _ => {}
            }
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub statuses: Vec<Status>,
    pub max_id: i64,
    pub since_id: i64,
    pub refresh_url: Option<String>,
    pub next_results: Option<String>,
    pub count: u32,
    pub completed_in: f64,
    /// The query the page was requested with.
    pub query: Query,
    meta: ResponseMeta,
}

twitter_response!(QueryResult);

impl QueryResult {
    pub fn has_next(&self) -> bool {
        self.next_results.is_some()
    }

    /// Query for the following page, derived from `next_results` on top of
    /// the original query.
    pub fn next_query(&self) -> Option<Query> {
        let next = self.next_results.as_deref()?;
        let mut query = self.query.clone();
        query.apply_query_string(next);
        Some(query)
    }
}

#[derive(Deserialize)]
pub(crate) struct QueryResultWire {
    #[serde(default, deserialize_with = "wire::nullable")]
    statuses: Vec<Status>,
    search_metadata: SearchMetadata,
}

#[derive(Deserialize)]
struct SearchMetadata {
    #[serde(default, deserialize_with = "wire::id_opt")]
    max_id: Option<i64>,
    #[serde(default, deserialize_with = "wire::id_opt")]
    since_id: Option<i64>,
    #[serde(default)]
    refresh_url: Option<String>,
    #[serde(default)]
    next_results: Option<String>,
    #[serde(default, deserialize_with = "wire::nullable")]
    count: u32,
    #[serde(default, deserialize_with = "wire::nullable")]
    completed_in: f64,
}

impl QueryResultWire {
    pub(crate) fn into_result(self, query: Query) -> QueryResult {
        let metadata = self.search_metadata;
        QueryResult {
            statuses: self.statuses,
            max_id: metadata.max_id.unwrap_or(-1),
            since_id: metadata.since_id.unwrap_or(-1),
            refresh_url: metadata.refresh_url,
            next_results: metadata.next_results,
            count: metadata.count,
            completed_in: metadata.completed_in,
            query,
            meta: ResponseMeta::default(),
        }
    }
}
