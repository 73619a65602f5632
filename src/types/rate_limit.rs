use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;

use super::ResponseMeta;
use super::meta::twitter_response;

/// Rate-limit window of one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct RateLimitStatus {
    pub limit: i32,
    pub remaining: i32,
    /// Epoch seconds at which the window resets.
    #[serde(rename = "reset")]
    pub reset_time_in_seconds: i64,
}

impl RateLimitStatus {
    pub fn new(limit: i32, remaining: i32, reset_time_in_seconds: i64) -> Self {
        Self {
            limit,
            remaining,
            reset_time_in_seconds,
        }
    }

    /// Seconds left in the current window, measured against the local clock.
    ///
    /// Negative once the reset time has passed.
    pub fn seconds_until_reset(&self) -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();
        self.reset_time_in_seconds - now
    }
}

/// Endpoint path (`/statuses/home_timeline`) to its rate-limit status.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitStatuses {
    statuses: HashMap<String, RateLimitStatus>,
    meta: ResponseMeta,
}

twitter_response!(RateLimitStatuses);

impl RateLimitStatuses {
    pub(crate) fn new(statuses: HashMap<String, RateLimitStatus>) -> Self {
        Self {
            statuses,
            meta: ResponseMeta::default(),
        }
    }

    pub fn get(&self, endpoint: &str) -> Option<&RateLimitStatus> {
        self.statuses.get(endpoint)
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RateLimitStatus)> {
        self.statuses.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn endpoints(&self) -> impl Iterator<Item = &str> {
        self.statuses.keys().map(String::as_str)
    }
}

/// Wire shape: `{"resources": {"<family>": {"<endpoint>": {...}}}}`.
#[derive(Deserialize)]
pub(crate) struct RateLimitResources {
    resources: HashMap<String, HashMap<String, RateLimitStatus>>,
}

impl From<RateLimitResources> for RateLimitStatuses {
    fn from(wire: RateLimitResources) -> Self {
        let statuses = wire
            .resources
            .into_values()
            .flat_map(HashMap::into_iter)
            .collect();
        RateLimitStatuses::new(statuses)
    }
}
