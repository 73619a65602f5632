use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use super::meta::twitter_response;
use super::{ResponseList, ResponseMeta, wire};

/// Trending topics for one location at one point in time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trends {
    /// When the trends were computed.
    #[serde(default, deserialize_with = "wire::any_date")]
    pub as_of: Option<DateTime<Utc>>,
    /// When the trends were published.
    #[serde(default, rename = "created_at", deserialize_with = "wire::any_date")]
    pub trend_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub locations: Vec<Location>,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub trends: Vec<Trend>,
    #[serde(skip)]
    meta: ResponseMeta,
}

twitter_response!(Trends);

impl Trends {
    /// The location the trends belong to (first of `locations`).
    pub fn location(&self) -> Option<&Location> {
        self.locations.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Trend {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

/// A location with trending topic information (WOEID based).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Location {
    pub woeid: i64,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, rename = "countryCode")]
    pub country_code: Option<String>,
    #[serde(default, rename = "placeType")]
    pub place_type: Option<PlaceType>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct PlaceType {
    pub code: i32,
    pub name: String,
}

/// Wire shape of the place-trends endpoint: a one-element array.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum TrendsEnvelope {
    Array(Vec<Trends>),
    Object(Trends),
}

impl TrendsEnvelope {
    pub(crate) fn into_trends(self) -> Option<Trends> {
        match self {
            TrendsEnvelope::Array(items) => items.into_iter().next(),
            TrendsEnvelope::Object(trends) => Some(trends),
        }
    }
}

/// Wire shape of the daily and weekly trends endpoints: one list of trends
/// per time slot, keyed by the slot's date.
#[derive(Deserialize)]
pub(crate) struct TrendsHistory {
    #[serde(default, deserialize_with = "wire::trends_date")]
    as_of: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::nullable")]
    locations: Vec<Location>,
    trends: BTreeMap<String, Vec<Trend>>,
}

impl TrendsHistory {
    /// One [`Trends`] per recognized slot, oldest first. Keys that are not a
    /// minute, hour or day timestamp are skipped.
    pub(crate) fn into_trends_list(self) -> ResponseList<Trends> {
        let location: Vec<Location> = self.locations.into_iter().take(1).collect();
        let mut slots: Vec<Trends> = self
            .trends
            .into_iter()
            .filter_map(|(key, trends)| {
                let trend_at = parse_slot(&key)?;
                Some(Trends {
                    as_of: self.as_of,
                    trend_at: Some(trend_at),
                    locations: location.clone(),
                    trends,
                    meta: ResponseMeta::default(),
                })
            })
            .collect();
        slots.sort_by_key(|t| t.trend_at);
        ResponseList::new(slots)
    }
}

/// `yyyy-MM-dd HH:mm:ss` (current), `yyyy-MM-dd HH:mm` (daily) or
/// `yyyy-MM-dd` (weekly).
fn parse_slot(key: &str) -> Option<DateTime<Utc>> {
    let naive = match key.len() {
        19 => NaiveDateTime::parse_from_str(key, "%Y-%m-%d %H:%M:%S").ok()?,
        16 => NaiveDateTime::parse_from_str(key, "%Y-%m-%d %H:%M").ok()?,
        10 => NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0)?,
        _ => return None,
    };
    Some(naive.and_utc())
}
