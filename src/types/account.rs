use serde::Deserialize;

use super::meta::twitter_response;
use super::{Location, ResponseMeta, wire};

/// Totals for the authenticating account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountTotals {
    #[serde(default, deserialize_with = "wire::nullable")]
    pub updates: i64,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub followers: i64,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub favorites: i64,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub friends: i64,
    #[serde(skip)]
    meta: ResponseMeta,
}

twitter_response!(AccountTotals);

/// Settings of the authenticating account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountSettings {
    #[serde(default, deserialize_with = "wire::nullable")]
    pub screen_name: String,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub language: String,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub geo_enabled: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub always_use_https: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub discoverable_by_email: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub sleep_time: SleepTime,
    #[serde(default)]
    pub time_zone: Option<TimeZone>,
    #[serde(default, rename = "trend_location", deserialize_with = "wire::nullable")]
    pub trend_locations: Vec<Location>,
    #[serde(skip)]
    meta: ResponseMeta,
}

twitter_response!(AccountSettings);

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SleepTime {
    #[serde(default, deserialize_with = "wire::nullable")]
    pub enabled: bool,
    /// Hour of day, 0-23.
    #[serde(default)]
    pub start_time: Option<u8>,
    #[serde(default)]
    pub end_time: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimeZone {
    pub name: String,
    #[serde(default)]
    pub tzinfo_name: Option<String>,
    #[serde(default)]
    pub utc_offset: i32,
}
