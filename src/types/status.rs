//! Statuses (tweets) and their entities.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::meta::twitter_response;
use super::{Place, ResponseMeta, User, wire};

/// A single status update.
///
/// Two statuses are equal when their ids are equal; ordering follows ids.
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    /// Text with HTML entities decoded.
    #[serde(deserialize_with = "wire::unescaped")]
    pub text: String,
    #[serde(default, deserialize_with = "wire::twitter_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::unescaped")]
    pub source: String,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub truncated: bool,
    #[serde(default, deserialize_with = "wire::id_opt")]
    pub in_reply_to_status_id: Option<i64>,
    #[serde(default, deserialize_with = "wire::id_opt")]
    pub in_reply_to_user_id: Option<i64>,
    #[serde(default)]
    pub in_reply_to_screen_name: Option<String>,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub favorited: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub retweeted: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub retweet_count: i64,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub possibly_sensitive: bool,
    #[serde(default)]
    pub user: Option<Box<User>>,
    #[serde(default, rename = "geo", deserialize_with = "geo_point")]
    pub geo_location: Option<GeoLocation>,
    #[serde(default)]
    pub place: Option<Place>,
    #[serde(default)]
    pub retweeted_status: Option<Box<Status>>,
    #[serde(default, rename = "contributors", deserialize_with = "wire::id_vec")]
    pub contributor_ids: Vec<i64>,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub entities: Entities,
    #[serde(default, rename = "current_user_retweet", deserialize_with = "wire::id_of_object")]
    pub current_user_retweet_id: Option<i64>,
    #[serde(skip)]
    meta: ResponseMeta,
}

twitter_response!(Status);

impl Status {
    pub fn is_retweet(&self) -> bool {
        self.retweeted_status.is_some()
    }

    /// Whether the authenticating user retweeted this status.
    pub fn is_retweeted_by_me(&self) -> bool {
        self.current_user_retweet_id.is_some()
    }

    pub fn hashtags(&self) -> impl Iterator<Item = &str> {
        self.entities.hashtags.iter().map(|h| h.text.as_str())
    }
}

impl PartialEq for Status {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Status {}

impl Hash for Status {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Status {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Status {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.user {
            Some(user) => write!(f, "@{}: {}", user.screen_name, self.text),
            None => f.write_str(&self.text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// `{"type": "Point", "coordinates": [lat, long]}`
fn geo_point<'de, D>(d: D) -> Result<Option<GeoLocation>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Point {
        coordinates: [f64; 2],
    }
    Ok(Option::<Point>::deserialize(d)?.map(|p| GeoLocation {
        latitude: p.coordinates[0],
        longitude: p.coordinates[1],
    }))
}

/// Entities extracted from the status text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Entities {
    #[serde(default, deserialize_with = "wire::nullable")]
    pub hashtags: Vec<HashtagEntity>,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub urls: Vec<UrlEntity>,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub user_mentions: Vec<UserMentionEntity>,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub media: Vec<MediaEntity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HashtagEntity {
    pub text: String,
    #[serde(default)]
    pub indices: [usize; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UrlEntity {
    pub url: String,
    #[serde(default)]
    pub expanded_url: Option<String>,
    #[serde(default)]
    pub display_url: Option<String>,
    #[serde(default)]
    pub indices: [usize; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserMentionEntity {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    pub screen_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub indices: [usize; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaEntity {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    pub media_url: String,
    #[serde(default)]
    pub media_url_https: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub display_url: Option<String>,
    #[serde(default)]
    pub expanded_url: Option<String>,
    #[serde(default, rename = "type")]
    pub media_type: Option<String>,
    #[serde(default)]
    pub indices: [usize; 2],
}
