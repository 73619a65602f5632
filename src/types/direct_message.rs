use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::meta::twitter_response;
use super::{ResponseMeta, User, wire};

/// A direct message. Compared and hashed by id.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectMessage {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    #[serde(deserialize_with = "wire::unescaped")]
    pub text: String,
    #[serde(deserialize_with = "wire::id")]
    pub sender_id: i64,
    #[serde(deserialize_with = "wire::id")]
    pub recipient_id: i64,
    #[serde(default, deserialize_with = "wire::twitter_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub sender_screen_name: String,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub recipient_screen_name: String,
    #[serde(default)]
    pub sender: Option<User>,
    #[serde(default)]
    pub recipient: Option<User>,
    #[serde(skip)]
    meta: ResponseMeta,
}

twitter_response!(DirectMessage);

impl PartialEq for DirectMessage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DirectMessage {}

impl Hash for DirectMessage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
