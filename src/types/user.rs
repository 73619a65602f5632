use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::meta::twitter_response;
use super::{ResponseMeta, Status, wire};

/// A user profile. Equality and hashing use the id only.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub screen_name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub profile_image_url_https: Option<String>,
    #[serde(default, rename = "protected", deserialize_with = "wire::nullable")]
    pub is_protected: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub verified: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub geo_enabled: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub contributors_enabled: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub is_translator: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub followers_count: i64,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub friends_count: i64,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub favourites_count: i64,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub statuses_count: i64,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub listed_count: i64,
    #[serde(default)]
    pub utc_offset: Option<i32>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default, deserialize_with = "wire::twitter_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub follow_request_sent: bool,
    /// Most recent status, when the endpoint embeds it.
    #[serde(default)]
    pub status: Option<Box<Status>>,
    #[serde(skip)]
    meta: ResponseMeta,
}

twitter_response!(User);

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.screen_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_with_embedded_status() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "6253282",
                "name": "Twitter API",
                "screen_name": "twitterapi",
                "protected": false,
                "followers_count": 1000,
                "utc_offset": -28800,
                "follow_request_sent": null,
                "created_at": "Wed May 23 06:01:13 +0000 2007",
                "status": {"id": 7, "text": "latest"}
            }"#,
        )
        .unwrap();
        assert_eq!(user.id, 6253282);
        assert_eq!(user.to_string(), "@twitterapi");
        assert_eq!(user.followers_count, 1000);
        assert_eq!(user.utc_offset, Some(-28800));
        assert!(!user.follow_request_sent);
        assert!(user.created_at.is_some());
        assert_eq!(user.status.as_ref().map(|s| s.id), Some(7));
    }
}
