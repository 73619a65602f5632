//! Smaller response shapes: saved searches, id pages, oEmbed, help resources.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::meta::twitter_response;
use super::{ResponseMeta, wire};

/// A search saved by the authenticating user. Compared and hashed by id.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedSearch {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "wire::unescaped")]
    pub name: String,
    #[serde(default, deserialize_with = "wire::unescaped")]
    pub query: String,
    #[serde(default, deserialize_with = "wire::id_opt")]
    pub position: Option<i64>,
    #[serde(default, deserialize_with = "wire::twitter_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    meta: ResponseMeta,
}

twitter_response!(SavedSearch);

impl PartialEq for SavedSearch {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SavedSearch {}

impl Hash for SavedSearch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A page of user ids.
///
/// Cursors are zero when the endpoint returned a bare array.
#[derive(Debug, Clone, PartialEq)]
pub struct IDs {
    pub ids: Vec<i64>,
    pub previous_cursor: i64,
    pub next_cursor: i64,
    meta: ResponseMeta,
}

twitter_response!(IDs);

impl IDs {
    pub fn has_previous(&self) -> bool {
        self.previous_cursor != 0
    }

    pub fn has_next(&self) -> bool {
        self.next_cursor != 0
    }
}

/// Wire shape: `[1, 2]` or `{"ids": [...], "previous_cursor": 0, "next_cursor": 0}`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum IdsWire {
    Cursored {
        #[serde(deserialize_with = "wire::id_vec")]
        ids: Vec<i64>,
        #[serde(default, deserialize_with = "wire::id_opt")]
        previous_cursor: Option<i64>,
        #[serde(default, deserialize_with = "wire::id_opt")]
        next_cursor: Option<i64>,
    },
    Bare(#[serde(deserialize_with = "wire::id_vec")] Vec<i64>),
}

impl From<IdsWire> for IDs {
    fn from(wire: IdsWire) -> Self {
        let (ids, previous_cursor, next_cursor) = match wire {
            IdsWire::Cursored {
                ids,
                previous_cursor,
                next_cursor,
            } => (
                ids,
                previous_cursor.unwrap_or_default(),
                next_cursor.unwrap_or_default(),
            ),
            IdsWire::Bare(ids) => (ids, 0, 0),
        };
        IDs {
            ids,
            previous_cursor,
            next_cursor,
            meta: ResponseMeta::default(),
        }
    }
}

/// Embeddable HTML for a status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OEmbed {
    pub html: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Seconds the embed may be cached.
    #[serde(default, deserialize_with = "wire::id_opt")]
    pub cache_age: Option<i64>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(skip)]
    meta: ResponseMeta,
}

twitter_response!(OEmbed);

/// A suggested-users category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub size: u32,
}

/// A language supported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Language {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Service-wide limits and reserved paths.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfiguration {
    #[serde(default)]
    pub photo_size_limit: u64,
    #[serde(default)]
    pub short_url_length: u32,
    #[serde(default)]
    pub short_url_length_https: u32,
    #[serde(default)]
    pub characters_reserved_per_media: u32,
    #[serde(default)]
    pub max_media_per_upload: u32,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub non_username_paths: Vec<String>,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub photo_sizes: HashMap<String, PhotoSize>,
    #[serde(skip)]
    meta: ResponseMeta,
}

twitter_response!(ApiConfiguration);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoSize {
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
    pub resize: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_accept_both_shapes() {
        let bare: IDs = serde_json::from_str::<IdsWire>("[1, 2, \"3\"]").unwrap().into();
        assert_eq!(bare.ids, vec![1, 2, 3]);
        assert!(!bare.has_next());

        let cursored: IDs = serde_json::from_str::<IdsWire>(
            r#"{"ids": [4, 5], "previous_cursor": 0, "next_cursor_str": "1374004777531007833", "next_cursor": 1374004777531007833}"#,
        )
        .unwrap()
        .into();
        assert_eq!(cursored.ids, vec![4, 5]);
        assert!(!cursored.has_previous());
        assert!(cursored.has_next());
    }

    #[test]
    fn saved_search_position_may_be_null_or_string() {
        let a: SavedSearch = serde_json::from_str(
            r#"{"id": 9, "name": "@twitterapi", "query": "@twitterapi", "position": null,
                "created_at": "Mon Jun 20 19:51:05 +0000 2011"}"#,
        )
        .unwrap();
        let b: SavedSearch =
            serde_json::from_str(r#"{"id": "10", "name": "x", "query": "x", "position": "2"}"#).unwrap();
        assert_eq!(a.position, None);
        assert!(a.created_at.is_some());
        assert_eq!(b.position, Some(2));
    }

    #[test]
    fn api_configuration_photo_sizes() {
        let config: ApiConfiguration = serde_json::from_str(
            r#"{
                "characters_reserved_per_media": 23,
                "max_media_per_upload": 1,
                "non_username_paths": ["about", "account"],
                "photo_size_limit": 3145728,
                "photo_sizes": {"thumb": {"h": 150, "resize": "crop", "w": 150}},
                "short_url_length": 22,
                "short_url_length_https": 23
            }"#,
        )
        .unwrap();
        assert_eq!(config.photo_sizes["thumb"].width, 150);
        assert_eq!(config.short_url_length_https, 23);
    }
}
