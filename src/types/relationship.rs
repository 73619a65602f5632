//! Follow relationships between users.

use serde::Deserialize;

use super::meta::twitter_response;
use super::{ResponseMeta, wire};

/// Relationship between a source user and a target user.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub source_user_id: i64,
    pub source_user_screen_name: String,
    pub target_user_id: i64,
    pub target_user_screen_name: String,
    pub source_blocking_target: bool,
    pub source_following_target: bool,
    pub source_followed_by_target: bool,
    pub source_notifications_enabled: bool,
    pub source_wants_retweets: bool,
    meta: ResponseMeta,
}

twitter_response!(Relationship);

impl Relationship {
    pub fn is_target_following_source(&self) -> bool {
        self.source_followed_by_target
    }

    pub fn is_target_followed_by_source(&self) -> bool {
        self.source_following_target
    }
}

/// Wire shape: `{"relationship": {"source": {...}, "target": {...}}}`.
#[derive(Deserialize)]
pub(crate) struct RelationshipEnvelope {
    relationship: RelationshipWire,
}

#[derive(Deserialize)]
struct RelationshipWire {
    source: RelationshipSide,
    target: RelationshipSide,
}

#[derive(Deserialize)]
struct RelationshipSide {
    #[serde(deserialize_with = "wire::id")]
    id: i64,
    #[serde(default, deserialize_with = "wire::unescaped")]
    screen_name: String,
    #[serde(default, deserialize_with = "wire::nullable")]
    blocking: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    following: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    followed_by: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    notifications_enabled: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    want_retweets: bool,
}

impl From<RelationshipEnvelope> for Relationship {
    fn from(wire: RelationshipEnvelope) -> Self {
        let RelationshipWire { source, target } = wire.relationship;
        Relationship {
            source_user_id: source.id,
            source_user_screen_name: source.screen_name,
            target_user_id: target.id,
            target_user_screen_name: target.screen_name,
            source_blocking_target: source.blocking,
            source_following_target: source.following,
            source_followed_by_target: source.followed_by,
            source_notifications_enabled: source.notifications_enabled,
            source_wants_retweets: source.want_retweets,
            meta: ResponseMeta::default(),
        }
    }
}

/// One entry of a friendship lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friendship {
    pub id: i64,
    pub name: String,
    pub screen_name: String,
    pub following: bool,
    pub followed_by: bool,
}

#[derive(Deserialize)]
struct FriendshipWire {
    #[serde(deserialize_with = "wire::id")]
    id: i64,
    #[serde(default, deserialize_with = "wire::nullable")]
    name: String,
    #[serde(default, deserialize_with = "wire::nullable")]
    screen_name: String,
    #[serde(default, deserialize_with = "wire::nullable")]
    connections: Vec<String>,
}

impl<'de> Deserialize<'de> for Friendship {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = FriendshipWire::deserialize(d)?;
        let has = |c: &str| wire.connections.iter().any(|x| x == c);
        Ok(Friendship {
            following: has("following"),
            followed_by: has("followed_by"),
            id: wire.id,
            name: wire.name,
            screen_name: wire.screen_name,
        })
    }
}
