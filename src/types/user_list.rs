use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer};

use super::meta::twitter_response;
use super::{ResponseMeta, User, wire};

/// A curated list of users. Compared and hashed by id.
#[derive(Debug, Clone, Deserialize)]
pub struct UserList {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub full_name: String,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub subscriber_count: i64,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub member_count: i64,
    #[serde(default)]
    pub uri: Option<String>,
    /// `mode == "public"` on the wire.
    #[serde(default, rename = "mode", deserialize_with = "public_mode")]
    pub is_public: bool,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub following: bool,
    /// Owner of the list.
    #[serde(default)]
    pub user: Option<User>,
    #[serde(skip)]
    meta: ResponseMeta,
}

twitter_response!(UserList);

fn public_mode<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?.as_deref() == Some("public"))
}

impl PartialEq for UserList {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for UserList {}

impl Hash for UserList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_maps_to_visibility() {
        let public: UserList =
            serde_json::from_str(r#"{"id": 1, "slug": "team", "mode": "public"}"#).unwrap();
        let private: UserList =
            serde_json::from_str(r#"{"id": 2, "slug": "secret", "mode": "private"}"#).unwrap();
        assert!(public.is_public);
        assert!(!private.is_public);
    }
}
