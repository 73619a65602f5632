use serde::Deserialize;

use super::meta::twitter_response;
use super::{ResponseMeta, wire};

/// A named geographic place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    pub id: String,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub place_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub street_address: Option<String>,
    #[serde(default)]
    pub bounding_box: Option<BoundingBox>,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub contained_within: Vec<Place>,
    #[serde(skip)]
    meta: ResponseMeta,
}

twitter_response!(Place);

/// Polygon of `[longitude, latitude]` pairs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoundingBox {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// Places similar to a proposed new place, plus the token required to
/// create it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarPlaces {
    pub places: Vec<Place>,
    pub token: Option<String>,
    meta: ResponseMeta,
}

twitter_response!(SimilarPlaces);

/// Wire shape: `{"result": {"places": [...], "token": "..."}}`. Older
/// responses carry `token` at the top level instead.
#[derive(Deserialize)]
pub(crate) struct PlacesEnvelope {
    result: PlacesResult,
    #[serde(default)]
    token: Option<String>,
}

#[derive(Deserialize)]
struct PlacesResult {
    #[serde(default, deserialize_with = "wire::nullable")]
    places: Vec<Place>,
    #[serde(default)]
    token: Option<String>,
}

impl PlacesEnvelope {
    pub(crate) fn into_places(self) -> Vec<Place> {
        self.result.places
    }

    pub(crate) fn into_similar(self) -> SimilarPlaces {
        SimilarPlaces {
            places: self.result.places,
            token: self.result.token.or(self.token),
            meta: ResponseMeta::default(),
        }
    }
}
