//! Domain Types
//!
//! Strongly-typed shapes of the API's responses, organized by resource.
//!
//! ## Module Organization
//!
//! - **`status`**, **`user`**, **`user_list`**, **`direct_message`** - core resources
//! - **`relationship`**, **`trends`**, **`place`**, **`search`**, **`account`** - secondary resources
//! - **`related`** - tweets related to a status
//! - **`misc`** - saved searches, id pages, oEmbed and help resources
//! - **`list`** - `ResponseList` / `CursorList`
//! - **`meta`** - per-response metadata (`TwitterResponse`)
//!
//! All public types are re-exported at the module root.

mod account;
mod direct_message;
mod list;
pub(crate) mod meta;
mod misc;
mod place;
mod rate_limit;
mod related;
mod relationship;
mod search;
mod status;
mod trends;
mod user;
mod user_list;
pub(crate) mod wire;

pub use account::{AccountSettings, AccountTotals, SleepTime, TimeZone};
pub use direct_message::DirectMessage;
pub use list::{CursorList, ResponseList};
pub use meta::{AccessLevel, ResponseMeta, TwitterResponse};
pub use misc::{ApiConfiguration, Category, IDs, Language, OEmbed, PhotoSize, SavedSearch};
pub use place::{BoundingBox, Place, SimilarPlaces};
pub use rate_limit::{RateLimitStatus, RateLimitStatuses};
pub use related::RelatedResults;
pub use relationship::{Friendship, Relationship};
pub use search::{Query, QueryResult, ResultType};
pub use status::{
    Entities, GeoLocation, HashtagEntity, MediaEntity, Status, UrlEntity, UserMentionEntity,
};
pub use trends::{Location, PlaceType, Trend, Trends};
pub use user::User;
pub use user_list::UserList;

pub(crate) use misc::IdsWire;
pub(crate) use place::PlacesEnvelope;
pub(crate) use rate_limit::RateLimitResources;
pub(crate) use related::RelatedResultsWire;
pub(crate) use relationship::RelationshipEnvelope;
pub(crate) use search::QueryResultWire;
pub(crate) use trends::{TrendsEnvelope, TrendsHistory};
