//! Tweets related to a given status, grouped by how they relate.

use serde::Deserialize;

use super::meta::twitter_response;
use super::{ResponseList, ResponseMeta, Status};
use crate::error::ParseFailure;

const TWEETS_WITH_CONVERSATION: &str = "TweetsWithConversation";
const TWEETS_WITH_REPLY: &str = "TweetsWithReply";
const TWEETS_FROM_USER: &str = "TweetsFromUser";

/// Result of the related-results endpoint. Groups absent from the response
/// are empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelatedResults {
    pub tweets_with_conversation: ResponseList<Status>,
    pub tweets_with_reply: ResponseList<Status>,
    pub tweets_from_user: ResponseList<Status>,
    meta: ResponseMeta,
}

twitter_response!(RelatedResults);

/// Wire shape: an array of `{"resultType", "groupName", "results": [{"value": ...}]}`.
#[derive(Deserialize)]
#[serde(transparent)]
pub(crate) struct RelatedResultsWire(Vec<RelatedGroup>);

#[derive(Deserialize)]
struct RelatedGroup {
    #[serde(rename = "resultType", default)]
    result_type: String,
    #[serde(rename = "groupName", default)]
    group_name: String,
    #[serde(default)]
    results: Vec<RelatedEntry>,
}

#[derive(Deserialize)]
struct RelatedEntry {
    value: serde_json::Value,
}

impl RelatedResultsWire {
    /// Keep tweet groups with a known name; other result types are skipped
    /// before their values are read.
    pub(crate) fn into_related(self) -> Result<RelatedResults, ParseFailure> {
        let mut related = RelatedResults::default();
        for group in self.0 {
            if group.result_type != "Tweet" {
                continue;
            }
            let target = match group.group_name.as_str() {
                TWEETS_WITH_CONVERSATION => &mut related.tweets_with_conversation,
                TWEETS_WITH_REPLY => &mut related.tweets_with_reply,
                TWEETS_FROM_USER => &mut related.tweets_from_user,
                _ => continue,
            };
            for entry in group.results {
                target.push(serde_json::from_value(entry.value)?);
            }
        }
        Ok(related)
    }
}
