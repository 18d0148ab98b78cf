//! X API v2 wire types.

use serde::{Deserialize, Serialize};
use xun_core::SocialPost;

/// Page of tweets from a timeline or search endpoint.
///
/// `data` is absent when the page is empty.
#[derive(Debug, Deserialize)]
pub(crate) struct TweetPage {
    #[serde(default)]
    pub data: Vec<ApiTweet>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiTweet {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author_id: Option<String>,
}

impl From<ApiTweet> for SocialPost {
    fn from(tweet: ApiTweet) -> Self {
        Self {
            id: tweet.id,
            text: tweet.text,
            author_id: tweet.author_id.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateTweet<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReplyTarget<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReplyTarget<'a> {
    pub in_reply_to_tweet_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateTweetResponse {
    pub data: PostedTweet,
}

/// A tweet the agent published.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostedTweet {
    pub id: String,
    pub text: String,
}

/// Problem body returned on 4xx/5xx.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiProblem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
