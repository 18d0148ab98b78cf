//! HTTP client for the X (Twitter) API v2.
//!
//! Authenticates with an OAuth 2.0 user-context bearer token, which is what
//! the posting endpoints require. Reads request `author_id` so mentions can
//! be persisted with their author.

mod types;

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use xun_core::SocialPost;

use crate::error::SocialError;
use types::{ApiProblem, CreateTweet, CreateTweetResponse, ReplyTarget, TweetPage};

pub use types::PostedTweet;

const DEFAULT_BASE_URL: &str = "https://api.twitter.com/2/";
const TWEET_FIELDS: &str = "author_id,created_at";

/// Page size for search and mentions; the API accepts 10..=100 for search.
pub const PAGE_SIZE: u8 = 25;

pub struct TwitterClient {
    client: Client,
    bearer_token: String,
    user_id: String,
    base_url: Url,
}

impl TwitterClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`SocialError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(bearer_token: &str, user_id: &str, timeout_secs: u64) -> Result<Self, SocialError> {
        Self::with_base_url(bearer_token, user_id, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SocialError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`SocialError::InvalidUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        bearer_token: &str,
        user_id: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SocialError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("xun/0.1 (social-agent)")
            .build()?;

        // Exactly one trailing slash so relative joins append instead of
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| SocialError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            bearer_token: bearer_token.to_owned(),
            user_id: user_id.to_owned(),
            base_url,
        })
    }

    /// The agent's own account id.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Recent tweets matching `query` (last seven days, newest first).
    ///
    /// # Errors
    ///
    /// Returns [`SocialError`] on transport, API or decode failure.
    pub async fn search_recent(&self, query: &str) -> Result<Vec<SocialPost>, SocialError> {
        let url = self.build_url(
            "tweets/search/recent",
            &[
                ("query", query),
                ("max_results", &PAGE_SIZE.to_string()),
                ("tweet.fields", TWEET_FIELDS),
            ],
        )?;
        let page: TweetPage = self.get_json(url, "search/recent").await?;
        Ok(page.data.into_iter().map(SocialPost::from).collect())
    }

    /// Most recent tweets mentioning the agent's account.
    ///
    /// # Errors
    ///
    /// Returns [`SocialError`] on transport, API or decode failure.
    pub async fn mentions(&self) -> Result<Vec<SocialPost>, SocialError> {
        let path = format!("users/{}/mentions", self.user_id);
        let url = self.build_url(
            &path,
            &[
                ("max_results", &PAGE_SIZE.to_string()),
                ("tweet.fields", TWEET_FIELDS),
                ("expansions", "author_id"),
            ],
        )?;
        let page: TweetPage = self.get_json(url, "mentions").await?;
        Ok(page.data.into_iter().map(SocialPost::from).collect())
    }

    /// Publishes a standalone tweet.
    ///
    /// # Errors
    ///
    /// Returns [`SocialError`] on transport, API or decode failure.
    pub async fn post_tweet(&self, text: &str) -> Result<PostedTweet, SocialError> {
        self.create_tweet(&CreateTweet { text, reply: None }).await
    }

    /// Publishes `text` as a reply to `in_reply_to`.
    ///
    /// # Errors
    ///
    /// Returns [`SocialError`] on transport, API or decode failure.
    pub async fn reply(&self, text: &str, in_reply_to: &str) -> Result<PostedTweet, SocialError> {
        self.create_tweet(&CreateTweet {
            text,
            reply: Some(ReplyTarget {
                in_reply_to_tweet_id: in_reply_to,
            }),
        })
        .await
    }

    async fn create_tweet(&self, body: &CreateTweet<'_>) -> Result<PostedTweet, SocialError> {
        let url = self.build_url("tweets", &[])?;
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.bearer_token)
            .json(body)
            .send()
            .await?;
        let created: CreateTweetResponse = Self::decode(response, "tweets").await?;
        tracing::debug!(tweet_id = %created.data.id, "tweet published");
        Ok(created.data)
    }

    fn build_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, SocialError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| SocialError::InvalidUrl {
                url: path.to_owned(),
                reason: e.to_string(),
            })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, context: &str) -> Result<T, SocialError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;
        Self::decode(response, context).await
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        context: &str,
    ) -> Result<T, SocialError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SocialError::Api {
                status: status.as_u16(),
                message: problem_message(&body),
            });
        }
        serde_json::from_str(&body).map_err(|e| SocialError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

fn problem_message(body: &str) -> String {
    match serde_json::from_str::<ApiProblem>(body) {
        Ok(ApiProblem {
            detail: Some(detail),
            ..
        }) => detail,
        Ok(ApiProblem {
            title: Some(title), ..
        }) => title,
        _ => body.chars().take(200).collect(),
    }
}
