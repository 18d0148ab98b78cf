//! Collaborator implementations backed by the real clients.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;
use sqlx::PgPool;
use xun_core::{OutputSchema, SocialPost, TokenImage, TrendItem};
use xun_db::{NewPitch, NewTweet, PitchRecords, TokenRow};
use xun_openai::OpenAiClient;
use xun_pumpfun::{PumpPortalClient, TokenMetadata};
use xun_social::{NewsFeed, PostedTweet, TwitterClient};

use crate::collaborators::{
    FeedReader, ImageGenerator, PitchStore, SocialPoster, StructuredGenerator, TextGenerator,
    TokenDeployer, TrendSource,
};
use crate::error::AgentError;

#[async_trait]
impl StructuredGenerator for OpenAiClient {
    async fn generate_object(
        &self,
        prompt: &str,
        schema: &OutputSchema,
    ) -> Result<Value, AgentError> {
        Ok(self.chat_json(prompt, schema.name, &schema.schema).await?)
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>, AgentError> {
        Ok(self.chat(prompt).await?)
    }
}

#[async_trait]
impl ImageGenerator for OpenAiClient {
    async fn generate_image(&self, prompt: &str) -> Result<TokenImage, AgentError> {
        let base64 = OpenAiClient::generate_image(self, prompt).await?;
        Ok(TokenImage { base64 })
    }
}

#[async_trait]
impl TrendSource for NewsFeed {
    async fn fetch_trends(&self) -> Result<Vec<TrendItem>, AgentError> {
        Ok(self.fetch_headlines().await?)
    }
}

/// The agent's X account: topic search, mentions, and posting.
pub struct TwitterAccount {
    client: TwitterClient,
    query: String,
}

impl TwitterAccount {
    #[must_use]
    pub fn new(client: TwitterClient, query: impl Into<String>) -> Self {
        Self {
            client,
            query: query.into(),
        }
    }
}

#[async_trait]
impl FeedReader for TwitterAccount {
    async fn fetch_posts(&self) -> Result<Vec<SocialPost>, AgentError> {
        Ok(self.client.search_recent(&self.query).await?)
    }

    async fn fetch_mentions(&self) -> Result<Vec<SocialPost>, AgentError> {
        Ok(self.client.mentions().await?)
    }
}

#[async_trait]
impl SocialPoster for TwitterAccount {
    async fn post_text(&self, text: &str) -> Result<PostedTweet, AgentError> {
        Ok(self.client.post_tweet(text).await?)
    }

    async fn reply(&self, text: &str, in_reply_to: &str) -> Result<PostedTweet, AgentError> {
        Ok(self.client.reply(text, in_reply_to).await?)
    }
}

/// Postgres-backed [`PitchStore`].
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PitchStore for PgStore {
    async fn record_pitch(&self, pitch: &NewPitch) -> Result<PitchRecords, AgentError> {
        Ok(xun_db::record_pitch(&self.pool, pitch).await?)
    }

    async fn record_reply(
        &self,
        conversation_row_id: i64,
        reply: &NewTweet,
    ) -> Result<(), AgentError> {
        xun_db::create_tweet(&self.pool, conversation_row_id, reply).await?;
        Ok(())
    }
}

#[async_trait]
impl TokenDeployer for PumpPortalClient {
    async fn create_token(
        &self,
        token: &TokenRow,
        image: &TokenImage,
    ) -> Result<String, AgentError> {
        let png = STANDARD.decode(image.base64.as_bytes())?;
        let deployment = PumpPortalClient::create_token(self, &token_metadata(token), png).await?;
        tracing::debug!(
            mint = %deployment.mint,
            signature = %deployment.signature,
            "token launched"
        );
        Ok(deployment.mint)
    }
}

fn token_metadata(token: &TokenRow) -> TokenMetadata {
    TokenMetadata {
        name: token.name.clone(),
        symbol: token.ticker.clone(),
        description: token.description.clone(),
        twitter: token.twitter.clone(),
        website: token.website.clone(),
    }
}
