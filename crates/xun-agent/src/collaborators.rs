//! Seams between the workflows and the outside world.
//!
//! Every workflow receives its collaborators as `Arc<dyn Trait>` so tests can
//! substitute recording fakes. Concrete implementations live in
//! [`crate::adapters`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use xun_core::{OutputSchema, SchemaBound, SocialPost, TokenImage, TrendItem};
use xun_db::{NewPitch, NewTweet, PitchRecords, TokenRow};
use xun_social::PostedTweet;

use crate::error::AgentError;

/// Structured generation: the model must answer with JSON matching `schema`.
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    async fn generate_object(&self, prompt: &str, schema: &OutputSchema)
        -> Result<Value, AgentError>;
}

/// Free-text generation. `None` when the model returned no content.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>, AgentError>;
}

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<TokenImage, AgentError>;
}

/// Source of trending headlines.
#[async_trait]
pub trait TrendSource: Send + Sync {
    async fn fetch_trends(&self) -> Result<Vec<TrendItem>, AgentError>;
}

/// Read side of the social platform.
#[async_trait]
pub trait FeedReader: Send + Sync {
    /// Recent posts relevant to the agent's topic.
    async fn fetch_posts(&self) -> Result<Vec<SocialPost>, AgentError>;

    /// Posts mentioning the agent account.
    async fn fetch_mentions(&self) -> Result<Vec<SocialPost>, AgentError>;
}

/// Write side of the social platform.
#[async_trait]
pub trait SocialPoster: Send + Sync {
    async fn post_text(&self, text: &str) -> Result<PostedTweet, AgentError>;

    async fn reply(&self, text: &str, in_reply_to: &str) -> Result<PostedTweet, AgentError>;
}

/// Persistence for accepted pitches.
#[async_trait]
pub trait PitchStore: Send + Sync {
    /// Conversation, tweet and token, all or nothing.
    async fn record_pitch(&self, pitch: &NewPitch) -> Result<PitchRecords, AgentError>;

    /// Attach a published reply to an existing conversation.
    async fn record_reply(
        &self,
        conversation_row_id: i64,
        reply: &NewTweet,
    ) -> Result<(), AgentError>;
}

/// Launches a persisted token and returns its on-chain address.
#[async_trait]
pub trait TokenDeployer: Send + Sync {
    async fn create_token(&self, token: &TokenRow, image: &TokenImage)
        -> Result<String, AgentError>;
}

/// Run a structured generation and decode it into `T`, enforcing `T`'s bounds.
///
/// # Errors
///
/// Propagates the generator's error, or returns [`AgentError::SchemaDecode`] /
/// [`AgentError::SchemaBounds`] when the answer does not fit `T`.
pub async fn generate_typed<T>(
    generator: &dyn StructuredGenerator,
    prompt: &str,
    schema: &OutputSchema,
) -> Result<T, AgentError>
where
    T: DeserializeOwned + SchemaBound,
{
    let value = generator.generate_object(prompt, schema).await?;
    let decoded: T = serde_json::from_value(value).map_err(|source| AgentError::SchemaDecode {
        schema: schema.name,
        source,
    })?;
    decoded.check().map_err(|source| AgentError::SchemaBounds {
        schema: schema.name,
        source,
    })?;
    Ok(decoded)
}
