//! Token creation for a mention the classifier judged worth deploying.
//!
//! Order per mention: look up the source mention, generate a concept, generate
//! and store a logo, persist conversation/tweet/token, deploy, then generate
//! the announcement reply. The first failing step aborts the mention; rows
//! already committed stay committed.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, instrument};
use xun_core::prompts::{token_concept_prompt, token_image_prompt, token_reply_prompt};
use xun_core::schema::token_concept_schema;
use xun_core::{MentionClassification, SocialPost, TokenConcept};
use xun_db::{NewPitch, NewToken, NewTweet};

use crate::collaborators::{
    generate_typed, ImageGenerator, PitchStore, SocialPoster, StructuredGenerator, TextGenerator,
    TokenDeployer,
};
use crate::error::AgentError;
use crate::images::ImageStore;

/// Mentions of the current batch keyed by platform id.
#[derive(Debug, Default)]
pub struct MentionIndex<'a> {
    by_id: HashMap<&'a str, &'a SocialPost>,
}

impl<'a> MentionIndex<'a> {
    /// Later duplicates of an id replace earlier ones.
    #[must_use]
    pub fn new(mentions: &'a [SocialPost]) -> Self {
        Self {
            by_id: mentions.iter().map(|m| (m.id.as_str(), m)).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a SocialPost> {
        self.by_id.get(id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Settings fixed for the lifetime of a pipeline.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Stored on every token record.
    pub website_url: String,
    /// Post the announcement reply instead of only logging it.
    pub publish_replies: bool,
    /// Author id recorded for published replies.
    pub agent_user_id: String,
}

/// What the pipeline did for one deployable pitch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The classification named a mention not in the current batch.
    SourceNotFound,
    Deployed(DeployedToken),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedToken {
    pub address: String,
    pub concept: TokenConcept,
    pub conversation_row_id: i64,
    pub token_row_id: i64,
    pub image_path: PathBuf,
    pub reply: String,
    /// Platform id of the reply when it was published.
    pub published_reply_id: Option<String>,
}

pub struct TokenPipeline {
    structured: Arc<dyn StructuredGenerator>,
    images: Arc<dyn ImageGenerator>,
    text: Arc<dyn TextGenerator>,
    store: Arc<dyn PitchStore>,
    deployer: Arc<dyn TokenDeployer>,
    poster: Arc<dyn SocialPoster>,
    image_store: ImageStore,
    settings: PipelineSettings,
}

impl TokenPipeline {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        structured: Arc<dyn StructuredGenerator>,
        images: Arc<dyn ImageGenerator>,
        text: Arc<dyn TextGenerator>,
        store: Arc<dyn PitchStore>,
        deployer: Arc<dyn TokenDeployer>,
        poster: Arc<dyn SocialPoster>,
        image_store: ImageStore,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            structured,
            images,
            text,
            store,
            deployer,
            poster,
            image_store,
            settings,
        }
    }

    /// Whether generated replies are posted rather than only logged.
    #[must_use]
    pub fn publishes_replies(&self) -> bool {
        self.settings.publish_replies
    }

    /// # Errors
    ///
    /// Returns the error of the first step that fails. A missing source
    /// mention is not an error: it yields [`PipelineOutcome::SourceNotFound`]
    /// before anything is generated, written or deployed.
    #[instrument(skip_all, fields(tweet_id = %classification.tweet_id))]
    pub async fn run(
        &self,
        classification: &MentionClassification,
        mentions: &MentionIndex<'_>,
    ) -> Result<PipelineOutcome, AgentError> {
        let Some(source) = mentions.get(&classification.tweet_id) else {
            debug!("classified mention not in batch, skipping token creation");
            return Ok(PipelineOutcome::SourceNotFound);
        };

        let concept: TokenConcept = generate_typed(
            self.structured.as_ref(),
            &token_concept_prompt(&classification.reasoning),
            &token_concept_schema(),
        )
        .await?;
        info!(name = %concept.name, ticker = %concept.ticker, "token concept generated");

        let image = self
            .images
            .generate_image(&token_image_prompt(&concept.name))
            .await?;
        let image_path = self.image_store.save(&concept.name, &image).await?;

        let pitch = NewPitch {
            conversation_id: classification.tweet_id.clone(),
            tweet: NewTweet {
                tweet_id: source.id.clone(),
                text: source.text.clone(),
                author_id: source.author_id.clone(),
            },
            token: NewToken {
                name: concept.name.clone(),
                ticker: concept.ticker.clone(),
                description: concept.description.clone(),
                reasoning: classification.reasoning.clone(),
                twitter: tweet_link(&classification.tweet_id),
                website: self.settings.website_url.clone(),
            },
        };
        let records = self.store.record_pitch(&pitch).await?;
        debug!(
            conversation = records.conversation.id,
            token = records.token.id,
            "pitch recorded"
        );

        let address = self.deployer.create_token(&records.token, &image).await?;
        info!(%address, ticker = %concept.ticker, "token deployed");

        let reply = self
            .text
            .generate_text(&token_reply_prompt(&classification.tweet_id, &concept, &address))
            .await?
            .unwrap_or_default();
        info!(%reply, "token reply generated");

        let published_reply_id = if self.settings.publish_replies && !reply.trim().is_empty() {
            let posted = self.poster.reply(&reply, &classification.tweet_id).await?;
            self.store
                .record_reply(
                    records.conversation.id,
                    &NewTweet {
                        tweet_id: posted.id.clone(),
                        text: posted.text,
                        author_id: self.settings.agent_user_id.clone(),
                    },
                )
                .await?;
            info!(reply_id = %posted.id, "token reply published");
            Some(posted.id)
        } else {
            None
        };

        Ok(PipelineOutcome::Deployed(DeployedToken {
            address,
            concept,
            conversation_row_id: records.conversation.id,
            token_row_id: records.token.id,
            image_path,
            reply,
            published_reply_id,
        }))
    }
}

/// Public link to a post on X.
#[must_use]
pub fn tweet_link(tweet_id: &str) -> String {
    format!("https://x.com/{tweet_id}")
}
