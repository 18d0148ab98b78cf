//! Mention triage: classify every mention in one call, then act on each.
//!
//! A failure while handling one mention is logged and recorded in the
//! report; the remaining mentions are still processed.

use std::sync::Arc;

use tracing::{debug, error, info, instrument};
use xun_core::prompts::{classification_prompt, plain_reply_prompt};
use xun_core::schema::mention_batch_schema;
use xun_core::{ClassificationBatch, MentionClassification, MentionInput, SocialPost};

use crate::collaborators::{
    generate_typed, FeedReader, SocialPoster, StructuredGenerator, TextGenerator,
};
use crate::error::AgentError;
use crate::fixtures::fixture_mentions;
use crate::pipeline::{DeployedToken, MentionIndex, PipelineOutcome, TokenPipeline};

#[derive(Debug, Clone, Copy, Default)]
pub struct TriageOptions {
    /// Triage the canned mention set instead of the live account.
    pub use_fixtures: bool,
    /// Post replies instead of only logging them. Owned by the token
    /// pipeline's [`PipelineSettings`](crate::pipeline::PipelineSettings) once
    /// the workflows are built.
    pub publish_replies: bool,
}

/// What happened to one classified mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentionOutcome {
    /// Neither a reply nor a pitch.
    Ignored,
    Replied {
        reply: String,
        published_reply_id: Option<String>,
    },
    TokenDeployed(DeployedToken),
    /// A deployable pitch whose mention was not in the fetched batch.
    SourceNotFound,
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionResult {
    pub tweet_id: String,
    pub outcome: MentionOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriageReport {
    pub classifications: Vec<MentionClassification>,
    /// One entry per classification, in classification order.
    pub outcomes: Vec<MentionResult>,
}

impl TriageReport {
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|r| matches!(r.outcome, MentionOutcome::Failed { .. }))
            .count()
    }

    /// Tokens deployed during the run.
    pub fn deployed(&self) -> impl Iterator<Item = &DeployedToken> {
        self.outcomes.iter().filter_map(|r| match &r.outcome {
            MentionOutcome::TokenDeployed(token) => Some(token),
            _ => None,
        })
    }
}

pub struct MentionTriageWorkflow {
    feed: Arc<dyn FeedReader>,
    structured: Arc<dyn StructuredGenerator>,
    text: Arc<dyn TextGenerator>,
    poster: Arc<dyn SocialPoster>,
    pipeline: TokenPipeline,
    use_fixtures: bool,
}

impl MentionTriageWorkflow {
    #[must_use]
    pub fn new(
        feed: Arc<dyn FeedReader>,
        structured: Arc<dyn StructuredGenerator>,
        text: Arc<dyn TextGenerator>,
        poster: Arc<dyn SocialPoster>,
        pipeline: TokenPipeline,
        use_fixtures: bool,
    ) -> Self {
        Self {
            feed,
            structured,
            text,
            poster,
            pipeline,
            use_fixtures,
        }
    }

    /// Replies are published when the pipeline's settings say so, for plain
    /// replies and token announcements alike.
    ///
    /// # Errors
    ///
    /// Fails only if fetching mentions or the batched classification fails.
    /// Per-mention failures are reported as [`MentionOutcome::Failed`].
    #[instrument(skip(self), fields(workflow = "mention_triage", fixtures = self.use_fixtures))]
    pub async fn run(&self) -> Result<TriageReport, AgentError> {
        let mentions = if self.use_fixtures {
            fixture_mentions()
        } else {
            self.feed.fetch_mentions().await?
        };
        info!(count = mentions.len(), "mentions loaded");

        let inputs: Vec<MentionInput<'_>> = mentions.iter().map(MentionInput::from).collect();
        let batch: ClassificationBatch = generate_typed(
            self.structured.as_ref(),
            &classification_prompt(&inputs),
            &mention_batch_schema(),
        )
        .await?;
        info!(count = batch.results.len(), "mentions classified");

        let index = MentionIndex::new(&mentions);
        let mut outcomes = Vec::with_capacity(batch.results.len());
        for classification in &batch.results {
            let outcome = match self.handle(classification, &index).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(
                        tweet_id = %classification.tweet_id,
                        error = %e,
                        "failed to process mention"
                    );
                    MentionOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            outcomes.push(MentionResult {
                tweet_id: classification.tweet_id.clone(),
                outcome,
            });
        }

        let report = TriageReport {
            classifications: batch.results,
            outcomes,
        };
        info!(
            processed = report.outcomes.len(),
            failed = report.failed_count(),
            "mention triage complete"
        );
        Ok(report)
    }

    async fn handle(
        &self,
        classification: &MentionClassification,
        index: &MentionIndex<'_>,
    ) -> Result<MentionOutcome, AgentError> {
        if classification.is_ignorable() {
            debug!(tweet_id = %classification.tweet_id, "mention ignored");
            return Ok(MentionOutcome::Ignored);
        }

        let Some(source) = index.get(&classification.tweet_id) else {
            debug!(tweet_id = %classification.tweet_id, "classified mention not in batch, skipping");
            return Ok(MentionOutcome::SourceNotFound);
        };

        if classification.is_deployable_pitch() {
            return Ok(match self.pipeline.run(classification, index).await? {
                PipelineOutcome::SourceNotFound => MentionOutcome::SourceNotFound,
                PipelineOutcome::Deployed(token) => MentionOutcome::TokenDeployed(token),
            });
        }

        self.plain_reply(classification, source).await
    }

    async fn plain_reply(
        &self,
        classification: &MentionClassification,
        source: &SocialPost,
    ) -> Result<MentionOutcome, AgentError> {
        let reply = self
            .text
            .generate_text(&plain_reply_prompt(&source.text, classification))
            .await?
            .unwrap_or_default();
        info!(tweet_id = %classification.tweet_id, %reply, "reply generated");

        let published_reply_id = if self.pipeline.publishes_replies() && !reply.trim().is_empty() {
            let posted = self.poster.reply(&reply, &classification.tweet_id).await?;
            info!(reply_id = %posted.id, "reply published");
            Some(posted.id)
        } else {
            None
        };

        Ok(MentionOutcome::Replied {
            reply,
            published_reply_id,
        })
    }
}
