//! Trend analysis: headlines plus topic posts in, one analysis tweet out.

use std::sync::Arc;

use tracing::{info, instrument};
use xun_core::prompts::trend_analysis_prompt;
use xun_social::PostedTweet;

use crate::collaborators::{FeedReader, SocialPoster, TextGenerator, TrendSource};
use crate::error::AgentError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendAnalysis {
    pub analysis: String,
    pub post: PostedTweet,
}

pub struct TrendAnalysisWorkflow {
    trends: Arc<dyn TrendSource>,
    feed: Arc<dyn FeedReader>,
    text: Arc<dyn TextGenerator>,
    poster: Arc<dyn SocialPoster>,
}

impl TrendAnalysisWorkflow {
    #[must_use]
    pub fn new(
        trends: Arc<dyn TrendSource>,
        feed: Arc<dyn FeedReader>,
        text: Arc<dyn TextGenerator>,
        poster: Arc<dyn SocialPoster>,
    ) -> Self {
        Self {
            trends,
            feed,
            text,
            poster,
        }
    }

    /// Fetch trends and posts concurrently, generate one analysis, post it.
    ///
    /// Either fetch failing fails the run before any generation.
    ///
    /// # Errors
    ///
    /// Returns the first fetch, generation or post error, or
    /// [`AgentError::NoAnalysis`] when the model produced no text. Nothing is
    /// posted in either case.
    #[instrument(skip(self), fields(workflow = "trend_analysis"))]
    pub async fn run(&self) -> Result<TrendAnalysis, AgentError> {
        let (items, posts) =
            tokio::try_join!(self.trends.fetch_trends(), self.feed.fetch_posts())?;
        info!(
            headlines = items.len(),
            posts = posts.len(),
            "trend inputs fetched"
        );

        let prompt = trend_analysis_prompt(&items, &posts);
        let analysis = self
            .text
            .generate_text(&prompt)
            .await?
            .filter(|text| !text.trim().is_empty())
            .ok_or(AgentError::NoAnalysis)?;
        info!(%analysis, "trend analysis generated");

        let post = self.poster.post_text(&analysis).await?;
        info!(tweet_id = %post.id, "trend analysis posted");

        Ok(TrendAnalysis { analysis, post })
    }
}
