//! Builds the workflows from configuration with the production clients.

use std::sync::Arc;

use sqlx::PgPool;
use xun_core::AppConfig;
use xun_openai::OpenAiClient;
use xun_pumpfun::{DeployParams, PumpPortalClient};
use xun_social::{NewsFeed, TwitterClient};

use crate::adapters::{PgStore, TwitterAccount};
use crate::error::AgentError;
use crate::images::ImageStore;
use crate::pipeline::{PipelineSettings, TokenPipeline};
use crate::trend::TrendAnalysisWorkflow;
use crate::triage::{MentionTriageWorkflow, TriageOptions};

pub struct Workflows {
    pub trends: TrendAnalysisWorkflow,
    pub mentions: MentionTriageWorkflow,
}

impl Workflows {
    /// `options` overrides the fixture and publish flags from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if any HTTP client cannot be constructed.
    pub fn from_config(
        config: &AppConfig,
        pool: PgPool,
        options: TriageOptions,
    ) -> Result<Self, AgentError> {
        let timeout = config.http_timeout_secs;

        let openai = Arc::new(
            OpenAiClient::with_base_url(&config.openai_api_key, timeout, &config.openai_base_url)?
                .with_models(&config.openai_text_model, &config.openai_image_model),
        );
        let twitter = TwitterClient::with_base_url(
            &config.twitter_bearer_token,
            &config.twitter_user_id,
            timeout,
            &config.twitter_api_base_url,
        )?;
        let account = Arc::new(TwitterAccount::new(twitter, config.tweet_query.clone()));
        let news = Arc::new(NewsFeed::new(&config.news_feed_url, timeout)?);
        let deployer = Arc::new(PumpPortalClient::with_urls(
            &config.pumpportal_api_key,
            timeout,
            DeployParams {
                dev_buy_sol: config.dev_buy_sol,
                slippage_pct: config.slippage_pct,
                priority_fee_sol: config.priority_fee_sol,
            },
            &config.pumpportal_base_url,
            &config.pumpfun_ipfs_url,
        )?);
        let store = Arc::new(PgStore::new(pool));

        let pipeline = TokenPipeline::new(
            openai.clone(),
            openai.clone(),
            openai.clone(),
            store,
            deployer,
            account.clone(),
            ImageStore::new(config.images_dir.clone()),
            PipelineSettings {
                website_url: config.website_url.clone(),
                publish_replies: options.publish_replies,
                agent_user_id: config.twitter_user_id.clone(),
            },
        );

        Ok(Self {
            trends: TrendAnalysisWorkflow::new(
                news,
                account.clone(),
                openai.clone(),
                account.clone(),
            ),
            mentions: MentionTriageWorkflow::new(
                account.clone(),
                openai.clone(),
                openai,
                account,
                pipeline,
                options.use_fixtures,
            ),
        })
    }
}
