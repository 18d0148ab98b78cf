use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub env: Environment,
    pub log_level: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub http_timeout_secs: u64,

    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_text_model: String,
    pub openai_image_model: String,

    pub twitter_bearer_token: String,
    pub twitter_user_id: String,
    pub twitter_api_base_url: String,
    pub tweet_query: String,
    pub news_feed_url: String,

    pub pumpportal_api_key: String,
    pub pumpportal_base_url: String,
    pub pumpfun_ipfs_url: String,
    pub dev_buy_sol: f64,
    pub slippage_pct: f64,
    pub priority_fee_sol: f64,

    pub images_dir: PathBuf,
    pub website_url: String,
    /// Read fixture mentions instead of the live mentions timeline.
    pub use_fixture_mentions: bool,
    /// Post generated replies instead of only logging them.
    pub publish_replies: bool,

    pub trend_cron: String,
    pub mentions_cron: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("database_url", &"[redacted]")
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("openai_api_key", &"[redacted]")
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_text_model", &self.openai_text_model)
            .field("openai_image_model", &self.openai_image_model)
            .field("twitter_bearer_token", &"[redacted]")
            .field("twitter_user_id", &self.twitter_user_id)
            .field("twitter_api_base_url", &self.twitter_api_base_url)
            .field("tweet_query", &self.tweet_query)
            .field("news_feed_url", &self.news_feed_url)
            .field("pumpportal_api_key", &"[redacted]")
            .field("pumpportal_base_url", &self.pumpportal_base_url)
            .field("pumpfun_ipfs_url", &self.pumpfun_ipfs_url)
            .field("dev_buy_sol", &self.dev_buy_sol)
            .field("slippage_pct", &self.slippage_pct)
            .field("priority_fee_sol", &self.priority_fee_sol)
            .field("images_dir", &self.images_dir)
            .field("website_url", &self.website_url)
            .field("use_fixture_mentions", &self.use_fixture_mentions)
            .field("publish_replies", &self.publish_replies)
            .field("trend_cron", &self.trend_cron)
            .field("mentions_cron", &self.mentions_cron)
            .finish()
    }
}
