//! Recording fakes for the collaborator traits.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;
use xun_agent::{
    AgentError, FeedReader, ImageGenerator, ImageStore, MentionTriageWorkflow, PipelineSettings,
    PitchStore, SocialPoster, StructuredGenerator, TextGenerator, TokenDeployer, TokenPipeline,
    TrendSource, TriageOptions,
};
use xun_core::{OutputSchema, SocialPost, TokenImage, TrendItem};
use xun_db::{ConversationRow, NewPitch, NewTweet, PitchRecords, TokenRow, TweetRow};
use xun_social::{PostedTweet, SocialError};

pub fn post(id: &str, text: &str) -> SocialPost {
    SocialPost {
        id: id.to_string(),
        text: text.to_string(),
        author_id: format!("author-{id}"),
    }
}

pub fn classification(id: &str, reply: bool, pitch: bool, deploy: bool) -> Value {
    json!({
        "tweetId": id,
        "deserves_reply": reply,
        "pitching_token": pitch,
        "need_info": false,
        "good_idea_to_deploy": deploy,
        "reasoning": format!("reasoning for {id}"),
    })
}

pub fn batch(results: Vec<Value>) -> Value {
    json!({ "results": results })
}

pub fn concept(name: &str, ticker: &str) -> Value {
    json!({ "name": name, "ticker": ticker, "description": "a token" })
}

fn unavailable() -> AgentError {
    AgentError::Social(SocialError::Api {
        status: 503,
        message: "unavailable".to_string(),
    })
}

/// Structured, text and image generation. Structured answers are popped per
/// schema name in call order.
#[derive(Default)]
pub struct FakeLlm {
    pub structured_answers: Mutex<Vec<(&'static str, VecDeque<Value>)>>,
    pub text_answer: Mutex<Option<String>>,
    pub structured_calls: Mutex<Vec<(String, String)>>,
    pub text_calls: Mutex<Vec<String>>,
    pub image_calls: Mutex<Vec<String>>,
}

impl FakeLlm {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            text_answer: Mutex::new(Some("generated reply".to_string())),
            ..Self::default()
        })
    }

    pub fn answer(&self, schema: &'static str, value: Value) {
        let mut answers = self.structured_answers.lock().unwrap();
        if let Some((_, queue)) = answers.iter_mut().find(|(name, _)| *name == schema) {
            queue.push_back(value);
        } else {
            answers.push((schema, VecDeque::from([value])));
        }
    }

    pub fn set_text(&self, text: Option<&str>) {
        *self.text_answer.lock().unwrap() = text.map(str::to_string);
    }

    pub fn structured_count(&self, schema: &str) -> usize {
        self.structured_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == schema)
            .count()
    }

    pub fn generation_count(&self) -> usize {
        self.structured_calls.lock().unwrap().len()
            + self.text_calls.lock().unwrap().len()
            + self.image_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl StructuredGenerator for FakeLlm {
    async fn generate_object(
        &self,
        prompt: &str,
        schema: &OutputSchema,
    ) -> Result<Value, AgentError> {
        self.structured_calls
            .lock()
            .unwrap()
            .push((schema.name.to_string(), prompt.to_string()));
        let mut answers = self.structured_answers.lock().unwrap();
        let answer = answers
            .iter_mut()
            .find(|(name, _)| *name == schema.name)
            .and_then(|(_, queue)| queue.pop_front());
        answer.ok_or_else(|| {
            AgentError::Llm(xun_openai::OpenAiError::EmptyResponse("structured"))
        })
    }
}

#[async_trait]
impl TextGenerator for FakeLlm {
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>, AgentError> {
        self.text_calls.lock().unwrap().push(prompt.to_string());
        Ok(self.text_answer.lock().unwrap().clone())
    }
}

#[async_trait]
impl ImageGenerator for FakeLlm {
    async fn generate_image(&self, prompt: &str) -> Result<TokenImage, AgentError> {
        self.image_calls.lock().unwrap().push(prompt.to_string());
        Ok(TokenImage {
            base64: STANDARD.encode([0x89, b'P', b'N', b'G']),
        })
    }
}

#[derive(Default)]
pub struct FakeFeed {
    pub trends: Vec<TrendItem>,
    pub posts: Vec<SocialPost>,
    pub mentions: Vec<SocialPost>,
    pub fail_trends: bool,
    pub fail_posts: bool,
    pub mention_fetches: Mutex<usize>,
}

#[async_trait]
impl TrendSource for FakeFeed {
    async fn fetch_trends(&self) -> Result<Vec<TrendItem>, AgentError> {
        if self.fail_trends {
            return Err(unavailable());
        }
        Ok(self.trends.clone())
    }
}

#[async_trait]
impl FeedReader for FakeFeed {
    async fn fetch_posts(&self) -> Result<Vec<SocialPost>, AgentError> {
        if self.fail_posts {
            return Err(unavailable());
        }
        Ok(self.posts.clone())
    }

    async fn fetch_mentions(&self) -> Result<Vec<SocialPost>, AgentError> {
        *self.mention_fetches.lock().unwrap() += 1;
        Ok(self.mentions.clone())
    }
}

#[derive(Default)]
pub struct FakePoster {
    pub posts: Mutex<Vec<String>>,
    pub replies: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl SocialPoster for FakePoster {
    async fn post_text(&self, text: &str) -> Result<PostedTweet, AgentError> {
        let mut posts = self.posts.lock().unwrap();
        posts.push(text.to_string());
        Ok(PostedTweet {
            id: format!("post-{}", posts.len()),
            text: text.to_string(),
        })
    }

    async fn reply(&self, text: &str, in_reply_to: &str) -> Result<PostedTweet, AgentError> {
        let mut replies = self.replies.lock().unwrap();
        replies.push((in_reply_to.to_string(), text.to_string()));
        Ok(PostedTweet {
            id: format!("reply-{}", replies.len()),
            text: text.to_string(),
        })
    }
}

/// Event log shared by the store and the deployer so tests can assert order.
pub type Journal = Arc<Mutex<Vec<String>>>;

pub struct FakeStore {
    pub journal: Journal,
    pub pitches: Mutex<Vec<NewPitch>>,
    pub replies: Mutex<Vec<(i64, NewTweet)>>,
    next_id: AtomicI64,
}

impl FakeStore {
    pub fn new(journal: Journal) -> Arc<Self> {
        Arc::new(Self {
            journal,
            pitches: Mutex::new(Vec::new()),
            replies: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        })
    }
}

#[async_trait]
impl PitchStore for FakeStore {
    async fn record_pitch(&self, pitch: &NewPitch) -> Result<PitchRecords, AgentError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        {
            let mut journal = self.journal.lock().unwrap();
            journal.push(format!("conversation:{}", pitch.conversation_id));
            journal.push(format!("tweet:{}", pitch.tweet.tweet_id));
            journal.push(format!("token:{}", pitch.token.ticker));
        }
        self.pitches.lock().unwrap().push(pitch.clone());

        Ok(PitchRecords {
            conversation: ConversationRow {
                id,
                public_id: Uuid::new_v4(),
                conversation_id: pitch.conversation_id.clone(),
                created_at: now,
                updated_at: now,
            },
            tweet: TweetRow {
                id,
                tweet_id: pitch.tweet.tweet_id.clone(),
                text: pitch.tweet.text.clone(),
                author_id: pitch.tweet.author_id.clone(),
                conversation_id: id,
                created_at: now,
                updated_at: now,
            },
            token: TokenRow {
                id: id * 10,
                public_id: Uuid::new_v4(),
                name: pitch.token.name.clone(),
                ticker: pitch.token.ticker.clone(),
                description: pitch.token.description.clone(),
                reasoning: pitch.token.reasoning.clone(),
                twitter: pitch.token.twitter.clone(),
                website: pitch.token.website.clone(),
                conversation_id: id,
                created_at: now,
                updated_at: now,
            },
        })
    }

    async fn record_reply(
        &self,
        conversation_row_id: i64,
        reply: &NewTweet,
    ) -> Result<(), AgentError> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("reply:{}", reply.tweet_id));
        self.replies
            .lock()
            .unwrap()
            .push((conversation_row_id, reply.clone()));
        Ok(())
    }
}

pub struct FakeDeployer {
    pub journal: Journal,
    pub deployed: Mutex<Vec<TokenRow>>,
    /// Tickers whose deployment fails.
    pub fail_tickers: Vec<String>,
}

impl FakeDeployer {
    pub fn new(journal: Journal, fail_tickers: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            journal,
            deployed: Mutex::new(Vec::new()),
            fail_tickers: fail_tickers.iter().map(|t| (*t).to_string()).collect(),
        })
    }
}

#[async_trait]
impl TokenDeployer for FakeDeployer {
    async fn create_token(
        &self,
        token: &TokenRow,
        _image: &TokenImage,
    ) -> Result<String, AgentError> {
        if self.fail_tickers.contains(&token.ticker) {
            return Err(AgentError::Deploy(xun_pumpfun::DeployError::Rejected(
                "insufficient SOL balance".to_string(),
            )));
        }
        self.journal
            .lock()
            .unwrap()
            .push(format!("deploy:{}", token.ticker));
        self.deployed.lock().unwrap().push(token.clone());
        Ok(format!("{}Mint", token.ticker))
    }
}

/// A triage workflow wired to fakes, plus handles to inspect them.
pub struct Harness {
    pub llm: Arc<FakeLlm>,
    pub feed: Arc<FakeFeed>,
    pub poster: Arc<FakePoster>,
    pub store: Arc<FakeStore>,
    pub deployer: Arc<FakeDeployer>,
    pub journal: Journal,
    pub images: tempfile::TempDir,
}

impl Harness {
    pub fn new(mentions: Vec<SocialPost>, fail_tickers: &[&str]) -> Self {
        let journal: Journal = Arc::default();
        Self {
            llm: FakeLlm::new(),
            feed: Arc::new(FakeFeed {
                mentions,
                ..FakeFeed::default()
            }),
            poster: Arc::new(FakePoster::default()),
            store: FakeStore::new(journal.clone()),
            deployer: FakeDeployer::new(journal.clone(), fail_tickers),
            journal,
            images: tempfile::tempdir().unwrap(),
        }
    }

    pub fn triage(&self, options: TriageOptions) -> MentionTriageWorkflow {
        let pipeline = TokenPipeline::new(
            self.llm.clone(),
            self.llm.clone(),
            self.llm.clone(),
            self.store.clone(),
            self.deployer.clone(),
            self.poster.clone(),
            ImageStore::new(self.images.path()),
            PipelineSettings {
                website_url: "https://agentxun.ai".to_string(),
                publish_replies: options.publish_replies,
                agent_user_id: "agent".to_string(),
            },
        );
        MentionTriageWorkflow::new(
            self.feed.clone(),
            self.llm.clone(),
            self.llm.clone(),
            self.poster.clone(),
            pipeline,
            options.use_fixtures,
        )
    }

    pub fn journal(&self) -> Vec<String> {
        self.journal.lock().unwrap().clone()
    }
}
