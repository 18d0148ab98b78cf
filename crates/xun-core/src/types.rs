use serde::{Deserialize, Serialize};

/// A trending news headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendItem {
    pub title: String,
}

/// A post read from the social platform: an authored tweet or a mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPost {
    pub id: String,
    pub text: String,
    /// Empty when the platform did not expand the author.
    #[serde(default)]
    pub author_id: String,
}

/// The `{id, text}` projection of a mention sent to the classifier.
#[derive(Debug, Clone, Serialize)]
pub struct MentionInput<'a> {
    pub id: &'a str,
    pub text: &'a str,
}

impl<'a> From<&'a SocialPost> for MentionInput<'a> {
    fn from(post: &'a SocialPost) -> Self {
        Self {
            id: &post.id,
            text: &post.text,
        }
    }
}

/// Model verdict for one mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionClassification {
    #[serde(rename = "tweetId")]
    pub tweet_id: String,
    pub deserves_reply: bool,
    pub pitching_token: bool,
    pub need_info: bool,
    pub good_idea_to_deploy: bool,
    pub reasoning: String,
}

impl MentionClassification {
    /// Neither a reply nor a pitch: nothing to do.
    #[must_use]
    pub fn is_ignorable(&self) -> bool {
        !self.deserves_reply && !self.pitching_token
    }

    /// A pitch the model judged worth deploying.
    #[must_use]
    pub fn is_deployable_pitch(&self) -> bool {
        self.pitching_token && self.good_idea_to_deploy
    }
}

/// Envelope returned by the batched classification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationBatch {
    pub results: Vec<MentionClassification>,
}

/// Generated name, ticker and description for a proposed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConcept {
    pub name: String,
    pub ticker: String,
    pub description: String,
}

/// A generated token logo, base64-encoded as returned by the image model.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenImage {
    pub base64: String,
}

impl std::fmt::Debug for TokenImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenImage")
            .field("base64_len", &self.base64.len())
            .finish()
    }
}
