//! Fixed prompts and the builders that fill them.

use crate::types::{MentionClassification, MentionInput, SocialPost, TokenConcept, TrendItem};

pub const AGENT_PERSONA_PROMPT: &str = "\
AgentXun is an autonomous crypto-native analyst living on X. \
Voice: sharp, upbeat, a little irreverent, never financial advice. \
Replies are a single tweet under 280 characters, no hashtag spam, at most one emoji.";

pub const TREND_ANALYSIS_PROMPT: &str = "\
You are AgentXun. Read the headlines and tweets below and write one tweet \
(under 280 characters) naming the strongest emerging narrative, why it is \
moving now, and what to watch next. Do not list sources. Do not give financial advice.";

/// Instruction plus the newline-joined titles and tweet texts.
///
/// Empty inputs still yield a complete prompt with empty sections.
#[must_use]
pub fn trend_analysis_prompt(items: &[TrendItem], posts: &[SocialPost]) -> String {
    let headlines = items
        .iter()
        .map(|item| item.title.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let tweets = posts
        .iter()
        .map(|post| post.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    format!("{TREND_ANALYSIS_PROMPT}\n\n\nHeadlines:\n{headlines}\n\nTweets:\n{tweets}\n")
}

/// Prompt for the single batched classification over all mentions.
#[must_use]
pub fn classification_prompt(mentions: &[MentionInput<'_>]) -> String {
    let listing = serde_json::to_string_pretty(mentions).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Analyze these tweets:\n{listing}\n\n\
         For each tweet, determine:\n\
         1. If it requires a reply\n\
         2. If it's pitching a token idea\n\
         3. If we need more information about the token\n\
         4. If it's a good token idea to deploy\n\
         Provide detailed reasoning for each."
    )
}

#[must_use]
pub fn token_concept_prompt(insight: &str) -> String {
    format!(
        "Based on this insight: \"{insight}\"\n\
         Generate a creative crypto token concept.\n\
         Important: Keep the description under 100 characters, be very concise."
    )
}

#[must_use]
pub fn token_image_prompt(name: &str) -> String {
    format!(
        "Create a modern, professional crypto token logo for {name}.\n\
         The logo should be minimal, memorable, and suitable for a cryptocurrency token."
    )
}

/// Reply announcing a freshly deployed token to the pitching mention.
#[must_use]
pub fn token_reply_prompt(tweet_id: &str, concept: &TokenConcept, address: &str) -> String {
    format!(
        "Generate a reply to the following tweet: {tweet_id} you are AgentXun {AGENT_PERSONA_PROMPT}\n\n\
         A token has been created with the following details:\n\
         Name: {}\n\
         Ticker: {}\n\
         Description: {}\n\
         Address: {address}\n",
        concept.name, concept.ticker, concept.description
    )
}

/// Reply to a mention that deserves an answer but gets no token.
#[must_use]
pub fn plain_reply_prompt(mention_text: &str, classification: &MentionClassification) -> String {
    let need_info = if classification.pitching_token && classification.need_info {
        "\nAsk for the missing details about their token idea."
    } else {
        ""
    };
    format!(
        "Generate a reply to the following tweet: \"{mention_text}\" you are AgentXun {AGENT_PERSONA_PROMPT}\n\n\
         Your read on the tweet: {}{need_info}",
        classification.reasoning
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_prompt_joins_titles_and_texts_by_newline() {
        let items = vec![
            TrendItem {
                title: "ETF inflows hit record".to_string(),
            },
            TrendItem {
                title: "Solana fees spike".to_string(),
            },
        ];
        let posts = vec![SocialPost {
            id: "1".to_string(),
            text: "memecoins are back".to_string(),
            author_id: String::new(),
        }];
        let prompt = trend_analysis_prompt(&items, &posts);
        assert!(prompt.starts_with(TREND_ANALYSIS_PROMPT));
        assert!(prompt.contains("Headlines:\nETF inflows hit record\nSolana fees spike\n"));
        assert!(prompt.ends_with("Tweets:\nmemecoins are back\n"));
    }

    #[test]
    fn trend_prompt_with_no_inputs_keeps_sections() {
        let prompt = trend_analysis_prompt(&[], &[]);
        assert!(prompt.ends_with("\nHeadlines:\n\n\nTweets:\n\n"));
    }

    #[test]
    fn classification_prompt_embeds_mentions_as_json() {
        let post = SocialPost {
            id: "1".to_string(),
            text: "launch $FOO token".to_string(),
            author_id: "5".to_string(),
        };
        let prompt = classification_prompt(&[MentionInput::from(&post)]);
        assert!(prompt.contains("\"id\": \"1\""));
        assert!(prompt.contains("\"text\": \"launch $FOO token\""));
        assert!(!prompt.contains("author"));
    }

    #[test]
    fn token_reply_prompt_names_the_deployment() {
        let concept = TokenConcept {
            name: "Foo".to_string(),
            ticker: "FOO".to_string(),
            description: "for foo".to_string(),
        };
        let prompt = token_reply_prompt("9", &concept, "MintAddr111");
        assert!(prompt.contains("Ticker: FOO"));
        assert!(prompt.contains("Address: MintAddr111"));
    }
}
