//! Canned mentions for running triage without reading the live account.

use xun_core::SocialPost;

const FIXTURE_MENTIONS: &[(&str, &str, &str)] = &[
    ("1", "@agentxun launch $FOO token, great idea", "1001"),
    ("2", "@agentxun nice weather today", "1002"),
    (
        "3",
        "@agentxun what do you think about AI agents trading memecoins?",
        "1003",
    ),
    (
        "4",
        "@agentxun you should deploy a token for cats who code",
        "1004",
    ),
];

/// The fixed mention set used when fixture mode is on.
#[must_use]
pub fn fixture_mentions() -> Vec<SocialPost> {
    FIXTURE_MENTIONS
        .iter()
        .map(|(id, text, author_id)| SocialPost {
            id: (*id).to_string(),
            text: (*text).to_string(),
            author_id: (*author_id).to_string(),
        })
        .collect()
}
