//! Atomic persistence of an accepted token pitch.

use sqlx::PgPool;

use crate::conversations::{create_conversation, ConversationRow};
use crate::tokens::{create_token, NewToken, TokenRow};
use crate::tweets::{create_tweet, NewTweet, TweetRow};
use crate::DbError;

/// Everything recorded for one accepted pitch.
#[derive(Debug, Clone)]
pub struct NewPitch {
    /// Platform id of the source mention; becomes `conversations.conversation_id`.
    pub conversation_id: String,
    pub tweet: NewTweet,
    pub token: NewToken,
}

/// Rows created by [`record_pitch`].
#[derive(Debug, Clone)]
pub struct PitchRecords {
    pub conversation: ConversationRow,
    pub tweet: TweetRow,
    pub token: TokenRow,
}

/// Insert conversation, tweet and token, in that order, in one transaction.
///
/// Either all three rows exist afterwards or none do.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the transaction cannot begin, any insert
/// fails, or the commit fails. The transaction is rolled back on drop.
pub async fn record_pitch(pool: &PgPool, pitch: &NewPitch) -> Result<PitchRecords, DbError> {
    let mut tx = pool.begin().await?;

    let conversation = create_conversation(&mut *tx, &pitch.conversation_id).await?;
    let tweet = create_tweet(&mut *tx, conversation.id, &pitch.tweet).await?;
    let token = create_token(&mut *tx, conversation.id, &pitch.token).await?;

    tx.commit().await?;

    Ok(PitchRecords {
        conversation,
        tweet,
        token,
    })
}
