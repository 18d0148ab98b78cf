//! Database operations for the `tweets` table.

use chrono::{DateTime, Utc};

use crate::DbError;

/// A row from the `tweets` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TweetRow {
    pub id: i64,
    pub tweet_id: String,
    pub text: String,
    pub author_id: String,
    /// Owning `conversations.id`.
    pub conversation_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new tweet row.
#[derive(Debug, Clone)]
pub struct NewTweet {
    pub tweet_id: String,
    pub text: String,
    pub author_id: String,
}

/// Insert a tweet owned by `conversation_row_id`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails (including an unknown
/// conversation).
pub async fn create_tweet<'e, E>(
    executor: E,
    conversation_row_id: i64,
    tweet: &NewTweet,
) -> Result<TweetRow, DbError>
where
    E: sqlx::PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, TweetRow>(
        "INSERT INTO tweets (tweet_id, text, author_id, conversation_id) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id, tweet_id, text, author_id, conversation_id, created_at, updated_at",
    )
    .bind(&tweet.tweet_id)
    .bind(&tweet.text)
    .bind(&tweet.author_id)
    .bind(conversation_row_id)
    .fetch_one(executor)
    .await?;

    Ok(row)
}
