//! Database operations for the `tokens` table.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::DbError;

/// A row from the `tokens` table.
///
/// The deployed mint address is not stored here.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TokenRow {
    pub id: i64,
    pub public_id: Uuid,
    pub name: String,
    pub ticker: String,
    pub description: String,
    pub reasoning: String,
    pub twitter: String,
    pub website: String,
    /// Owning `conversations.id`.
    pub conversation_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new token row.
#[derive(Debug, Clone)]
pub struct NewToken {
    pub name: String,
    pub ticker: String,
    pub description: String,
    pub reasoning: String,
    pub twitter: String,
    pub website: String,
}

/// Insert a token owned by `conversation_row_id`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn create_token<'e, E>(
    executor: E,
    conversation_row_id: i64,
    token: &NewToken,
) -> Result<TokenRow, DbError>
where
    E: sqlx::PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, TokenRow>(
        "INSERT INTO tokens \
             (public_id, name, ticker, description, reasoning, twitter, website, conversation_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING id, public_id, name, ticker, description, reasoning, twitter, website, \
                   conversation_id, created_at, updated_at",
    )
    .bind(Uuid::new_v4())
    .bind(&token.name)
    .bind(&token.ticker)
    .bind(&token.description)
    .bind(&token.reasoning)
    .bind(&token.twitter)
    .bind(&token.website)
    .bind(conversation_row_id)
    .fetch_one(executor)
    .await?;

    Ok(row)
}
