//! Database operations for the `conversations` table.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::DbError;

/// A row from the `conversations` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ConversationRow {
    pub id: i64,
    pub public_id: Uuid,
    /// Platform id of the mention that opened the conversation.
    pub conversation_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert a conversation keyed by the source mention id.
///
/// No uniqueness is enforced on `conversation_id`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn create_conversation<'e, E>(
    executor: E,
    conversation_id: &str,
) -> Result<ConversationRow, DbError>
where
    E: sqlx::PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, ConversationRow>(
        "INSERT INTO conversations (public_id, conversation_id) \
         VALUES ($1, $2) \
         RETURNING id, public_id, conversation_id, created_at, updated_at",
    )
    .bind(Uuid::new_v4())
    .bind(conversation_id)
    .fetch_one(executor)
    .await?;

    Ok(row)
}
