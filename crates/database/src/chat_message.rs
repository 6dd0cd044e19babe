//! Chat history persistence.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::ChatExchange;

/// Store one user/bot exchange and return its ID.
pub async fn insert_exchange(
    pool: &SqlitePool,
    user_id: Option<&str>,
    user_message: &str,
    bot_response: &str,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO chat_messages (user_id, user_message, bot_response)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(user_message)
    .bind(bot_response)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// The last `limit` exchanges for a user, oldest first.
///
/// Chronological order matters: the conversation builder replays these as
/// prior turns and the model reads them as a linear transcript.
pub async fn recent_exchanges(
    pool: &SqlitePool,
    user_id: Option<&str>,
    limit: i64,
) -> Result<Vec<ChatExchange>> {
    let mut rows = sqlx::query_as::<_, ChatExchange>(
        r#"
        SELECT id, user_id, user_message, bot_response, created_at
        FROM chat_messages
        WHERE (? IS NULL AND user_id IS NULL) OR user_id = ?
        ORDER BY id DESC
        LIMIT ?
        "#,
    )
    .bind(user_id)
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.reverse();
    Ok(rows)
}
