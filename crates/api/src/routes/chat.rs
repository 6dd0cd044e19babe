//! Chat endpoint: one user message in, one bot reply out.

use axum::extract::State;
use axum::Json;
use database::{appointment, chat_message};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::state::AppState;

/// How many recent appointments to surface as model context.
const CONTEXT_APPOINTMENTS: i64 = 5;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub message_id: Option<i64>,
}

/// Handle one chat turn.
///
/// Recent appointments are summarized into the system context, prior
/// exchanges for the same user become conversation history, and the
/// resulting exchange is persisted before replying.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let pool = state.db.pool();
    let user_id = request.user_id.as_deref();

    let recent = appointment::recent(pool, CONTEXT_APPOINTMENTS).await?;
    let context = if recent.is_empty() {
        None
    } else {
        let summary = recent
            .iter()
            .map(|apt| format!("{} el {}", apt.name, apt.date))
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("Citas recientes: {}", summary))
    };

    let max_turns = state.brain.config().max_history_turns;
    let history: Vec<(String, String)> =
        chat_message::recent_exchanges(pool, user_id, max_turns as i64)
            .await?
            .into_iter()
            .map(|row| (row.user_message, row.bot_response))
            .collect();

    let response = state
        .brain
        .chat(&request.message, context.as_deref(), &history)
        .await;

    let message_id =
        chat_message::insert_exchange(pool, user_id, &request.message, &response).await?;

    info!(message_id, "Chat exchange stored");

    Ok(Json(ChatResponse {
        response,
        message_id: Some(message_id),
    }))
}
