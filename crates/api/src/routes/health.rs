//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub ollama_url: String,
    pub model: String,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let config = state.brain.config();
    Json(Health {
        status: "healthy".to_string(),
        ollama_url: config.base_url.clone(),
        model: config.model.clone(),
    })
}
