//! HTTP API for the appointment scheduling chatbot.
//!
//! Exposes a chat endpoint backed by an Ollama model with scheduling
//! tools, plus direct CRUD over appointments.

mod config;
mod error;
mod routes;
mod state;

use agenda_tools::appointment_registry;
use database::Database;
use ollama_brain::{OllamaBrain, OllamaConfig};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting API server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Build the brain with the scheduling tools
    let ollama_config = OllamaConfig::from_env()?;
    let brain = OllamaBrain::new(ollama_config, appointment_registry(db.clone()))?;

    // Build application state
    let state = AppState::new(db, brain);

    // Build router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = routes::router().layer(cors).with_state(state);

    // Start server
    info!(addr = %config.addr, "API server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
