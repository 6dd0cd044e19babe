//! Route handlers for the HTTP API.

pub mod appointments;
pub mod chat;
pub mod health;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health))
        .route("/api/chat", post(chat::chat))
        .route(
            "/api/appointments",
            get(appointments::list).post(appointments::create),
        )
        .route(
            "/api/appointments/:id",
            get(appointments::get).delete(appointments::delete),
        )
}

/// Service index.
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Agenda Chatbot API",
        "endpoints": {
            "chat": "/api/chat",
            "appointments": "/api/appointments",
            "health": "/health"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_tools::appointment_registry;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use database::Database;
    use http_body_util::BodyExt;
    use ollama_brain::{
        ChatBackend, ChatError, ChatMessage, ModelTurn, OllamaBrain, OllamaConfig,
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Backend that always answers with the same text.
    struct CannedBackend(&'static str);

    #[async_trait]
    impl ChatBackend for CannedBackend {
        async fn complete(
            &self,
            _messages: Vec<ChatMessage>,
            _tools: Vec<Value>,
        ) -> Result<ModelTurn, ChatError> {
            Ok(ModelTurn::Text(self.0.to_string()))
        }
    }

    async fn test_app() -> Router {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();

        let brain = OllamaBrain::with_backend(
            OllamaConfig::default(),
            appointment_registry(db.clone()),
            Arc::new(CannedBackend("Claro, ¿para cuándo?")),
        );

        router().with_state(AppState::new(db, brain))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app().await;
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["model"], "llama3");
    }

    #[tokio::test]
    async fn test_appointment_crud_flow() {
        let app = test_app().await;

        // Create
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/appointments",
                json!({
                    "name": "Ana García",
                    "email": "ana@example.com",
                    "date": "2099-12-07T14:00:00Z",
                    "description": "Consulta"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = json_body(response).await;
        assert_eq!(created["name"], "Ana García");
        // The Z suffix is normalized away on storage.
        assert_eq!(created["date"], "2099-12-07T14:00:00");
        let id = created["id"].as_i64().unwrap();

        // List
        let response = app
            .clone()
            .oneshot(Request::get("/api/appointments").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let listed = json_body(response).await;
        assert_eq!(listed["total"], 1);
        assert_eq!(listed["appointments"][0]["id"], id);

        // Get
        let response = app
            .clone()
            .oneshot(
                Request::get(format!("/api/appointments/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Delete, then the record is gone
        let response = app
            .clone()
            .oneshot(
                Request::delete(format!("/api/appointments/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::get(format!("/api/appointments/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_appointment_rejects_bad_date() {
        let app = test_app().await;
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/appointments",
                json!({ "name": "Ana", "date": "mañana por la tarde" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("invalid date"));
    }

    #[tokio::test]
    async fn test_chat_replies_and_persists() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/chat",
                json!({ "message": "quiero una cita", "user_id": "u1" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["response"], "Claro, ¿para cuándo?");
        let first_id = body["message_id"].as_i64().unwrap();

        // A second exchange gets a fresh id
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/chat",
                json!({ "message": "el lunes", "user_id": "u1" }),
            ))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert!(body["message_id"].as_i64().unwrap() > first_id);
    }
}
