//! OllamaBrain: the tool-calling chat loop.

use std::sync::Arc;

use agenda_tools::{ToolDispatcher, ToolRegistry};
use chat_core::{ChatError, ChatMessage};
use tracing::{debug, info, warn};

use crate::client::{ChatBackend, OllamaClient};
use crate::config::OllamaConfig;
use crate::conversation::build_messages;
use crate::ModelTurn;

/// Reply used when the model never settles on a text answer or the
/// request fails mid-flight in a non-network way.
pub const FALLBACK_REPLY: &str = "Lo siento, no pude procesar tu solicitud.";

/// Chat brain that drives an Ollama model through tool rounds.
///
/// Each user request runs a bounded loop: the model is asked for a turn,
/// requested tools are executed in order, their results are appended to
/// the timeline, and the model is asked again. The loop ends when the
/// model produces text or the round budget runs out.
pub struct OllamaBrain {
    backend: Arc<dyn ChatBackend>,
    dispatcher: ToolDispatcher,
    config: OllamaConfig,
}

impl OllamaBrain {
    /// Create a brain talking to a real Ollama server.
    pub fn new(config: OllamaConfig, registry: ToolRegistry) -> Result<Self, ChatError> {
        let backend = Arc::new(OllamaClient::new(&config)?);
        Ok(Self::with_backend(config, registry, backend))
    }

    /// Create a brain over an arbitrary backend.
    pub fn with_backend(
        config: OllamaConfig,
        registry: ToolRegistry,
        backend: Arc<dyn ChatBackend>,
    ) -> Self {
        let dispatcher = ToolDispatcher::new(Arc::new(registry));

        info!(
            "OllamaBrain initialized with model: {}, tools: {:?}",
            config.model,
            dispatcher.registry().list_tools()
        );

        Self {
            backend,
            dispatcher,
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// Answer one user message, always producing user-facing text.
    ///
    /// Errors are folded into Spanish replies here so callers never have
    /// to translate them: connectivity problems get a dedicated message,
    /// anything else a generic one.
    pub async fn chat(
        &self,
        user_text: &str,
        context: Option<&str>,
        history: &[(String, String)],
    ) -> String {
        match self.run(user_text, context, history).await {
            Ok(reply) => reply,
            Err(ChatError::Network(e)) => {
                warn!("Ollama unreachable: {}", e);
                format!("Error al conectar con el servicio de Ollama: {}", e)
            }
            Err(e) => {
                warn!("Chat request failed: {}", e);
                format!("Error inesperado: {}", e)
            }
        }
    }

    async fn run(
        &self,
        user_text: &str,
        context: Option<&str>,
        history: &[(String, String)],
    ) -> Result<String, ChatError> {
        let mut messages = build_messages(
            self.config.effective_system_prompt(),
            context,
            history,
            user_text,
        );
        let tools = self.dispatcher.registry().declarations();

        for round in 0..self.config.max_tool_rounds {
            let turn = self
                .backend
                .complete(messages.clone(), tools.clone())
                .await?;

            let calls = match turn {
                ModelTurn::Text(text) => return Ok(text),
                ModelTurn::Empty => {
                    warn!("Model returned no usable content on round {}", round);
                    return Ok(FALLBACK_REPLY.to_string());
                }
                ModelTurn::ToolCalls(calls) => calls,
            };

            debug!("Round {}: {} tool call(s)", round, calls.len());

            for call in &calls {
                let result = self.dispatcher.dispatch(call).await;
                let name = self
                    .dispatcher
                    .registry()
                    .has_tool(&call.name)
                    .then(|| call.name.clone());
                messages.push(ChatMessage::tool(result.to_json(), call.id.clone(), name));
            }
        }

        warn!(
            "Tool round budget ({}) exhausted without a text reply",
            self.config.max_tool_rounds
        );
        Ok(FALLBACK_REPLY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_tools::appointment_registry;
    use async_trait::async_trait;
    use chat_core::{RawArguments, ToolCallRequest};
    use database::Database;
    use serde_json::Value;
    use std::sync::Mutex;

    /// Backend that replays a fixed script of turns and records the
    /// conversations it was handed.
    struct ScriptedBackend {
        script: Mutex<Vec<ModelTurn>>,
        seen: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl ScriptedBackend {
        fn new(script: Vec<ModelTurn>) -> Self {
            Self {
                script: Mutex::new(script),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn calls_seen(&self) -> usize {
            self.seen.lock().unwrap().len()
        }

        fn last_conversation(&self) -> Vec<ChatMessage> {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl ChatBackend for ScriptedBackend {
        async fn complete(
            &self,
            messages: Vec<ChatMessage>,
            _tools: Vec<Value>,
        ) -> Result<ModelTurn, ChatError> {
            self.seen.lock().unwrap().push(messages);
            let mut script = self.script.lock().unwrap();
            if script.is_empty() {
                Ok(ModelTurn::Empty)
            } else {
                Ok(script.remove(0))
            }
        }
    }

    fn tool_call(name: &str, args: &str) -> ToolCallRequest {
        ToolCallRequest {
            id: Some(format!("call-{}", name)),
            name: name.to_string(),
            arguments: RawArguments::Text(args.to_string()),
        }
    }

    async fn registry() -> ToolRegistry {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        appointment_registry(db)
    }

    fn config() -> OllamaConfig {
        OllamaConfig::builder().max_tool_rounds(3).build()
    }

    #[tokio::test]
    async fn test_plain_text_passthrough() {
        let backend = Arc::new(ScriptedBackend::new(vec![ModelTurn::Text(
            "Soy un asistente de citas.".to_string(),
        )]));
        let brain = OllamaBrain::with_backend(config(), registry().await, backend.clone());

        let reply = brain.chat("¿Cuál es tu nombre?", None, &[]).await;
        assert_eq!(reply, "Soy un asistente de citas.");
        assert_eq!(backend.calls_seen(), 1);
    }

    #[tokio::test]
    async fn test_tool_round_then_text() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            ModelTurn::ToolCalls(vec![tool_call(
                "save_appointment",
                r#"{"name": "Ana", "email": "ana@example.com", "date": "2099-12-07T14:00:00Z", "description": "Consulta"}"#,
            )]),
            ModelTurn::Text("Tu cita quedó agendada.".to_string()),
        ]));
        let brain = OllamaBrain::with_backend(config(), registry().await, backend.clone());

        let reply = brain.chat("Agenda una cita para Ana", None, &[]).await;
        assert_eq!(reply, "Tu cita quedó agendada.");
        assert_eq!(backend.calls_seen(), 2);

        // The second request must carry the tool result in the timeline.
        let conversation = backend.last_conversation();
        let tool_msg = conversation
            .iter()
            .find(|m| m.role == "tool")
            .expect("tool message appended");
        assert_eq!(tool_msg.name.as_deref(), Some("save_appointment"));
        let envelope: Value = serde_json::from_str(&tool_msg.content).unwrap();
        assert_eq!(envelope["ok"], Value::Bool(true));
    }

    #[tokio::test]
    async fn test_round_budget_exhaustion() {
        // Model demands tools forever; after 3 rounds the loop gives up.
        let backend = Arc::new(ScriptedBackend::new(vec![
            ModelTurn::ToolCalls(vec![tool_call("get_appointment_lists", "{}")]),
            ModelTurn::ToolCalls(vec![tool_call("get_appointment_lists", "{}")]),
            ModelTurn::ToolCalls(vec![tool_call("get_appointment_lists", "{}")]),
            ModelTurn::Text("nunca llega".to_string()),
        ]));
        let brain = OllamaBrain::with_backend(config(), registry().await, backend.clone());

        let reply = brain.chat("lista todo", None, &[]).await;
        assert_eq!(reply, FALLBACK_REPLY);
        assert_eq!(backend.calls_seen(), 3);
    }

    #[tokio::test]
    async fn test_unknown_tool_does_not_abort_round() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            ModelTurn::ToolCalls(vec![
                tool_call("foo", "{}"),
                tool_call("get_appointment_lists", "{}"),
            ]),
            ModelTurn::Text("Listo.".to_string()),
        ]));
        let brain = OllamaBrain::with_backend(config(), registry().await, backend.clone());

        let reply = brain.chat("haz cosas", None, &[]).await;
        assert_eq!(reply, "Listo.");

        let conversation = backend.last_conversation();
        let tool_messages: Vec<&ChatMessage> =
            conversation.iter().filter(|m| m.role == "tool").collect();
        assert_eq!(tool_messages.len(), 2);

        // The unresolved call still produced an envelope, but no name.
        let unknown: Value = serde_json::from_str(&tool_messages[0].content).unwrap();
        assert_eq!(unknown["ok"], Value::Bool(false));
        assert_eq!(unknown["error"], Value::String("tool not found".to_string()));
        assert!(tool_messages[0].name.is_none());
        assert_eq!(tool_messages[1].name.as_deref(), Some("get_appointment_lists"));
    }

    #[tokio::test]
    async fn test_failing_tool_does_not_abort_siblings() {
        // A registered tool failing mid-round must not stop the calls
        // after it; both envelopes end up in the transcript.
        let backend = Arc::new(ScriptedBackend::new(vec![
            ModelTurn::ToolCalls(vec![
                tool_call(
                    "save_appointment",
                    r#"{"name": "  ", "date": "2099-12-07T14:00:00"}"#,
                ),
                tool_call("get_appointment_lists", "{}"),
            ]),
            ModelTurn::Text("Hecho.".to_string()),
        ]));
        let brain = OllamaBrain::with_backend(config(), registry().await, backend.clone());

        let reply = brain.chat("agenda sin nombre", None, &[]).await;
        assert_eq!(reply, "Hecho.");

        let conversation = backend.last_conversation();
        let tool_messages: Vec<&ChatMessage> =
            conversation.iter().filter(|m| m.role == "tool").collect();
        assert_eq!(tool_messages.len(), 2);

        let failed: Value = serde_json::from_str(&tool_messages[0].content).unwrap();
        assert_eq!(failed["ok"], Value::Bool(false));
        assert!(failed["error"].as_str().unwrap().contains("name"));

        let sibling: Value = serde_json::from_str(&tool_messages[1].content).unwrap();
        assert_eq!(sibling["ok"], Value::Bool(true));
        assert_eq!(tool_messages[1].name.as_deref(), Some("get_appointment_lists"));
    }

    #[tokio::test]
    async fn test_empty_turn_yields_fallback() {
        let backend = Arc::new(ScriptedBackend::new(vec![ModelTurn::Empty]));
        let brain = OllamaBrain::with_backend(config(), registry().await, backend);

        let reply = brain.chat("hola", None, &[]).await;
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_network_error_surfaces_in_spanish() {
        struct FailingBackend;

        #[async_trait]
        impl ChatBackend for FailingBackend {
            async fn complete(
                &self,
                _messages: Vec<ChatMessage>,
                _tools: Vec<Value>,
            ) -> Result<ModelTurn, ChatError> {
                Err(ChatError::Network("connection refused".to_string()))
            }
        }

        let brain =
            OllamaBrain::with_backend(config(), registry().await, Arc::new(FailingBackend));

        let reply = brain.chat("hola", None, &[]).await;
        assert!(reply.starts_with("Error al conectar con el servicio de Ollama:"));
        assert!(reply.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_history_and_context_reach_backend() {
        let backend = Arc::new(ScriptedBackend::new(vec![ModelTurn::Text("ok".to_string())]));
        let brain = OllamaBrain::with_backend(config(), registry().await, backend.clone());

        let history = vec![("hola".to_string(), "Hola, ¿en qué ayudo?".to_string())];
        brain
            .chat("quiero una cita", Some("usuario: Ana"), &history)
            .await;

        let conversation = backend.last_conversation();
        assert_eq!(conversation[0].role, "system");
        assert!(conversation[0].content.contains("Contexto adicional: usuario: Ana"));
        assert_eq!(conversation[1].content, "hola");
        assert_eq!(conversation[2].content, "Hola, ¿en qué ayudo?");
        assert_eq!(conversation[3].content, "quiero una cita");
    }
}
