//! Conversation assembly for chat requests.

use chat_core::ChatMessage;

/// Build the message timeline for one chat request.
///
/// Layout: system prompt first (with optional extra context appended),
/// then prior exchanges oldest-first, then the current user message.
/// History entries with an empty side are skipped so partial rows never
/// produce blank turns.
pub fn build_messages(
    system_prompt: &str,
    context: Option<&str>,
    history: &[(String, String)],
    user_text: &str,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() * 2 + 2);

    let system_text = match context {
        Some(ctx) if !ctx.trim().is_empty() => {
            format!("{}\n\nContexto adicional: {}", system_prompt, ctx.trim())
        }
        _ => system_prompt.to_string(),
    };
    messages.push(ChatMessage::system(system_text));

    for (user_message, bot_response) in history {
        if !user_message.is_empty() {
            messages.push(ChatMessage::user(user_message.clone()));
        }
        if !bot_response.is_empty() {
            messages.push(ChatMessage::assistant(bot_response.clone()));
        }
    }

    messages.push(ChatMessage::user(user_text));

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchange(user: &str, bot: &str) -> (String, String) {
        (user.to_string(), bot.to_string())
    }

    #[test]
    fn test_ordering_with_history() {
        let history = vec![exchange("hola", "Hola, ¿en qué ayudo?"), exchange("una cita", "¿Para cuándo?")];
        let messages = build_messages("Eres un asistente", None, &history, "mañana a las 10");

        let roles: Vec<&str> = messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(
            roles,
            ["system", "user", "assistant", "user", "assistant", "user"]
        );
        assert_eq!(messages[0].content, "Eres un asistente");
        assert_eq!(messages[5].content, "mañana a las 10");
    }

    #[test]
    fn test_context_appended_to_system_prompt() {
        let messages = build_messages("Base", Some("usuario: Ana"), &[], "hola");
        assert_eq!(messages[0].content, "Base\n\nContexto adicional: usuario: Ana");
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_blank_context_ignored() {
        let messages = build_messages("Base", Some("   "), &[], "hola");
        assert_eq!(messages[0].content, "Base");
    }

    #[test]
    fn test_empty_history_sides_skipped() {
        let history = vec![exchange("hola", ""), exchange("", "Respuesta suelta")];
        let messages = build_messages("Base", None, &history, "sigo aquí");

        let roles: Vec<&str> = messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, ["system", "user", "assistant", "user"]);
    }
}
