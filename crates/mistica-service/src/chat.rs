//! Assistant chat placeholder.

use mistica_entity::chat::{ChatMessage, ChatRole};

/// Greeting shown when a conversation opens.
pub const GREETING: &str =
    "Olá! Sou a guia da Biblioteca Mística. Em breve poderei responder suas perguntas.";

/// Canned reply returned for every user message.
const CANNED_REPLY: &str =
    "Ainda estou aprendendo! Em breve poderei conversar sobre os conteúdos da biblioteca.";

/// Stubbed assistant: no model behind it, every message gets the same
/// canned reply.
#[derive(Debug, Clone, Default)]
pub struct ChatService;

impl ChatService {
    /// Create a new chat service.
    pub fn new() -> Self {
        Self
    }

    /// The assistant's opening message.
    pub fn greeting(&self) -> ChatMessage {
        ChatMessage::new(ChatRole::Assistant, GREETING)
    }

    /// Produce the assistant's reply to a user message.
    pub fn reply(&self, _user_message: &str) -> ChatMessage {
        ChatMessage::new(ChatRole::Assistant, CANNED_REPLY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_is_canned() {
        let chat = ChatService::new();
        let a = chat.reply("Qual o sentido da vida?");
        let b = chat.reply("Outra pergunta");
        assert_eq!(a.content, b.content);
        assert_eq!(a.role, ChatRole::Assistant);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_greeting_is_from_assistant() {
        let chat = ChatService::new();
        let greeting = chat.greeting();
        assert_eq!(greeting.role, ChatRole::Assistant);
        assert_eq!(greeting.content, GREETING);
    }
}
