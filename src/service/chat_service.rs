use std::sync::Arc;

use crate::models::message::Message;
use crate::service::completion_service::CompletionClient;

// Shown to the user whenever the completion call fails; the real error is
// only written to the diagnostic log.
pub const FALLBACK_REPLY: &str = "Desculpe, tive um erro ao processar sua solicitação.";

pub const GREETING: &str = "Olá! Como eu posso te ajudar hoje?";

pub struct ChatSession {
    client: Arc<dyn CompletionClient>,
    transcript: Vec<Message>,
    pending: bool,
}

impl ChatSession {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        ChatSession {
            client,
            transcript: Vec::new(),
            pending: false,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    // Callers check this to disable further submission while a completion
    // call is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    // Appends the user message, relays the full transcript, and appends
    // either the reply or the fixed fallback. Whitespace-only input is a
    // no-op. Returns the appended assistant message.
    pub async fn submit(&mut self, text: &str) -> Option<&Message> {
        let user_text = text.trim();
        if user_text.is_empty() {
            return None;
        }

        self.transcript.push(Message::user(user_text));
        self.pending = true;

        let reply = match self.client.complete(&self.transcript).await {
            Ok(content) => content,
            Err(err) => {
                eprintln!("Completion call failed: {}", err);
                FALLBACK_REPLY.to_string()
            }
        };

        self.transcript.push(Message::assistant(reply));
        self.pending = false;
        self.transcript.last()
    }
}
