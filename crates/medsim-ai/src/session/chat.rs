//! Async turn handling for ConversationSession.

use tracing::{debug, warn};

use crate::language::Language;
use crate::AiClient;

use super::manager::ConversationSession;
use super::types::{Reply, Turn};

impl ConversationSession {
    /// Send `prompt` and return the text to show the user.
    ///
    /// Never fails: blank input, empty model output and transport errors
    /// all come back as readable strings.
    pub async fn respond(&mut self, client: &dyn AiClient, prompt: &str, lang: Language) -> String {
        self.respond_detailed(client, prompt, lang).await.to_string()
    }

    /// Like [`respond`](Self::respond) but returns the typed outcome.
    pub async fn respond_detailed(
        &mut self,
        client: &dyn AiClient,
        prompt: &str,
        lang: Language,
    ) -> Reply {
        if prompt.trim().is_empty() {
            return Reply::EmptyInput;
        }

        // Window is taken before recording, so the prompt appears once.
        let context = self.build_context(prompt, lang);
        self.turns.push(Turn::User(prompt.to_string()));

        debug!(
            model = %self.config.model_name,
            %lang,
            context_chars = context.chars().count(),
            history = self.turns.len(),
            "sending turn"
        );

        match client.send_message(&context).await {
            Ok(response) => {
                let reply = response.content.trim();
                if reply.is_empty() {
                    warn!(model = %self.config.model_name, "model returned no text");
                    return Reply::EmptyReply;
                }
                self.turns.push(Turn::Assistant(reply.to_string()));
                Reply::Answer(reply.to_string())
            }
            Err(e) => {
                warn!(model = %self.config.model_name, error = %e, "generation request failed");
                Reply::TransportFailure(e.to_string())
            }
        }
    }
}
