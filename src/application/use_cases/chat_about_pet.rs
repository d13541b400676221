use std::sync::Arc;

use tracing::warn;

use crate::application::{ConfigProvider, ProviderClient};
use crate::domain::{Conversation, CHAT_FAILURE_REPLY};

/// Runs one turn of the per-pet assistant chat.
pub struct ChatAboutPetUseCase {
    client: Arc<ProviderClient>,
    config_provider: Arc<dyn ConfigProvider>,
}

impl ChatAboutPetUseCase {
    pub fn new(client: Arc<ProviderClient>, config_provider: Arc<dyn ConfigProvider>) -> Self {
        Self {
            client,
            config_provider,
        }
    }

    /// Appends the user turn and the assistant reply to `conversation` and
    /// returns the reply. Failures become the fixed apology reply.
    pub async fn execute(&self, conversation: &mut Conversation, user_text: &str) -> String {
        conversation.push_user(user_text);

        let reply = match self.config_provider.load().await {
            Ok(config) => {
                self.client
                    .send_chat_turn(
                        conversation.messages(),
                        conversation.pet_name(),
                        conversation.pet_description(),
                        &config,
                    )
                    .await
            }
            Err(e) => {
                warn!("Could not load settings for chat: {e}");
                CHAT_FAILURE_REPLY.to_string()
            }
        };

        conversation.push_assistant(reply.clone());
        reply
    }
}
