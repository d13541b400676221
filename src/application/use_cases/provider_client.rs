use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::ProviderResolver;
use crate::domain::{
    chat_system_instruction, extract_json, recommendation_prompt, AnswerSet, ChatMessage,
    ChatRequest, DomainError, PetRecommendation, ProviderConfig, RecommendationResponse,
    CHAT_EMPTY_REPLY, CHAT_FAILURE_REPLY,
};

const RECOMMENDATION_TEMPERATURE: f32 = 0.7;
const PING_MAX_TOKENS: u32 = 5;
/// Characters of an unparseable reply kept in the error message.
const REPLY_SNIPPET_CHARS: usize = 200;

/// Issues the three provider calls the application needs: a connection
/// test, a recommendation request and a chat turn.
///
/// The provider is picked per call from the configuration snapshot passed
/// in. No call is retried.
pub struct ProviderClient {
    resolver: Arc<dyn ProviderResolver>,
}

impl ProviderClient {
    pub fn new(resolver: Arc<dyn ProviderResolver>) -> Self {
        Self { resolver }
    }

    /// Sends a minimal completion to the custom endpoint.
    ///
    /// Succeeds when the endpoint answers 2xx with a JSON body.
    pub async fn test_connection(&self, config: &ProviderConfig) -> Result<(), DomainError> {
        if config.endpoint.trim().is_empty() || config.api_key.trim().is_empty() {
            return Err(DomainError::config_incomplete(
                "both the API endpoint and the API key must be set",
            ));
        }

        let provider = self.resolver.custom(config);
        info!("Testing connection to: {}", provider.endpoint());

        let request =
            ChatRequest::new(vec![ChatMessage::user("Hi")]).with_max_tokens(PING_MAX_TOKENS);

        provider.complete(&request).await.map(|_| ()).map_err(|e| {
            warn!("Connection test failed: {e}");
            e
        })
    }

    /// Asks the model for recommendations matching `answers` and returns
    /// exactly the list it produced, in order.
    pub async fn get_recommendations(
        &self,
        answers: &AnswerSet,
        config: &ProviderConfig,
    ) -> Result<Vec<PetRecommendation>, DomainError> {
        let provider = self.resolver.resolve(config);
        info!(
            "Requesting recommendations from {} provider at {}",
            provider.kind(),
            provider.endpoint()
        );

        let request = ChatRequest::new(vec![
            ChatMessage::system(config.effective_system_prompt()),
            ChatMessage::user(recommendation_prompt(answers)),
        ])
        .with_temperature(RECOMMENDATION_TEMPERATURE);

        let content = provider.complete(&request).await?.unwrap_or_default();
        debug!("Raw recommendation reply: {content}");

        let recommendations = parse_recommendations(&content)?;
        info!("Received {} recommendations", recommendations.len());
        Ok(recommendations)
    }

    /// Sends one chat turn about a recommended pet.
    ///
    /// `history` is the whole conversation so far and ends with the new user
    /// turn. Never fails: any error is logged and replaced by a fixed
    /// apology.
    pub async fn send_chat_turn(
        &self,
        history: &[ChatMessage],
        pet_name: &str,
        pet_description: &str,
        config: &ProviderConfig,
    ) -> String {
        let provider = self.resolver.resolve(config);

        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::system(chat_system_instruction(
            pet_name,
            pet_description,
        )));
        messages.extend(history.iter().cloned());

        match provider.complete(&ChatRequest::new(messages)).await {
            Ok(Some(reply)) if !reply.trim().is_empty() => reply,
            Ok(_) => CHAT_EMPTY_REPLY.to_string(),
            Err(e) => {
                warn!("Chat turn via {} provider failed: {e}", provider.kind());
                CHAT_FAILURE_REPLY.to_string()
            }
        }
    }
}

/// Reduces a model reply to the recommendation list.
pub fn parse_recommendations(content: &str) -> Result<Vec<PetRecommendation>, DomainError> {
    let candidate = extract_json(content);
    serde_json::from_str::<RecommendationResponse>(candidate)
        .map(|response| response.recommendations)
        .map_err(|e| {
            let snippet: String = content.chars().take(REPLY_SNIPPET_CHARS).collect();
            DomainError::structured_output(format!(
                "could not read recommendations from the model reply ({e}): {snippet}"
            ))
        })
}
