use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::{ChatProvider, ProviderKind};
use crate::domain::{normalize_endpoint, ChatRequest, DomainError, ProviderConfig};

/// Hosted provider used when no custom endpoint and key are configured.
pub const HOSTED_ENDPOINT: &str = "https://new.12ai.org/v1/chat/completions";
pub const HOSTED_MODEL: &str = "deepseek-chat";
const HOSTED_TEMPERATURE: f32 = 0.7;

/// Chat Completions request payload.
#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// HTTP client for any OpenAI-compatible Chat Completions endpoint.
///
/// Serves both the user-configured custom endpoint and the hosted default
/// provider; the two differ only in URL, credential, model and default
/// temperature. Requests carry the key as a bearer token and use the
/// transport's default timeouts.
///
/// Hosted defaults can be overridden from the environment:
///
/// | Variable                   | Default                                     |
/// |----------------------------|---------------------------------------------|
/// | `AI_API_KEY`               | `""` (no `Authorization` header is sent)    |
/// | `PETMATCH_HOSTED_ENDPOINT` | `https://new.12ai.org/v1/chat/completions`  |
/// | `PETMATCH_HOSTED_MODEL`    | `deepseek-chat`                             |
pub struct OpenAiCompatibleClient {
    client: reqwest::Client,
    kind: ProviderKind,
    url: String,
    api_key: String,
    model: String,
    default_temperature: Option<f32>,
}

impl OpenAiCompatibleClient {
    /// `endpoint` may be a bare base URL; it is normalized to the full
    /// chat-completions URL.
    pub fn new(
        client: reqwest::Client,
        kind: ProviderKind,
        endpoint: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            kind,
            url: normalize_endpoint(endpoint),
            api_key: api_key.into(),
            model: model.into(),
            default_temperature: None,
        }
    }

    pub fn with_default_temperature(mut self, temperature: f32) -> Self {
        self.default_temperature = Some(temperature);
        self
    }

    pub fn custom(client: reqwest::Client, config: &ProviderConfig) -> Self {
        Self::new(
            client,
            ProviderKind::Custom,
            &config.endpoint,
            config.api_key.clone(),
            config.model.clone(),
        )
    }

    pub fn hosted(client: reqwest::Client, endpoint: &str, api_key: impl Into<String>) -> Self {
        Self::new(client, ProviderKind::Hosted, endpoint, api_key, HOSTED_MODEL)
            .with_default_temperature(HOSTED_TEMPERATURE)
    }

    pub fn hosted_from_env(client: reqwest::Client) -> Self {
        let endpoint = std::env::var("PETMATCH_HOSTED_ENDPOINT")
            .unwrap_or_else(|_| HOSTED_ENDPOINT.to_string());
        let model =
            std::env::var("PETMATCH_HOSTED_MODEL").unwrap_or_else(|_| HOSTED_MODEL.to_string());
        let key = std::env::var("AI_API_KEY").unwrap_or_default();
        let mut hosted = Self::hosted(client, &endpoint, key);
        hosted.model = model;
        hosted
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatProvider for OpenAiCompatibleClient {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn endpoint(&self) -> &str {
        &self.url
    }

    async fn complete(&self, request: &ChatRequest) -> Result<Option<String>, DomainError> {
        let payload = ApiRequest {
            model: &self.model,
            messages: request
                .messages
                .iter()
                .map(|m| ApiMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            stream: false,
            temperature: request.temperature.or(self.default_temperature),
            max_tokens: request.max_tokens,
        };

        let mut builder = self.client.post(&self.url).json(&payload);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| DomainError::network(&self.url, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::network(&self.url, format!("failed to read response: {e}")))?;

        if !status.is_success() {
            warn!("{} provider returned {status}: {body}", self.kind);
            return Err(DomainError::http(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                &body,
            ));
        }

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            DomainError::structured_output(format!("response body is not valid JSON: {e}"))
        })?;

        let content = value
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(String::from);

        debug!(
            "{} provider replied with {} characters",
            self.kind,
            content.as_deref().map_or(0, |c| c.chars().count())
        );

        Ok(content)
    }
}
