use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ChatRequest, DomainError, ProviderConfig};

/// Which backend served a chat request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// The user-configured OpenAI-compatible endpoint.
    Custom,
    /// The built-in hosted provider with its own credential.
    Hosted,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Custom => f.write_str("custom"),
            ProviderKind::Hosted => f.write_str("hosted"),
        }
    }
}

/// A chat-completion backend.
///
/// Implementors encapsulate transport and serialization. One call is one
/// non-streaming request with no retry.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// The URL requests are sent to, for diagnostics.
    fn endpoint(&self) -> &str;

    /// Sends the request and returns `choices[0].message.content`, or `None`
    /// when the (valid JSON) response carries no reply text.
    async fn complete(&self, request: &ChatRequest) -> Result<Option<String>, DomainError>;
}

/// Chooses the provider for one call from a configuration snapshot.
pub trait ProviderResolver: Send + Sync {
    /// Provider for the configured custom endpoint, regardless of whether
    /// the credentials are complete.
    fn custom(&self, config: &ProviderConfig) -> Arc<dyn ChatProvider>;

    fn hosted(&self) -> Arc<dyn ChatProvider>;

    /// Custom endpoint when both endpoint and key are set, hosted otherwise.
    fn resolve(&self, config: &ProviderConfig) -> Arc<dyn ChatProvider> {
        if config.has_custom_credentials() {
            self.custom(config)
        } else {
            self.hosted()
        }
    }
}
