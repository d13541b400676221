use std::sync::Arc;

use crate::application::{ChatProvider, ProviderResolver};
use crate::connector::adapter::OpenAiCompatibleClient;
use crate::domain::ProviderConfig;

/// Resolves providers to [`OpenAiCompatibleClient`]s sharing one HTTP
/// connection pool.
///
/// The custom client is built from each call's configuration snapshot; the
/// hosted client is fixed at construction.
pub struct HttpProviderResolver {
    client: reqwest::Client,
    hosted: Arc<OpenAiCompatibleClient>,
}

impl HttpProviderResolver {
    pub fn new(client: reqwest::Client, hosted: OpenAiCompatibleClient) -> Self {
        Self {
            client,
            hosted: Arc::new(hosted),
        }
    }

    /// Hosted provider configured from the environment, sharing `client`.
    pub fn from_env(client: reqwest::Client) -> Self {
        let hosted = OpenAiCompatibleClient::hosted_from_env(client.clone());
        Self::new(client, hosted)
    }
}

impl ProviderResolver for HttpProviderResolver {
    fn custom(&self, config: &ProviderConfig) -> Arc<dyn ChatProvider> {
        Arc::new(OpenAiCompatibleClient::custom(self.client.clone(), config))
    }

    fn hosted(&self) -> Arc<dyn ChatProvider> {
        self.hosted.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ProviderKind;

    fn resolver() -> HttpProviderResolver {
        let client = reqwest::Client::new();
        let hosted = OpenAiCompatibleClient::hosted(client.clone(), "http://hosted.test", "");
        HttpProviderResolver::new(client, hosted)
    }

    #[test]
    fn complete_credentials_select_custom() {
        let config = ProviderConfig::new("https://custom.test/v1", "sk-1", "m");
        let provider = resolver().resolve(&config);
        assert_eq!(provider.kind(), ProviderKind::Custom);
        assert_eq!(provider.endpoint(), "https://custom.test/v1/chat/completions");
    }

    #[test]
    fn missing_key_selects_hosted() {
        let provider = resolver().resolve(&ProviderConfig::default());
        assert_eq!(provider.kind(), ProviderKind::Hosted);
        assert_eq!(provider.endpoint(), "http://hosted.test/v1/chat/completions");
    }

    #[test]
    fn env_resolver_falls_back_to_hosted() {
        let resolver = HttpProviderResolver::from_env(reqwest::Client::new());
        let provider = resolver.resolve(&ProviderConfig::default());
        assert_eq!(provider.kind(), ProviderKind::Hosted);
    }
}
