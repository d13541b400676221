use std::sync::Arc;

use crate::application::{ConfigProvider, ProviderClient};
use crate::domain::{DomainError, ProviderConfig};

pub struct TestConnectionUseCase {
    client: Arc<ProviderClient>,
    config_provider: Arc<dyn ConfigProvider>,
}

impl TestConnectionUseCase {
    pub fn new(client: Arc<ProviderClient>, config_provider: Arc<dyn ConfigProvider>) -> Self {
        Self {
            client,
            config_provider,
        }
    }

    /// Tests the stored settings.
    pub async fn execute(&self) -> Result<(), DomainError> {
        let config = self.config_provider.load().await?;
        self.client.test_connection(&config).await
    }

    /// Tests settings that have not been saved yet.
    pub async fn execute_with(&self, config: &ProviderConfig) -> Result<(), DomainError> {
        self.client.test_connection(config).await
    }
}
