//! In-memory provider settings.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ConfigProvider;
use crate::domain::{DomainError, ProviderConfig};

/// Settings held for the lifetime of the process. Used by tests and by the
/// `--ephemeral` flag.
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    config: Arc<Mutex<Option<ProviderConfig>>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            config: Arc::new(Mutex::new(Some(config))),
        }
    }
}

#[async_trait]
impl ConfigProvider for InMemoryConfigStore {
    async fn load(&self) -> Result<ProviderConfig, DomainError> {
        Ok(self.config.lock().await.clone().unwrap_or_default())
    }

    async fn save(&self, config: &ProviderConfig) -> Result<(), DomainError> {
        *self.config.lock().await = Some(config.clone());
        Ok(())
    }

    async fn reset(&self) -> Result<(), DomainError> {
        *self.config.lock().await = None;
        Ok(())
    }
}
