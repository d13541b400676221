use async_trait::async_trait;

use crate::domain::{DomainError, ProviderConfig};

/// Source of the persisted provider settings.
///
/// Use cases call [`ConfigProvider::load`] at the start of every invocation,
/// so a saved change applies to the next call without a restart.
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// The stored settings, or built-in defaults when nothing is stored.
    async fn load(&self) -> Result<ProviderConfig, DomainError>;

    async fn save(&self, config: &ProviderConfig) -> Result<(), DomainError>;

    /// Removes the stored record so defaults apply again.
    async fn reset(&self) -> Result<(), DomainError>;
}
