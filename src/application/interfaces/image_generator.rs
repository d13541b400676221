use async_trait::async_trait;

use crate::domain::{DomainError, ImageLocator};

/// Produces an image locator for a pet subject name.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, subject: &str) -> Result<ImageLocator, DomainError>;
}
