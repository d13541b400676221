use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::application::ImageGenerator;
use crate::domain::ImageLocator;

/// Finds an image for a recommended pet.
///
/// Tries the primary generator when one is configured, then the fallback.
/// Failures on either path are logged and swallowed; `None` means neither
/// produced a locator.
pub struct ResolveImageUseCase {
    primary: Option<Arc<dyn ImageGenerator>>,
    fallback: Arc<dyn ImageGenerator>,
}

impl ResolveImageUseCase {
    pub fn new(fallback: Arc<dyn ImageGenerator>) -> Self {
        Self {
            primary: None,
            fallback,
        }
    }

    pub fn with_primary(mut self, generator: Arc<dyn ImageGenerator>) -> Self {
        self.primary = Some(generator);
        self
    }

    pub async fn execute(
        &self,
        name: &str,
        description: &str,
        english_name: Option<&str>,
    ) -> Option<ImageLocator> {
        let subject = english_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(name);

        info!("Generating image for: {} (original: {})", subject, name);
        debug!("Pet description: {}", description);

        if let Some(ref primary) = self.primary {
            match primary.generate(subject).await {
                Ok(locator) => return Some(locator),
                Err(e) => warn!(
                    "{} image generation failed, falling back to {}: {e}",
                    primary.name(),
                    self.fallback.name()
                ),
            }
        }

        match self.fallback.generate(subject).await {
            Ok(locator) => Some(locator),
            Err(e) => {
                error!("All image generation methods failed: {e}");
                None
            }
        }
    }
}
