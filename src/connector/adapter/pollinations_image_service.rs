use async_trait::async_trait;
use rand::Rng;

use crate::application::ImageGenerator;
use crate::domain::{fallback_photo_prompt, DomainError, ImageLocator};

const DEFAULT_BASE_URL: &str = "https://image.pollinations.ai";
const WIDTH: u32 = 1024;
const HEIGHT: u32 = 600;

/// Public text-to-image service addressed purely by URL.
///
/// Nothing is fetched: the locator is a URL the viewer loads directly, with a
/// random seed so repeated requests for the same subject vary.
pub struct PollinationsImageService {
    base_url: String,
}

impl PollinationsImageService {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, subject: &str, seed: u32) -> String {
        let prompt = urlencoding::encode(&fallback_photo_prompt(subject)).into_owned();
        format!(
            "{}/prompt/{prompt}?width={WIDTH}&height={HEIGHT}&nologo=true&seed={seed}&model=flux",
            self.base_url
        )
    }
}

impl Default for PollinationsImageService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerator for PollinationsImageService {
    fn name(&self) -> &str {
        "pollinations"
    }

    async fn generate(&self, subject: &str) -> Result<ImageLocator, DomainError> {
        let seed = rand::thread_rng().gen_range(0..1000);
        let url = self.url_for(subject, seed);
        reqwest::Url::parse(&url)
            .map_err(|e| DomainError::invalid_input(format!("invalid image URL {url}: {e}")))?;
        Ok(ImageLocator::Url(url))
    }
}
