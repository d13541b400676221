use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::ImageGenerator;
use crate::domain::{studio_photo_prompt, DomainError, ImageLocator};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Image generation through the Gemini `generateContent` API.
///
/// Only constructed when a credential is present; the resolver falls back to
/// the public image service otherwise.
///
/// | Variable          | Default                                        |
/// |-------------------|------------------------------------------------|
/// | `GEMINI_API_KEY`  | falls back to `API_KEY`; absent disables it    |
/// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com`    |
pub struct GeminiImageGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiImageGenerator {
    pub fn new(client: reqwest::Client, api_key: String, base_url: Option<String>) -> Self {
        Self {
            client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }

    /// `None` when neither `GEMINI_API_KEY` nor `API_KEY` is set.
    pub fn from_env(client: reqwest::Client) -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty())?;
        let base_url = std::env::var("GEMINI_BASE_URL").ok();
        Some(Self::new(client, api_key, base_url))
    }

    fn url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

/// First inline image part of a `generateContent` response.
fn inline_image(value: &Value) -> Option<ImageLocator> {
    let parts = value.pointer("/candidates/0/content/parts")?.as_array()?;
    parts.iter().find_map(|part| {
        let inline = part.get("inlineData")?;
        let data = inline.get("data")?.as_str()?;
        let mime = inline
            .get("mimeType")
            .and_then(Value::as_str)
            .unwrap_or("image/png");
        Some(ImageLocator::inline(mime, data))
    })
}

#[async_trait]
impl ImageGenerator for GeminiImageGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, subject: &str) -> Result<ImageLocator, DomainError> {
        let prompt = studio_photo_prompt(subject);
        let request = GenerateRequest {
            contents: [Content {
                parts: [Part { text: &prompt }],
            }],
        };
        let url = self.url();

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::network(&url, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::network(&url, format!("failed to read response: {e}")))?;

        if !status.is_success() {
            warn!("Gemini returned {status}: {body}");
            return Err(DomainError::http(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                &body,
            ));
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| DomainError::structured_output(format!("Gemini response: {e}")))?;

        let locator = inline_image(&value).ok_or_else(|| {
            DomainError::structured_output("Gemini response contained no image data")
        })?;
        debug!("Gemini produced an inline image for {subject}");
        Ok(locator)
    }
}
