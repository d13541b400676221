use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::domain::ImageLocator;

use super::super::Container;
use super::console::spinner;

pub struct ImageController<'a> {
    container: &'a Container,
}

impl<'a> ImageController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn image(
        &self,
        name: String,
        english_name: Option<String>,
        description: String,
        save: Option<PathBuf>,
    ) -> Result<String> {
        let progress = spinner(&format!("Generating image for {name}..."))?;
        let locator = self
            .container
            .resolve_image_use_case()
            .execute(&name, &description, english_name.as_deref())
            .await;
        progress.finish_and_clear();
        let locator = locator.ok_or_else(|| anyhow!("No image could be generated for {name}"))?;

        match save {
            Some(path) => self.save(&locator, &path).await,
            None => Ok(describe_image(&locator)),
        }
    }

    async fn save(&self, locator: &ImageLocator, path: &Path) -> Result<String> {
        let bytes = match (locator.decode_inline(), locator) {
            (Some(decoded), _) => decoded?,
            (None, ImageLocator::Url(url)) => {
                debug!("Downloading {url}");
                self.container
                    .http_client()
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .bytes()
                    .await?
                    .to_vec()
            }
            (None, ImageLocator::Inline { .. }) => {
                return Err(anyhow!("inline image could not be decoded"))
            }
        };

        tokio::fs::write(path, &bytes).await?;
        Ok(format!("Saved {} bytes to {}", bytes.len(), path.display()))
    }
}

/// One-line description of where an image lives. Inline payloads are
/// summarized rather than printed.
pub fn describe_image(locator: &ImageLocator) -> String {
    match locator {
        ImageLocator::Url(url) => url.clone(),
        ImageLocator::Inline { mime_type, data } => format!(
            "Inline {mime_type} image ({} base64 characters); use --save <file.{}> to write it",
            data.len(),
            locator.extension()
        ),
    }
}
