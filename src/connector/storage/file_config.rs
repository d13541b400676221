//! Provider settings persisted as a JSON file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::ConfigProvider;
use crate::domain::{DomainError, ProviderConfig};

pub const SETTINGS_FILE: &str = "settings.json";

/// Settings record stored at `<data_dir>/settings.json`.
///
/// A missing file means defaults. An unreadable or corrupt file also falls
/// back to defaults, with a warning, so a bad save never locks the user out.
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SETTINGS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigProvider for FileConfigStore {
    async fn load(&self) -> Result<ProviderConfig, DomainError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", self.path.display());
                return Ok(ProviderConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(
                    "Ignoring unreadable settings at {}: {}",
                    self.path.display(),
                    e
                );
                Ok(ProviderConfig::default())
            }
        }
    }

    async fn save(&self, config: &ProviderConfig) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| DomainError::config(format!("failed to serialize settings: {e}")))?;
        tokio::fs::write(&self.path, json).await?;
        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    async fn reset(&self) -> Result<(), DomainError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
