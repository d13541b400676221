use anyhow::Result;

use crate::domain::{normalize_endpoint, ProviderConfig, DEFAULT_SYSTEM_PROMPT};

use super::super::Container;
use super::console::spinner;

/// Field overrides shared by `config set` and `config test`.
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub system_prompt: Option<String>,
}

impl ConfigUpdate {
    fn apply(self, config: &mut ProviderConfig) -> bool {
        let mut changed = false;
        for (slot, value) in [
            (&mut config.endpoint, self.endpoint),
            (&mut config.api_key, self.api_key),
            (&mut config.model, self.model),
            (&mut config.system_prompt, self.system_prompt),
        ] {
            if let Some(value) = value {
                *slot = value;
                changed = true;
            }
        }
        changed
    }
}

pub struct ConfigController<'a> {
    container: &'a Container,
}

impl<'a> ConfigController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn show(&self) -> Result<String> {
        let config = self.container.config_provider().load().await?;
        let mut output = self.format_config(&config);
        match self.container.settings_path() {
            Some(path) => output.push_str(&format!("\nSettings file: {}", path.display())),
            None => output.push_str("\nSettings file: (in memory)"),
        }
        Ok(output)
    }

    pub async fn set(&self, update: ConfigUpdate) -> Result<String> {
        let provider = self.container.config_provider();
        let mut config = provider.load().await?;
        if !update.apply(&mut config) {
            return Ok("Nothing to change.".to_string());
        }
        provider.save(&config).await?;
        Ok(format!("Settings saved.\n\n{}", self.format_config(&config)))
    }

    pub async fn reset(&self) -> Result<String> {
        self.container.config_provider().reset().await?;
        Ok("Settings reset to defaults.".to_string())
    }

    pub async fn test(&self, overrides: ConfigUpdate) -> Result<String> {
        let mut config = self.container.config_provider().load().await?;
        overrides.apply(&mut config);

        let url = normalize_endpoint(&config.endpoint);
        let progress = spinner(&format!("Testing {url}..."))?;
        let result = self
            .container
            .test_connection_use_case()
            .execute_with(&config)
            .await;
        progress.finish_and_clear();
        result?;

        Ok(format!("Connection OK: {url} ({})", config.model))
    }

    fn format_config(&self, config: &ProviderConfig) -> String {
        let provider = if config.has_custom_credentials() {
            "custom endpoint"
        } else {
            "hosted default (no API key set)"
        };
        let prompt = if config.system_prompt == DEFAULT_SYSTEM_PROMPT {
            "(built-in)".to_string()
        } else {
            let first_line = config.effective_system_prompt().lines().next().unwrap_or("");
            format!("{first_line} ...")
        };

        format!(
            "Provider:      {}\nEndpoint:      {}\nRequest URL:   {}\nAPI key:       {}\nModel:         {}\nSystem prompt: {}",
            provider,
            config.endpoint,
            normalize_endpoint(&config.endpoint),
            config.masked_api_key(),
            config.model,
            prompt
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_applies_only_given_fields() {
        let mut config = ProviderConfig::default();
        let changed = ConfigUpdate {
            api_key: Some("sk-new".into()),
            ..Default::default()
        }
        .apply(&mut config);

        assert!(changed);
        assert_eq!(config.api_key, "sk-new");
        assert_eq!(config, ProviderConfig {
            api_key: "sk-new".into(),
            ..ProviderConfig::default()
        });
    }

    #[test]
    fn empty_update_reports_no_change() {
        let mut config = ProviderConfig::default();
        assert!(!ConfigUpdate::default().apply(&mut config));
    }
}
