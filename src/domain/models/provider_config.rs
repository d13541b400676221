use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_SYSTEM_PROMPT;

pub const DEFAULT_ENDPOINT: &str = "https://api.siliconflow.cn/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "Qwen/Qwen2.5-7B-Instruct";

/// Connection parameters for the user-configured OpenAI-compatible endpoint.
///
/// Persisted as a single camelCase JSON record; any missing field takes its
/// built-in default so older or hand-edited records still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub system_prompt: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl ProviderConfig {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// True when both endpoint and key are set, which routes requests to the
    /// custom endpoint instead of the hosted default provider.
    pub fn has_custom_credentials(&self) -> bool {
        !self.endpoint.trim().is_empty() && !self.api_key.trim().is_empty()
    }

    /// The configured system prompt, or the built-in default when blank.
    pub fn effective_system_prompt(&self) -> &str {
        if self.system_prompt.trim().is_empty() {
            DEFAULT_SYSTEM_PROMPT
        } else {
            &self.system_prompt
        }
    }

    /// API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let count = self.api_key.chars().count();
        if count == 0 {
            return "(not set)".to_string();
        }
        let visible: String = self.api_key.chars().skip(count.saturating_sub(4)).collect();
        format!("{}{}", "*".repeat(count.saturating_sub(4).min(12)), visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_credentials_require_both_fields() {
        assert!(!ProviderConfig::default().has_custom_credentials());
        assert!(!ProviderConfig::new("", "sk-1", "m").has_custom_credentials());
        assert!(ProviderConfig::new("https://x.com", "sk-1", "m").has_custom_credentials());
    }

    #[test]
    fn blank_system_prompt_uses_default() {
        let config = ProviderConfig::default().with_system_prompt("   ");
        assert_eq!(config.effective_system_prompt(), DEFAULT_SYSTEM_PROMPT);
    }

    #[test]
    fn partial_record_fills_defaults() {
        let config: ProviderConfig = serde_json::from_str(r#"{"apiKey":"sk-abc"}"#).unwrap();
        assert_eq!(config.api_key, "sk-abc");
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn masked_key_shows_last_four() {
        let config = ProviderConfig::new("https://x.com", "sk-123456789", "m");
        assert_eq!(config.masked_api_key(), "********6789");
    }
}
