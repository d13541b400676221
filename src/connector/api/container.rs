use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{
    ChatAboutPetUseCase, ConfigProvider, ImageGenerator, LoadPetImageUseCase, ProviderClient,
    ProviderResolver, RecommendPetsUseCase, ResolveImageUseCase, TestConnectionUseCase,
};
use crate::connector::adapter::{
    GeminiImageGenerator, HttpProviderResolver, PollinationsImageService,
};
use crate::connector::storage::{FileConfigStore, InMemoryConfigStore};

pub struct ContainerConfig {
    pub data_dir: String,
    /// Keep settings in memory only; nothing is read from or written to
    /// `data_dir`.
    pub ephemeral: bool,
}

pub struct Container {
    config_provider: Arc<dyn ConfigProvider>,
    provider_client: Arc<ProviderClient>,
    image_resolver: Arc<ResolveImageUseCase>,
    http: reqwest::Client,
    config: ContainerConfig,
}

impl Container {
    pub async fn new(config: ContainerConfig) -> Result<Self> {
        let config_provider: Arc<dyn ConfigProvider> = if config.ephemeral {
            debug!("Using in-memory settings");
            Arc::new(InMemoryConfigStore::new())
        } else {
            tokio::fs::create_dir_all(&config.data_dir).await?;
            let store = FileConfigStore::new(&config.data_dir);
            debug!("Using settings at {}", store.path().display());
            Arc::new(store)
        };

        let http = reqwest::Client::new();
        let resolver: Arc<dyn ProviderResolver> =
            Arc::new(HttpProviderResolver::from_env(http.clone()));

        let mut image_resolver =
            ResolveImageUseCase::new(Arc::new(PollinationsImageService::new()));
        match GeminiImageGenerator::from_env(http.clone()) {
            Some(gemini) => {
                debug!("Gemini image generation enabled");
                image_resolver =
                    image_resolver.with_primary(Arc::new(gemini) as Arc<dyn ImageGenerator>);
            }
            None => debug!("No Gemini credential, images come from the public service"),
        }

        Ok(Self::with_components(
            config,
            resolver,
            config_provider,
            image_resolver,
            http,
        ))
    }

    /// Assembles a container from prebuilt parts, bypassing environment
    /// lookups.
    pub fn with_components(
        config: ContainerConfig,
        resolver: Arc<dyn ProviderResolver>,
        config_provider: Arc<dyn ConfigProvider>,
        image_resolver: ResolveImageUseCase,
        http: reqwest::Client,
    ) -> Self {
        Self {
            config_provider,
            provider_client: Arc::new(ProviderClient::new(resolver)),
            image_resolver: Arc::new(image_resolver),
            http,
            config,
        }
    }

    pub fn recommend_use_case(&self) -> RecommendPetsUseCase {
        RecommendPetsUseCase::new(self.provider_client.clone(), self.config_provider.clone())
    }

    pub fn chat_use_case(&self) -> ChatAboutPetUseCase {
        ChatAboutPetUseCase::new(self.provider_client.clone(), self.config_provider.clone())
    }

    pub fn test_connection_use_case(&self) -> TestConnectionUseCase {
        TestConnectionUseCase::new(self.provider_client.clone(), self.config_provider.clone())
    }

    pub fn resolve_image_use_case(&self) -> Arc<ResolveImageUseCase> {
        self.image_resolver.clone()
    }

    pub fn load_image_use_case(&self) -> LoadPetImageUseCase {
        LoadPetImageUseCase::new(self.image_resolver.clone())
    }

    pub fn config_provider(&self) -> Arc<dyn ConfigProvider> {
        self.config_provider.clone()
    }

    pub fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn settings_path(&self) -> Option<PathBuf> {
        (!self.config.ephemeral)
            .then(|| FileConfigStore::new(&self.config.data_dir).path().to_path_buf())
    }
}
