pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatAboutPetUseCase, ChatProvider, ConfigProvider, ImageGenerator, LoadPetImageUseCase,
    ProviderClient, ProviderKind, ProviderResolver, RecommendPetsUseCase, ResolveImageUseCase,
    TestConnectionUseCase,
};

pub use cli::{Commands, ConfigAction, OutputFormat};

pub use connector::{
    FileConfigStore, GeminiImageGenerator, HttpProviderResolver, InMemoryConfigStore,
    OpenAiCompatibleClient, PollinationsImageService,
};

pub use domain::{
    extract_json, normalize_endpoint, Answer, AnswerSet, AppState, Conversation, DomainError,
    ImageLocator, PetRecommendation, ProviderConfig, WizardSession,
};
