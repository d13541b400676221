//! Command routing through the container, with settings on disk.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use petmatch::application::ConfigProvider;
use petmatch::connector::api::controller::QuizController;
use petmatch::connector::api::{Container, ContainerConfig, Router};
use petmatch::{
    AppState, Commands, ConfigAction, FileConfigStore, GeminiImageGenerator, OutputFormat,
    PetRecommendation, PollinationsImageService, ProviderConfig, ResolveImageUseCase,
    WizardSession,
};

use common::{recommendations_json, resolver_with_hosted, unreachable_url, MockProvider};

fn container(data_dir: &std::path::Path) -> Container {
    container_with_images(
        data_dir,
        ResolveImageUseCase::new(Arc::new(PollinationsImageService::new())),
    )
}

fn container_with_images(data_dir: &std::path::Path, images: ResolveImageUseCase) -> Container {
    Container::with_components(
        ContainerConfig {
            data_dir: data_dir.to_string_lossy().to_string(),
            ephemeral: false,
        },
        resolver_with_hosted(&unreachable_url()),
        Arc::new(FileConfigStore::new(data_dir)),
        images,
        reqwest::Client::new(),
    )
}

async fn save_settings(dir: &std::path::Path, base_url: &str) {
    FileConfigStore::new(dir)
        .save(&ProviderConfig::new(base_url, "sk-test", "m"))
        .await
        .unwrap();
}

#[tokio::test]
async fn config_set_show_and_reset() {
    let dir = tempfile::tempdir().unwrap();
    let container = container(dir.path());
    let router = Router::new(&container);

    let saved = router
        .route(Commands::Config {
            action: ConfigAction::Set {
                endpoint: Some("https://api.example.com/v1".into()),
                api_key: Some("sk-1234567890".into()),
                model: None,
                system_prompt: None,
                default_prompt: false,
            },
        })
        .await
        .unwrap();
    assert!(saved.starts_with("Settings saved."));

    let stored = FileConfigStore::new(dir.path()).load().await.unwrap();
    assert_eq!(stored.endpoint, "https://api.example.com/v1");
    assert_eq!(stored.model, ProviderConfig::default().model);

    let shown = router
        .route(Commands::Config {
            action: ConfigAction::Show,
        })
        .await
        .unwrap();
    assert!(shown.contains("https://api.example.com/v1/chat/completions"));
    assert!(shown.contains("7890"));
    assert!(!shown.contains("sk-1234567890"));
    assert!(shown.contains("settings.json"));

    router
        .route(Commands::Config {
            action: ConfigAction::Reset,
        })
        .await
        .unwrap();
    assert!(!dir.path().join("settings.json").exists());
}

#[tokio::test]
async fn recommend_command_prints_json() {
    let mock = MockProvider::replying(&recommendations_json(&[
        ("柯基", "Corgi"),
        ("布偶猫", "Ragdoll"),
        ("金鱼", "Goldfish"),
    ]))
    .await;
    let dir = tempfile::tempdir().unwrap();
    save_settings(dir.path(), &mock.base_url).await;
    let container = container(dir.path());

    let output = Router::new(&container)
        .route(Commands::Recommend {
            answers: vec!["living_space=small_apt".into(), "allergies=no".into()],
            format: OutputFormat::Json,
        })
        .await
        .unwrap();

    let pets: Vec<PetRecommendation> = serde_json::from_str(&output).unwrap();
    assert_eq!(pets.len(), 3);
    assert_eq!(pets[2].name, "金鱼");
}

#[tokio::test]
async fn recommend_command_rejects_unknown_answers() {
    let dir = tempfile::tempdir().unwrap();
    let container = container(dir.path());

    let err = Router::new(&container)
        .route(Commands::Recommend {
            answers: vec!["living_space=castle".into()],
            format: OutputFormat::Text,
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("castle"));
}

#[tokio::test]
async fn config_test_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let container = container(dir.path());
    let base = unreachable_url();

    let err = Router::new(&container)
        .route(Commands::Config {
            action: ConfigAction::Test {
                endpoint: Some(base.clone()),
                api_key: Some("sk-test".into()),
                model: None,
            },
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains(&base));
}

#[tokio::test]
async fn recommend_command_fails_on_empty_list() {
    let mock = MockProvider::replying(r#"{"recommendations": []}"#).await;
    let dir = tempfile::tempdir().unwrap();
    save_settings(dir.path(), &mock.base_url).await;
    let container = container(dir.path());
    let router = Router::new(&container);

    for format in [OutputFormat::Text, OutputFormat::Json] {
        let err = router
            .route(Commands::Recommend {
                answers: vec!["allergies=no".into()],
                format,
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no recommendations"), "{err}");
    }
}

#[tokio::test]
async fn config_test_reports_provider_rejection() {
    let mock = MockProvider::start(
        StatusCode::UNAUTHORIZED,
        json!({ "error": { "message": "invalid api key" } }).to_string(),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    let container = container(dir.path());

    let err = Router::new(&container)
        .route(Commands::Config {
            action: ConfigAction::Test {
                endpoint: Some(mock.base_url.clone()),
                api_key: Some("sk-wrong".into()),
                model: None,
            },
        })
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("401"), "{message}");
    assert!(message.contains("Unauthorized"), "{message}");
    assert!(message.contains("invalid api key"), "{message}");
}

fn gemini_reply() -> String {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }]
            }
        }]
    })
    .to_string()
}

#[tokio::test]
async fn quiz_results_load_first_image_then_each_selection() {
    let provider = MockProvider::replying(&recommendations_json(&[
        ("柯基", "Corgi"),
        ("布偶猫", "Ragdoll"),
    ]))
    .await;
    let gemini = MockProvider::start(StatusCode::OK, gemini_reply()).await;
    let dir = tempfile::tempdir().unwrap();
    save_settings(dir.path(), &provider.base_url).await;
    let images = ResolveImageUseCase::new(Arc::new(PollinationsImageService::new()))
        .with_primary(Arc::new(GeminiImageGenerator::new(
            reqwest::Client::new(),
            "gm-key".to_string(),
            Some(gemini.base_url.clone()),
        )));
    let container = container_with_images(dir.path(), images);
    let quiz = QuizController::new(&container);

    let mut session = WizardSession::new();
    quiz.run_pipeline(&mut session).await.unwrap();
    assert_eq!(session.state(), AppState::Results);
    assert!(session.image(0).is_some());
    assert!(session.image(1).is_none());
    assert_eq!(gemini.requests().len(), 1);

    quiz.select(&mut session, 1).await.unwrap();
    assert_eq!(session.selected_index(), 1);
    assert!(session.image(1).is_some());
    assert_eq!(gemini.requests().len(), 2);

    quiz.select(&mut session, 0).await.unwrap();
    assert_eq!(gemini.requests().len(), 2);
    assert!(quiz.select(&mut session, 5).await.is_err());
}
