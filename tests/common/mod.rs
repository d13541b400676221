//! Local mock of an OpenAI-compatible provider.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use petmatch::{HttpProviderResolver, OpenAiCompatibleClient};

/// A request as the mock saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct MockProvider {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockProvider {
    /// Serves `body` with `status` on every chat-completions POST.
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body: body.into(),
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/v1/chat/completions", post(handle))
            .route("/v1beta/models/{model}", post(handle))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock provider");
        let addr = listener.local_addr().expect("mock address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock provider");
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// 200 response whose first choice carries `content`.
    pub async fn replying(content: &str) -> Self {
        Self::start(StatusCode::OK, completion(content).to_string()).await
    }

    pub fn chat_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("requests lock").clone()
    }
}

async fn handle(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    state.requests.lock().expect("requests lock").push(Recorded {
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body,
    });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

/// URL on which nothing listens.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let port = listener.local_addr().expect("probe address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn resolver_with_hosted(hosted_endpoint: &str) -> Arc<HttpProviderResolver> {
    let client = reqwest::Client::new();
    let hosted = OpenAiCompatibleClient::hosted(client.clone(), hosted_endpoint, "");
    Arc::new(HttpProviderResolver::new(client, hosted))
}

pub fn pet_json(name: &str, english: &str) -> Value {
    json!({
        "name": name,
        "englishName": english,
        "species": "狗",
        "description": format!("{name}的描述"),
        "matchReason": "很适合你",
        "careLevel": "中",
        "exerciseNeeds": "每天散步",
        "estimatedCost": "每月500元",
        "alternatives": [{ "name": "柴犬", "reason": "类似" }],
        "careGuide": {
            "diet": "狗粮", "grooming": "梳毛", "exercise": "散步",
            "health": "体检", "training": "奖励", "dailySchedule": "早晚遛"
        }
    })
}

pub fn recommendations_json(names: &[(&str, &str)]) -> String {
    json!({
        "recommendations": names.iter().map(|(n, e)| pet_json(n, e)).collect::<Vec<_>>()
    })
    .to_string()
}
