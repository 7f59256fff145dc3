#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use chat_gateway::config::{CorsConfig, GatewayConfig, GroqConfig};
use chat_gateway::services::providers::groq::GroqChatProvider;
use chat_gateway::services::ChatProvider;
use chat_gateway::startup::Application;
use chat_gateway::{build_router, AppState};
use http_body_util::BodyExt;
use secrecy::Secret;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_API_KEY: &str = "test-api-key";
pub const UPSTREAM_PATH: &str = "/openai/v1/chat/completions";

pub fn test_config(api_url: &str) -> GatewayConfig {
    GatewayConfig {
        common: service_core::config::Config { port: 0 },
        service_name: "chat-gateway-test".to_string(),
        log_level: "error".to_string(),
        otlp_endpoint: None,
        groq: GroqConfig {
            api_key: Secret::new(TEST_API_KEY.to_string()),
            api_url: api_url.to_string(),
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    }
}

/// Router whose Groq provider points at `upstream_base` (a wiremock server).
pub fn groq_router(upstream_base: &str) -> axum::Router {
    let config = test_config(&format!("{}{}", upstream_base, UPSTREAM_PATH));
    let provider: Arc<dyn ChatProvider> = Arc::new(GroqChatProvider::new(config.groq.clone()));
    build_router(AppState { config, provider })
}

pub fn provider_router(provider: Arc<dyn ChatProvider>) -> axum::Router {
    build_router(AppState {
        config: test_config("http://127.0.0.1:9"),
        provider,
    })
}

pub async fn post_json(
    router: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Failed to parse JSON")
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the full server on a random port.
    pub async fn spawn(api_url: &str) -> Self {
        let app = Application::build(test_config(api_url))
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();
        let health_url = format!("http://127.0.0.1:{}/health", port);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
        }
    }
}
