//! HTTP surface tests against a live listener.

use super::test_utils::EchoProvider;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use storytime::api::{router, AppState};
use storytime::{Client, GenerationGateway};

async fn spawn_server(client: Client) -> SocketAddr {
    let gateway = Arc::new(GenerationGateway::new(client, Duration::from_secs(10)));
    let app = router(Arc::new(AppState::new(gateway)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn post_generate(addr: SocketAddr, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("http://{}/v1/generate", addr))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_generate_over_http() {
    let addr = spawn_server(Client::Configured(Arc::new(EchoProvider::default()))).await;

    let (status, body) = post_generate(addr, json!({ "prompt": "Tell me about Stoicism" })).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "text": "A story about: Tell me about Stoicism" }));
}

#[tokio::test]
async fn test_empty_prompt_over_http() {
    let addr = spawn_server(Client::Configured(Arc::new(EchoProvider::default()))).await;

    let (status, body) = post_generate(addr, json!({ "prompt": "" })).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "InvalidArgument");
}

#[tokio::test]
async fn test_unavailable_over_http() {
    let addr = spawn_server(Client::Unconfigured).await;

    let (status, body) = post_generate(addr, json!({ "prompt": "Tell me about Stoicism" })).await;
    assert_eq!(status, 503);
    assert_eq!(body["error"], "ProviderUnavailable");

    let health: Value = reqwest::get(format!("http://{}/health", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, json!({ "status": "ok", "gateway": "unavailable" }));
}
