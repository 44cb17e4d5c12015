//! HTTP surface for the generation gateway
//!
//! POST /v1/generate - `{ "prompt": string }` to `{ "text": string }` or
//!                     `{ "error": ErrorKind, "message": string }`
//! GET  /health      - liveness plus gateway state

use crate::error::{ApiError, ErrorKind, GenerationError};
use crate::gateway::{GenerationGateway, GenerationResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Request body for POST /v1/generate. A missing prompt is an empty prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
}

/// Response body for POST /v1/generate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Text { text: String },
    Error { error: ErrorKind, message: String },
}

impl GenerateResponse {
    pub fn from_result(result: Result<GenerationResult, GenerationError>) -> Self {
        match result {
            Ok(result) => GenerateResponse::Text {
                text: result.into_text(),
            },
            Err(e) => GenerateResponse::from_error(&e),
        }
    }

    pub fn from_error(err: &GenerationError) -> Self {
        GenerateResponse::Error {
            error: err.kind(),
            message: err.to_string(),
        }
    }
}

/// HTTP status for a generation failure
pub fn status_for(err: &GenerationError) -> StatusCode {
    match err {
        GenerationError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        GenerationError::ProviderUnavailable(_) | GenerationError::Cancelled => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        GenerationError::ProviderRateLimit(_) => StatusCode::TOO_MANY_REQUESTS,
        GenerationError::ProviderError(_)
        | GenerationError::ProviderRequestFailed(_)
        | GenerationError::ProviderAuthFailed(_)
        | GenerationError::ProviderModelNotFound(_)
        | GenerationError::ProviderTimeout(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Shared state: one gateway for every request, one token for shutdown.
pub struct AppState {
    pub gateway: Arc<GenerationGateway>,
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(gateway: Arc<GenerationGateway>) -> Self {
        Self {
            gateway,
            shutdown: CancellationToken::new(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/generate", post(generate))
        .route("/health", get(health))
        .with_state(state)
}

/// POST /v1/generate
async fn generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> (StatusCode, Json<GenerateResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let err = GenerationError::InvalidArgument(rejection.body_text());
            return (status_for(&err), Json(GenerateResponse::from_error(&err)));
        }
    };

    let result = state
        .gateway
        .generate_with_cancellation(&request.prompt, &state.shutdown)
        .await;

    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(e) => status_for(e),
    };
    (status, Json(GenerateResponse::from_result(result)))
}

/// GET /health - always 200 while the process is alive
async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "gateway": state.gateway.state(),
    }))
}

/// Serve until Ctrl-C; in-flight generations resolve as `Cancelled` on shutdown.
pub async fn serve(gateway: Arc<GenerationGateway>, bind: SocketAddr) -> Result<(), ApiError> {
    let state = Arc::new(AppState::new(gateway));
    let shutdown = state.shutdown.clone();

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, "Generation gateway listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
            }
            shutdown.cancel();
        })
        .await?;

    info!("Generation gateway stopped");
    Ok(())
}
