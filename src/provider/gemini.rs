//! Gemini provider via the Generative Language API `generateContent` endpoint (text-only).

use super::{build_provider_http_client, map_http_error, map_status_error, TextProvider};
use crate::config::Credential;
use crate::error::GenerationError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini provider client
pub struct GeminiClient {
    client: Client,
    model: String,
    api_key: Credential,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(
        model: String,
        api_key: Credential,
        endpoint: String,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = build_provider_http_client(connect_timeout, request_timeout)?;
        Ok(Self {
            client,
            model,
            api_key,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[async_trait]
impl TextProvider for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(map_http_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(map_status_error(status, &error_text));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::ProviderError(format!("Failed to parse response: {}", e)))?;

        completion
            .candidates
            .into_iter()
            .find_map(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| GenerationError::ProviderError("No candidates in response".to_string()))
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
