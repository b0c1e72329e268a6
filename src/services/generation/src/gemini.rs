use crate::config::GeminiConfig;
use crate::error::{AppError, PipelineError};
use boostly_shared::{ChatRole, ConversationState};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Minimal completion client: one request, one response. No retries and no
/// backoff: every failure is surfaced distinctly and recovered downstream
/// by the fallback synthesizer, never here.
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

/// Per-call generation parameters.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiResponseContent,
    #[serde(rename = "finishReason")]
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: String,
}

impl CompletionClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::InternalServerError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn has_credentials(&self) -> bool {
        self.config.has_api_key()
    }

    /// Send one prompt and return the raw completion text.
    pub async fn complete(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, PipelineError> {
        let contents = vec![GeminiContent {
            role: None,
            parts: vec![GeminiPart {
                text: prompt.to_string(),
            }],
        }];
        self.send(contents, params).await
    }

    /// Send a full conversation plus the new user message and return the
    /// assistant's reply text. The caller owns the conversation value.
    pub async fn chat(
        &self,
        conversation: &ConversationState,
        message: &str,
        params: GenerationParams,
    ) -> Result<String, PipelineError> {
        self.send(chat_contents(conversation, message), params).await
    }

    async fn send(
        &self,
        contents: Vec<GeminiContent>,
        params: GenerationParams,
    ) -> Result<String, PipelineError> {
        // Checked before any network activity (Scenario: missing key must
        // not produce a request).
        if !self.config.has_api_key() {
            return Err(PipelineError::CredentialMissing);
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.api_url.trim_end_matches('/'),
            self.config.model,
            self.config.api_key
        );

        let request_body = GeminiRequest {
            contents,
            generation_config: GeminiGenerationConfig {
                temperature: params.temperature,
                max_output_tokens: params.max_output_tokens,
            },
        };

        debug!(model = %self.config.model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| PipelineError::TransportFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(PipelineError::TransportFailure(format!(
                "upstream returned {}: {}",
                status, error_text
            )));
        }

        let completion: GeminiResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::TransportFailure(format!("unreadable response: {}", e)))?;

        completion
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| {
                PipelineError::TransportFailure("response contained no candidates".to_string())
            })
    }
}

/// Conversation turns in the wire format: prior turns with their roles
/// (`user`/`model`), then the new user message.
fn chat_contents(conversation: &ConversationState, message: &str) -> Vec<GeminiContent> {
    let mut contents: Vec<GeminiContent> = conversation
        .turns
        .iter()
        .map(|turn| GeminiContent {
            role: Some(
                match turn.role {
                    ChatRole::User => "user",
                    ChatRole::Assistant => "model",
                }
                .to_string(),
            ),
            parts: vec![GeminiPart {
                text: turn.content.clone(),
            }],
        })
        .collect();

    contents.push(GeminiContent {
        role: Some("user".to_string()),
        parts: vec![GeminiPart {
            text: message.to_string(),
        }],
    });

    contents
}
