//! Structured-generation orchestration
//!
//! One invocation runs prompt → completion → extraction → validation and
//! returns exactly one object matching the contract shape for the request
//! kind. Any stage failure is recovered into a fallback result here, at
//! the pipeline boundary: callers never see an error and never see a
//! partially-filled object.

use crate::error::PipelineError;
use crate::extract::extract_json_object;
use crate::fallback;
use crate::gemini::{CompletionClient, GenerationParams};
use crate::profile::{fetch_or_none, ProfileStore};
use crate::prompt;
use crate::types::{ChatRequest, GenerationRequest};
use crate::validate::validate_payload;
use boostly_shared::{classify, BusinessProfile, ConversationState, GeneratedContent, GenerationKind};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

// Output budgets per kind. Website pages are by far the largest payload.
const WEBSITE_TOKEN_BUDGET: u32 = 8192;
const EMAIL_TOKEN_BUDGET: u32 = 2048;
const INSIGHTS_TOKEN_BUDGET: u32 = 4096;
const CHAT_TOKEN_BUDGET: u32 = 1024;

#[derive(Clone)]
pub struct GenerationPipeline {
    completion: CompletionClient,
    profiles: Arc<dyn ProfileStore>,
    max_output_tokens: u32,
    temperature: f32,
}

/// Result of one pipeline invocation. `content` always matches the
/// contract shape; `error` records which stage failed when the content is
/// a fallback.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub content: GeneratedContent,
    pub error: Option<PipelineError>,
}

impl GenerationOutcome {
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug)]
pub struct ChatOutcome {
    pub reply: String,
    pub conversation: ConversationState,
    pub fallback: bool,
}

impl GenerationPipeline {
    pub fn new(
        completion: CompletionClient,
        profiles: Arc<dyn ProfileStore>,
        max_output_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            completion,
            profiles,
            max_output_tokens,
            temperature,
        }
    }

    pub fn model(&self) -> &str {
        self.completion.model()
    }

    pub fn has_credentials(&self) -> bool {
        self.completion.has_credentials()
    }

    /// Run the full pipeline for one request. Total by construction: every
    /// failure path lands in the fallback synthesizer.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        user_id: Option<Uuid>,
    ) -> GenerationOutcome {
        let kind = request.kind();
        let profile = fetch_or_none(self.profiles.as_ref(), user_id).await;
        let prompt = build_prompt(request, profile.as_ref());

        match self.run(kind, &prompt).await {
            Ok(content) => {
                info!(kind = kind.as_str(), "Generation succeeded");
                GenerationOutcome {
                    content,
                    error: None,
                }
            }
            Err(error) => {
                warn!(
                    kind = kind.as_str(),
                    code = error.code(),
                    "Generation failed, synthesizing fallback: {}",
                    error
                );
                GenerationOutcome {
                    content: fallback::synthesize(kind, &error),
                    error: Some(error),
                }
            }
        }
    }

    async fn run(
        &self,
        kind: GenerationKind,
        prompt: &str,
    ) -> Result<GeneratedContent, PipelineError> {
        let raw = self.completion.complete(prompt, self.params_for(kind)).await?;
        let payload = extract_json_object(&raw)?;
        validate_payload(kind, &payload)
    }

    /// One chat turn. The conversation value is caller-owned: it comes in
    /// with the request and goes back out extended by this exchange, on
    /// the failure path too.
    pub async fn chat(&self, request: ChatRequest) -> ChatOutcome {
        let mut conversation = request.conversation.unwrap_or_default();

        let params = GenerationParams {
            max_output_tokens: CHAT_TOKEN_BUDGET.min(self.max_output_tokens),
            temperature: self.temperature,
        };

        match self.completion.chat(&conversation, &request.message, params).await {
            Ok(reply) => {
                conversation.push_user(request.message);
                conversation.push_assistant(reply.clone());
                ChatOutcome {
                    reply,
                    conversation,
                    fallback: false,
                }
            }
            Err(error) => {
                warn!(code = error.code(), "Chat turn failed: {}", error);
                let reply = fallback::chat_reply(&error);
                conversation.push_user(request.message);
                conversation.push_assistant(reply.clone());
                ChatOutcome {
                    reply,
                    conversation,
                    fallback: true,
                }
            }
        }
    }

    fn params_for(&self, kind: GenerationKind) -> GenerationParams {
        let budget = match kind {
            GenerationKind::Website => WEBSITE_TOKEN_BUDGET,
            GenerationKind::Email => EMAIL_TOKEN_BUDGET,
            GenerationKind::Insights => INSIGHTS_TOKEN_BUDGET,
        };

        GenerationParams {
            max_output_tokens: budget.min(self.max_output_tokens),
            temperature: self.temperature,
        }
    }
}

fn build_prompt(request: &GenerationRequest, profile: Option<&BusinessProfile>) -> String {
    match request {
        GenerationRequest::Website(req) => {
            let defaults = classify(&req.description).cosmetic_defaults();
            prompt::website_prompt(req, profile, &defaults)
        }
        GenerationRequest::Email(req) => prompt::email_prompt(req, profile),
        GenerationRequest::Insights(req) => prompt::insights_prompt(req, profile),
    }
}
