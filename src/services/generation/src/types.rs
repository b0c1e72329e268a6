use boostly_shared::{BusinessType, ConversationState, GeneratedContent, GenerationKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request types

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteRequest {
    pub description: String,
    pub persona: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRequest {
    pub objective: String,
    pub business_type: Option<String>,
    pub tone: Option<String>,
    pub email_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightRequest {
    pub business_description: String,
}

/// One structured-generation request, constructed once per user action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationRequest {
    Website(WebsiteRequest),
    Email(EmailRequest),
    Insights(InsightRequest),
}

impl GenerationRequest {
    pub fn kind(&self) -> GenerationKind {
        match self {
            GenerationRequest::Website(_) => GenerationKind::Website,
            GenerationRequest::Email(_) => GenerationKind::Email,
            GenerationRequest::Insights(_) => GenerationKind::Insights,
        }
    }
}

// Response types

/// Envelope around a generated result. `result` always matches the shape
/// contract for `kind`; `fallback` plus `error_code` is the in-band
/// indicator the dashboard inspects to distinguish success from fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub id: Uuid,
    pub kind: GenerationKind,
    pub fallback: bool,
    pub error_code: Option<String>,
    pub result: GeneratedContent,
    pub model: String,
    pub processing_time_ms: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation: Option<ConversationState>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub conversation: ConversationState,
    pub fallback: bool,
    pub model: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyRequest {
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub business_type: BusinessType,
    pub primary_color: String,
    pub accent_color: String,
    pub stock_topics: Vec<String>,
    /// Static placeholder usable until real imagery is chosen.
    pub placeholder_image: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub model: String,
    pub credentials_configured: bool,
    pub profile_service_configured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_is_tagged_by_kind() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{"kind":"email","objective":"announce the summer sale","email_type":"promotional"}"#,
        )
        .expect("parse tagged request");

        assert_eq!(request.kind(), GenerationKind::Email);
        match request {
            GenerationRequest::Email(email) => {
                assert_eq!(email.objective, "announce the summer sale");
                assert!(email.tone.is_none());
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn chat_request_defaults_to_fresh_conversation() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"message":"hello"}"#).expect("parse chat request");
        assert!(request.conversation.is_none());
    }
}
