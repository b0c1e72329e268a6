//! Required-field validation for extracted payloads
//!
//! Partial success is total failure: the typed result is only constructed
//! once every required field is present as a non-empty string. A field that
//! is absent, non-string, or empty puts its name into `IncompleteResponse`
//! and the caller falls back. No coercion, no per-field defaulting.

use crate::error::PipelineError;
use boostly_shared::{
    EmailContent, GeneratedContent, GenerationKind, InsightsContent, WebsiteContent,
};
use serde_json::{Map, Value};

/// Check the payload against the required fields for `kind` and build the
/// typed content. Empty strings count as missing: a deliberate choice the
/// dashboard relies on (a blank panel is worse than a labeled failure).
pub fn validate_payload(
    kind: GenerationKind,
    payload: &Map<String, Value>,
) -> Result<GeneratedContent, PipelineError> {
    let missing: Vec<String> = kind
        .required_fields()
        .iter()
        .filter(|field| {
            payload
                .get(**field)
                .and_then(Value::as_str)
                .map(|value| value.trim().is_empty())
                .unwrap_or(true)
        })
        .map(|field| field.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(PipelineError::IncompleteResponse(missing));
    }

    Ok(build_content(kind, payload))
}

fn build_content(kind: GenerationKind, payload: &Map<String, Value>) -> GeneratedContent {
    match kind {
        GenerationKind::Website => GeneratedContent::Website(WebsiteContent {
            html: field(payload, "html"),
            css: field(payload, "css"),
            title: field(payload, "title"),
            description: field(payload, "description"),
        }),
        GenerationKind::Email => GeneratedContent::Email(EmailContent {
            subject: field(payload, "subject"),
            content: field(payload, "content"),
            description: field(payload, "description"),
        }),
        GenerationKind::Insights => GeneratedContent::Insights(InsightsContent {
            competitors: field(payload, "competitors"),
            seo: field(payload, "seo"),
            pros_and_cons: field(payload, "prosAndCons"),
            market_relevance: field(payload, "marketRelevance"),
            future_score: field(payload, "futureScore"),
        }),
    }
}

// Validation has already guaranteed presence; the default here is
// unreachable and exists only to keep this total.
fn field(payload: &Map<String, Value>, name: &str) -> String {
    payload
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
