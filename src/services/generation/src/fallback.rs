//! Fallback synthesis: every failure becomes displayable data
//!
//! This module is the entire failure-handling policy of the pipeline. Any
//! stage error is converted into a result of the exact shape a success
//! would have, with each field carrying the stage's diagnostic text, so the
//! dashboard renders it through the same components with no special-casing.

use crate::error::PipelineError;
use base64::Engine;
use boostly_shared::{
    CosmeticDefaults, EmailContent, GeneratedContent, GenerationKind, InsightsContent,
    WebsiteContent,
};

/// Produce a same-shape result for `kind` with every field set to the
/// error's diagnostic message. Never partially filled: either the real
/// pipeline output or this, nothing in between.
pub fn synthesize(kind: GenerationKind, error: &PipelineError) -> GeneratedContent {
    let diagnostic = error.diagnostic();

    match kind {
        GenerationKind::Website => GeneratedContent::Website(WebsiteContent {
            html: diagnostic.clone(),
            css: diagnostic.clone(),
            title: diagnostic.clone(),
            description: diagnostic,
        }),
        GenerationKind::Email => GeneratedContent::Email(EmailContent {
            subject: diagnostic.clone(),
            content: diagnostic.clone(),
            description: diagnostic,
        }),
        GenerationKind::Insights => GeneratedContent::Insights(InsightsContent {
            competitors: diagnostic.clone(),
            seo: diagnostic.clone(),
            pros_and_cons: diagnostic.clone(),
            market_relevance: diagnostic.clone(),
            future_score: diagnostic,
        }),
    }
}

/// Canned assistant reply for a failed chat turn.
pub fn chat_reply(error: &PipelineError) -> String {
    format!(
        "I couldn't process that message right now. {}",
        error.diagnostic()
    )
}

/// Static placeholder image as a base64 SVG data URI, colored with the
/// label's palette. Purely cosmetic: stands in until real imagery is
/// chosen, and carries no information the pipeline depends on.
pub fn placeholder_image(label: &str, defaults: &CosmeticDefaults) -> String {
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="360" viewBox="0 0 640 360"><rect width="640" height="360" fill="{}"/><rect x="20" y="20" width="600" height="320" fill="none" stroke="{}" stroke-width="4"/><text x="320" y="190" font-family="sans-serif" font-size="28" fill="{}" text-anchor="middle">{}</text></svg>"##,
        defaults.primary_color, defaults.accent_color, defaults.accent_color, label
    );

    format!(
        "data:image/svg+xml;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(svg.as_bytes())
    )
}
