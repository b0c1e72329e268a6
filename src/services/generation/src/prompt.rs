//! Prompt builders for the structured-generation kinds
//!
//! Pure functions of their inputs: the same request (and profile) always
//! yields the same prompt text. Each prompt embeds the strict JSON output
//! schema for its kind and the formatting constraints the extractor relies
//! on. Empty descriptions are the caller's problem: the dashboard gates
//! generation on non-empty input, and these builders do not defend.

use crate::types::{EmailRequest, InsightRequest, WebsiteRequest};
use boostly_shared::{BusinessProfile, CosmeticDefaults};

/// Website generation prompt. The palette hint comes from the classifier's
/// cosmetic defaults and only influences styling, never structure.
pub fn website_prompt(
    request: &WebsiteRequest,
    profile: Option<&BusinessProfile>,
    defaults: &CosmeticDefaults,
) -> String {
    let mut prompt = format!(
        r#"You are a web designer generating a single-page marketing website.

Business description: {}
"#,
        request.description.trim()
    );

    if let Some(persona) = &request.persona {
        prompt.push_str(&format!("Target persona: {}\n", persona.trim()));
    }

    prompt.push_str(&profile_context(profile));

    prompt.push_str(&format!(
        r#"
Style guidance: use {} as the primary color and {} as the accent color.

Respond with a strict JSON object containing exactly these fields:
{{
    "html": "complete HTML body markup for the landing page",
    "css": "stylesheet for the markup above",
    "title": "page title, at most 60 characters",
    "description": "meta description, one or two sentences"
}}

Respond with ONLY the JSON object. No markdown fences, no commentary, no extra prose."#,
        defaults.primary_color, defaults.accent_color
    ));

    prompt
}

pub fn email_prompt(request: &EmailRequest, profile: Option<&BusinessProfile>) -> String {
    let mut prompt = format!(
        r#"You are a marketing copywriter drafting a {} email.

Objective: {}
"#,
        request.email_type.trim(),
        request.objective.trim()
    );

    if let Some(business_type) = &request.business_type {
        prompt.push_str(&format!("Business type: {}\n", business_type.trim()));
    }
    if let Some(tone) = &request.tone {
        prompt.push_str(&format!("Tone: {}\n", tone.trim()));
    }

    prompt.push_str(&profile_context(profile));

    prompt.push_str(
        r#"
Respond with a strict JSON object containing exactly these fields:
{
    "subject": "email subject line",
    "content": "full email body, plain text with paragraph breaks",
    "description": "one sentence describing when to send this email"
}

Respond with ONLY the JSON object. No markdown fences, no commentary, no extra prose."#,
    );

    prompt
}

pub fn insights_prompt(request: &InsightRequest, profile: Option<&BusinessProfile>) -> String {
    let mut prompt = format!(
        r#"You are a market analyst producing a concise business insight report.

Business description: {}
"#,
        request.business_description.trim()
    );

    prompt.push_str(&profile_context(profile));

    prompt.push_str(
        r#"
Respond with a strict JSON object containing exactly these fields:
{
    "competitors": "the main competitor categories and how to stand out",
    "seo": "three concrete SEO opportunities for this business",
    "prosAndCons": "strengths and weaknesses of this business model",
    "marketRelevance": "current demand and market trends for this offering",
    "futureScore": "a 1-10 outlook score with a one-line justification"
}

Respond with ONLY the JSON object. No markdown fences, no commentary, no extra prose."#,
    );

    prompt
}

/// Stored business context, rendered as a block of labelled lines. Empty
/// when there is no profile or the profile carries no useful fields.
fn profile_context(profile: Option<&BusinessProfile>) -> String {
    let Some(profile) = profile else {
        return String::new();
    };
    if !profile.has_context() && profile.name.is_empty() {
        return String::new();
    }

    let mut context = String::from("\nStored business profile:\n");
    if !profile.name.is_empty() {
        context.push_str(&format!("- Name: {}\n", profile.name));
    }
    if let Some(business_type) = &profile.business_type {
        context.push_str(&format!("- Type: {}\n", business_type));
    }
    if let Some(industry) = &profile.industry {
        context.push_str(&format!("- Industry: {}\n", industry));
    }
    if let Some(tone) = &profile.tone {
        context.push_str(&format!("- Preferred tone: {}\n", tone));
    }
    if let Some(goal) = &profile.goal {
        context.push_str(&format!("- Goal: {}\n", goal));
    }
    if !profile.services.is_empty() {
        context.push_str(&format!("- Services: {}\n", profile.services.join(", ")));
    }

    context
}
