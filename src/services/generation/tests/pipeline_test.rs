//! End-to-end pipeline tests with a mocked completion endpoint.

use generation_service::config::GeminiConfig;
use generation_service::gemini::CompletionClient;
use generation_service::pipeline::GenerationPipeline;
use generation_service::profile::NullProfileStore;
use generation_service::types::{
    ChatRequest, EmailRequest, GenerationRequest, InsightRequest, WebsiteRequest,
};
use generation_service::PipelineError;
use boostly_shared::{ConversationState, GeneratedContent};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pipeline_for(api_url: &str, api_key: &str) -> GenerationPipeline {
    let config = GeminiConfig {
        api_key: api_key.to_string(),
        api_url: api_url.to_string(),
        model: "test-model".to_string(),
        max_output_tokens: 8192,
        temperature: 0.0,
        timeout_seconds: 5,
    };
    let completion = CompletionClient::new(config).expect("build completion client");
    GenerationPipeline::new(completion, Arc::new(NullProfileStore), 8192, 0.0)
}

fn completion_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

fn website_request() -> GenerationRequest {
    GenerationRequest::Website(WebsiteRequest {
        description: "cozy bakery downtown".to_string(),
        persona: Some("local families".to_string()),
    })
}

#[tokio::test]
async fn prose_wrapped_website_json_validates() {
    let server = MockServer::start().await;
    let raw = "Here you go:\n{\"html\":\"<div>x</div>\",\"css\":\"body{}\",\"title\":\"T\",\"description\":\"D\"}";

    Mock::given(method("POST"))
        .and(path("/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(raw)))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server.uri(), "test-key");
    let outcome = pipeline.generate(&website_request(), None).await;

    assert!(!outcome.is_fallback());
    match outcome.content {
        GeneratedContent::Website(site) => {
            assert_eq!(site.html, "<div>x</div>");
            assert_eq!(site.css, "body{}");
            assert_eq!(site.title, "T");
            assert_eq!(site.description, "D");
        }
        other => panic!("unexpected content: {:?}", other),
    }
}

#[tokio::test]
async fn braceless_output_falls_back_with_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/test-model:generateContent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body("no braces here at all")),
        )
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server.uri(), "test-key");
    let outcome = pipeline.generate(&website_request(), None).await;

    assert_eq!(outcome.error, Some(PipelineError::NoJsonFound));
    match outcome.content {
        GeneratedContent::Website(site) => {
            for field in [&site.html, &site.css, &site.title, &site.description] {
                assert!(field.contains("Invalid Response"), "field was: {}", field);
            }
        }
        other => panic!("unexpected content: {:?}", other),
    }
}

#[tokio::test]
async fn trailing_comma_email_parses_then_fails_validation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/test-model:generateContent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body(r#"{"subject":"Hi",}"#)),
        )
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server.uri(), "test-key");
    let request = GenerationRequest::Email(EmailRequest {
        objective: "say hi".to_string(),
        business_type: None,
        tone: None,
        email_type: "welcome".to_string(),
    });
    let outcome = pipeline.generate(&request, None).await;

    // The trailing comma is repaired, so this must reach the validator and
    // fail on the missing fields, not on JSON parsing.
    match &outcome.error {
        Some(PipelineError::IncompleteResponse(fields)) => {
            assert!(fields.contains(&"content".to_string()));
        }
        other => panic!("expected IncompleteResponse, got {:?}", other),
    }

    match outcome.content {
        GeneratedContent::Email(email) => {
            assert!(email.subject.contains("Incomplete Response"));
            assert!(email.content.contains("Incomplete Response"));
            assert!(email.content.contains("content"));
        }
        other => panic!("unexpected content: {:?}", other),
    }
}

#[tokio::test]
async fn missing_api_key_never_reaches_the_network() {
    let server = MockServer::start().await;

    // Zero expected requests: the credential check happens before any
    // network activity.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("{}")))
        .expect(0)
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server.uri(), "");
    let request = GenerationRequest::Insights(InsightRequest {
        business_description: "mobile dog grooming".to_string(),
    });
    let outcome = pipeline.generate(&request, None).await;

    assert_eq!(outcome.error, Some(PipelineError::CredentialMissing));
    match outcome.content {
        GeneratedContent::Insights(insights) => {
            assert!(insights.competitors.contains("API Key Missing"));
            assert!(insights.future_score.contains("API Key Missing"));
        }
        other => panic!("unexpected content: {:?}", other),
    }

    server.verify().await;
}

#[tokio::test]
async fn upstream_error_status_falls_back_as_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server.uri(), "test-key");
    let outcome = pipeline.generate(&website_request(), None).await;

    assert!(outcome.is_fallback());
    match &outcome.error {
        Some(PipelineError::TransportFailure(detail)) => {
            assert!(detail.contains("500"));
        }
        other => panic!("expected TransportFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn insights_with_trailing_comma_repair_still_validates() {
    let server = MockServer::start().await;
    let raw = r#"{"competitors":"a","seo":"b","prosAndCons":"c","marketRelevance":"d","futureScore":"e",}"#;

    Mock::given(method("POST"))
        .and(path("/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(raw)))
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server.uri(), "test-key");
    let request = GenerationRequest::Insights(InsightRequest {
        business_description: "mobile dog grooming".to_string(),
    });
    let outcome = pipeline.generate(&request, None).await;

    assert!(!outcome.is_fallback());
    match outcome.content {
        GeneratedContent::Insights(insights) => {
            assert_eq!(insights.pros_and_cons, "c");
            assert_eq!(insights.future_score, "e");
        }
        other => panic!("unexpected content: {:?}", other),
    }
}

#[tokio::test]
async fn chat_turn_extends_caller_owned_conversation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(
            "Fresh bread daily, baked before sunrise.",
        )))
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server.uri(), "test-key");
    let mut conversation = ConversationState::new();
    conversation.push_user("I run a bakery");
    conversation.push_assistant("Great, how can I help?");

    let outcome = pipeline
        .chat(ChatRequest {
            message: "write a tagline".to_string(),
            conversation: Some(conversation),
        })
        .await;

    assert!(!outcome.fallback);
    assert_eq!(outcome.reply, "Fresh bread daily, baked before sunrise.");
    assert_eq!(outcome.conversation.len(), 4);
    assert_eq!(outcome.conversation.turns[2].content, "write a tagline");
    assert_eq!(outcome.conversation.turns[3].content, outcome.reply);
}
