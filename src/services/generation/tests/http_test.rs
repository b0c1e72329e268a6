//! Router-level tests: the HTTP surface without a running listener.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use generation_service::config::Config;
use generation_service::gemini::CompletionClient;
use generation_service::pipeline::GenerationPipeline;
use generation_service::profile::NullProfileStore;
use generation_service::server::{create_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceExt;

/// Keyless state: every generation degrades to a fallback result, which is
/// exactly what the HTTP layer must still serve with a 200.
fn keyless_state() -> AppState {
    let config = Arc::new(Config::default());
    let completion = CompletionClient::new(config.gemini.clone()).expect("build client");
    let pipeline = Arc::new(GenerationPipeline::new(
        completion,
        Arc::new(NullProfileStore),
        config.gemini.max_output_tokens,
        config.gemini.temperature,
    ));

    AppState {
        config,
        pipeline,
        started_at: Instant::now(),
    }
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse body")
}

#[tokio::test]
async fn health_reports_missing_credentials() {
    let app = create_router(keyless_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("route request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "generation-service");
    assert_eq!(body["credentials_configured"], false);
}

#[tokio::test]
async fn classify_returns_label_and_cosmetics() {
    let app = create_router(keyless_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/classify")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"description":"cozy bakery downtown"}"#))
                .expect("build request"),
        )
        .await
        .expect("route request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["business_type"], "bakery");
    assert!(body["primary_color"].as_str().is_some_and(|c| c.starts_with('#')));
    assert!(body["stock_topics"].as_array().is_some_and(|t| !t.is_empty()));
    assert!(body["placeholder_image"]
        .as_str()
        .is_some_and(|uri| uri.starts_with("data:image/svg+xml;base64,")));
}

#[tokio::test]
async fn generation_without_key_is_still_a_200_with_fallback_body() {
    let app = create_router(keyless_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/generate/website")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"description":"cozy bakery downtown","persona":"local families"}"#,
                ))
                .expect("build request"),
        )
        .await
        .expect("route request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["kind"], "website");
    assert_eq!(body["fallback"], true);
    assert_eq!(body["error_code"], "CREDENTIAL_MISSING");

    // The result must carry the full website shape even in fallback.
    for field in ["html", "css", "title", "description"] {
        assert!(
            body["result"][field]
                .as_str()
                .is_some_and(|v| v.contains("API Key Missing")),
            "field {} missing diagnostic",
            field
        );
    }
}

#[tokio::test]
async fn invalid_user_id_header_is_a_bad_request() {
    let app = create_router(keyless_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/generate/email")
                .header("content-type", "application/json")
                .header("x-user-id", "not-a-uuid")
                .body(Body::from(
                    r#"{"objective":"say hi","email_type":"welcome"}"#,
                ))
                .expect("build request"),
        )
        .await
        .expect("route request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn chat_without_key_returns_fallback_reply_and_conversation() {
    let app = create_router(keyless_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/chat")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"message":"write a tagline"}"#))
                .expect("build request"),
        )
        .await
        .expect("route request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["fallback"], true);
    assert!(body["reply"].as_str().is_some_and(|r| r.contains("API Key Missing")));
    assert_eq!(body["conversation"]["turns"].as_array().map(|t| t.len()), Some(2));
}

#[tokio::test]
async fn capabilities_list_the_generation_kinds() {
    let app = create_router(keyless_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/capabilities")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("route request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let kinds = body["generation_kinds"].as_array().expect("kinds array");
    assert_eq!(kinds.len(), 3);
    assert_eq!(body["business_types"].as_array().map(|b| b.len()), Some(20));
}
