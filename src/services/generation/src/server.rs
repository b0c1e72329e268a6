use crate::config::Config;
use crate::error::{AppError, Result};
use crate::fallback;
use crate::pipeline::GenerationPipeline;
use crate::types::*;
use axum::{
    extract::State,
    http::HeaderMap,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use boostly_shared::classify;
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Arc<GenerationPipeline>,
    pub started_at: Instant,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/capabilities", get(get_capabilities))
        .route("/v1/generate/website", post(generate_website))
        .route("/v1/generate/email", post(generate_email))
        .route("/v1/generate/insights", post(generate_insights))
        .route("/v1/chat", post(chat))
        .route("/v1/classify", post(classify_business))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: "generation-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        model: state.pipeline.model().to_string(),
        credentials_configured: state.pipeline.has_credentials(),
        profile_service_configured: state.config.profile_service.base_url.is_some(),
    })
}

async fn get_capabilities(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "generation-service",
        "version": env!("CARGO_PKG_VERSION"),
        "ai_model": state.pipeline.model(),
        "generation_kinds": ["website", "email", "insights"],
        "business_types": [
            "restaurant", "bakery", "tech", "fitness", "beauty", "consulting",
            "retail", "healthcare", "education", "real_estate", "automotive",
            "construction", "legal", "financial", "travel", "pet",
            "home_services", "creative", "food_delivery", "coffee"
        ],
        "features": [
            "structured_generation",
            "fallback_synthesis",
            "business_classification",
            "conversational_assistant",
            "profile_enriched_prompts"
        ]
    }))
}

async fn generate_website(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<WebsiteRequest>,
) -> Result<Json<GenerationResponse>> {
    run_generation(&state, &headers, GenerationRequest::Website(request)).await
}

async fn generate_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<EmailRequest>,
) -> Result<Json<GenerationResponse>> {
    run_generation(&state, &headers, GenerationRequest::Email(request)).await
}

async fn generate_insights(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<InsightRequest>,
) -> Result<Json<GenerationResponse>> {
    run_generation(&state, &headers, GenerationRequest::Insights(request)).await
}

/// Shared generation handler body. Always responds 200 with a well-shaped
/// result; fallback is signalled in-band, never as an HTTP error.
async fn run_generation(
    state: &AppState,
    headers: &HeaderMap,
    request: GenerationRequest,
) -> Result<Json<GenerationResponse>> {
    let start_time = Instant::now();
    let user_id = extract_user_id(headers)?;
    let kind = request.kind();

    info!(kind = kind.as_str(), "Generation requested");

    let outcome = state.pipeline.generate(&request, user_id).await;

    Ok(Json(GenerationResponse {
        id: Uuid::new_v4(),
        kind,
        fallback: outcome.is_fallback(),
        error_code: outcome.error.as_ref().map(|e| e.code().to_string()),
        result: outcome.content,
        model: state.pipeline.model().to_string(),
        processing_time_ms: start_time.elapsed().as_millis() as u64,
        created_at: chrono::Utc::now(),
    }))
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let outcome = state.pipeline.chat(request).await;

    Json(ChatResponse {
        reply: outcome.reply,
        conversation: outcome.conversation,
        fallback: outcome.fallback,
        model: state.pipeline.model().to_string(),
        created_at: chrono::Utc::now(),
    })
}

async fn classify_business(Json(request): Json<ClassifyRequest>) -> Json<ClassifyResponse> {
    let business_type = classify(&request.description);
    let defaults = business_type.cosmetic_defaults();
    let label = defaults.stock_topics.first().copied().unwrap_or("placeholder");

    Json(ClassifyResponse {
        business_type,
        primary_color: defaults.primary_color.to_string(),
        accent_color: defaults.accent_color.to_string(),
        stock_topics: defaults.stock_topics.iter().map(|t| t.to_string()).collect(),
        placeholder_image: fallback::placeholder_image(label, &defaults),
    })
}

/// Optional identity fact from the gateway: who is asking, as an opaque id.
/// Absent header means anonymous; a present but unparsable header is a
/// caller bug and gets a 400.
fn extract_user_id(headers: &HeaderMap) -> Result<Option<Uuid>> {
    let Some(value) = headers.get("x-user-id") else {
        return Ok(None);
    };

    let raw = value
        .to_str()
        .map_err(|_| AppError::BadRequest("Invalid x-user-id header".to_string()))?;

    let user_id = Uuid::parse_str(raw)
        .map_err(|_| AppError::BadRequest(format!("Invalid x-user-id header: {}", raw)))?;

    Ok(Some(user_id))
}

// Request logging middleware
async fn request_logging_middleware(
    req: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> impl axum::response::IntoResponse {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start_time = Instant::now();

    let response = next.run(req).await;

    let duration = start_time.elapsed();
    info!(
        "{} {} - {:?} - {}ms",
        method,
        uri,
        response.status(),
        duration.as_millis()
    );

    response
}
