use generation_service::config::Config;
use generation_service::error::Result;
use generation_service::gemini::CompletionClient;
use generation_service::pipeline::GenerationPipeline;
use generation_service::profile::{HttpProfileStore, NullProfileStore, ProfileStore};
use generation_service::server::{create_router, AppState};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "generation_service=info,tower_http=debug".into()),
        )
        .init();

    info!("Starting Generation Service");

    // Load configuration
    let config = Arc::new(Config::from_env()?);
    config.validate()?;
    info!("Configuration loaded successfully");

    if !config.gemini.has_api_key() {
        warn!("GEMINI_API_KEY is not set - all generation will return fallback results");
    }

    // Initialize completion client
    let completion = CompletionClient::new(config.gemini.clone())?;
    info!(model = %config.gemini.model, "Completion client initialized");

    // Initialize profile store
    let profiles: Arc<dyn ProfileStore> = match &config.profile_service.base_url {
        Some(base_url) => {
            info!(%base_url, "Profile service configured");
            Arc::new(HttpProfileStore::new(
                &config.profile_service,
                base_url.clone(),
            )?)
        }
        None => {
            info!("No profile service configured, prompts will not carry stored profiles");
            Arc::new(NullProfileStore)
        }
    };

    // Initialize pipeline
    let pipeline = Arc::new(GenerationPipeline::new(
        completion,
        profiles,
        config.gemini.max_output_tokens,
        config.gemini.temperature,
    ));
    info!("Generation pipeline initialized");

    let state = AppState {
        config: config.clone(),
        pipeline,
        started_at: Instant::now(),
    };

    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Generation Service listening on {}", addr);

    // Graceful shutdown
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Generation Service shut down gracefully");
    Ok(())
}
