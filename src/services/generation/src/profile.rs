use crate::config::ProfileServiceConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use boostly_shared::BusinessProfile;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// Read-only access to stored business profiles. The generation core never
/// writes through this boundary; persistence belongs to the hosted data
/// service, and a failed or missing read degrades to profile-less prompts.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn fetch(&self, user_id: Uuid) -> Result<Option<BusinessProfile>>;
}

/// Fetches profiles from the hosted data service over HTTP, with a
/// per-process read cache. Profiles change rarely (onboarding edits only),
/// so the cache has no eviction.
pub struct HttpProfileStore {
    client: reqwest::Client,
    base_url: String,
    cache: tokio::sync::RwLock<HashMap<Uuid, BusinessProfile>>,
}

impl HttpProfileStore {
    pub fn new(config: &ProfileServiceConfig, base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::InternalServerError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url,
            cache: tokio::sync::RwLock::new(HashMap::new()),
        })
    }
}

#[async_trait]
impl ProfileStore for HttpProfileStore {
    async fn fetch(&self, user_id: Uuid) -> Result<Option<BusinessProfile>> {
        {
            let cache = self.cache.read().await;
            if let Some(profile) = cache.get(&user_id) {
                debug!(%user_id, "Profile cache hit");
                return Ok(Some(profile.clone()));
            }
        }

        let url = format!(
            "{}/v1/profiles/{}",
            self.base_url.trim_end_matches('/'),
            user_id
        );

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!(%user_id, "No stored profile");
            return Ok(None);
        }

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Profile service returned {}",
                status
            )));
        }

        let profile: BusinessProfile = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Unreadable profile record: {}", e))
        })?;

        let mut cache = self.cache.write().await;
        cache.insert(user_id, profile.clone());

        Ok(Some(profile))
    }
}

/// Store used when no profile service is configured: every lookup misses.
pub struct NullProfileStore;

#[async_trait]
impl ProfileStore for NullProfileStore {
    async fn fetch(&self, _user_id: Uuid) -> Result<Option<BusinessProfile>> {
        Ok(None)
    }
}

/// Fixed in-memory store for tests.
#[derive(Default)]
pub struct StaticProfileStore {
    profiles: HashMap<Uuid, BusinessProfile>,
}

impl StaticProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, user_id: Uuid, profile: BusinessProfile) -> Self {
        self.profiles.insert(user_id, profile);
        self
    }
}

#[async_trait]
impl ProfileStore for StaticProfileStore {
    async fn fetch(&self, user_id: Uuid) -> Result<Option<BusinessProfile>> {
        Ok(self.profiles.get(&user_id).cloned())
    }
}

/// Fetch a profile, converting every failure into "no profile". The
/// pipeline must keep working when the data service is down; it just loses
/// the stored context.
pub async fn fetch_or_none(store: &dyn ProfileStore, user_id: Option<Uuid>) -> Option<BusinessProfile> {
    let user_id = user_id?;
    match store.fetch(user_id).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!(%user_id, "Profile read failed, continuing without profile: {}", e);
            None
        }
    }
}
