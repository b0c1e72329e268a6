use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Business profile collected during onboarding and stored by the hosted
/// data service. The generation core only ever reads this record: it is
/// used to enrich prompts with business context and is never written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BusinessProfile {
    /// True when the record carries enough context to be worth embedding
    /// into a prompt. Name-only profiles are common right after signup.
    pub fn has_context(&self) -> bool {
        self.business_type.is_some()
            || self.industry.is_some()
            || self.tone.is_some()
            || self.goal.is_some()
            || !self.services.is_empty()
    }
}
