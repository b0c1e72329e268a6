//! Shared type definitions for the Boostly generation core
//!
//! Result-shape contracts are load-bearing: the dashboard renders fallback
//! results through the same components as successful ones, so both cases
//! must serialize to exactly the same set of keys.

pub mod content;
pub mod profile;

pub use content::{
    ChatRole, ChatTurn, ConversationState, EmailContent, GeneratedContent, GenerationKind,
    InsightsContent, WebsiteContent,
};
pub use profile::BusinessProfile;
