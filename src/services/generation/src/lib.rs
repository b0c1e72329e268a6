//! Generation Service Library
//!
//! Core functionality for the Boostly structured-generation pipeline:
//! prompt building, the single-shot completion client, JSON extraction and
//! repair, schema validation, and fallback synthesis. The pipeline is a
//! total function: every invocation returns a result matching the
//! contract shape for its kind, with failures recovered into labeled
//! fallback content rather than errors.

pub mod config;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod gemini;
pub mod pipeline;
pub mod profile;
pub mod prompt;
pub mod server;
pub mod types;
pub mod validate;

pub use config::Config;
pub use error::{AppError, PipelineError, Result};
pub use gemini::{CompletionClient, GenerationParams};
pub use pipeline::{ChatOutcome, GenerationOutcome, GenerationPipeline};
pub use profile::{HttpProfileStore, NullProfileStore, ProfileStore, StaticProfileStore};
pub use types::*;
