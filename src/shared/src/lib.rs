//! Shared types and utilities for the Boostly generation core
//!
//! This crate holds the domain types that cross service boundaries: the
//! result-shape contracts for generated content, business profiles read from
//! the hosted data service, and the keyword-driven business-type classifier.
//! It is deliberately free of I/O: everything here is plain data plus pure
//! functions.

pub mod classifier;
pub mod types;

pub use classifier::{classify, BusinessType, CosmeticDefaults, KeywordTable};
pub use types::*;
