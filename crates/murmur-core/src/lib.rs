//! Murmur Core Library
//!
//! Shared functionality for the Murmur voice-journaling tool:
//! - Bilingual (English/Korean) rule-based insight extraction
//!   (wins / regrets / tasks from transcript sentences)
//! - Frequency-ranked keyword extraction with stop-word filtering
//!   across Latin and Hangul scripts
//! - Shallow snapshot diffing for audit logging
//! - TOML lexicon with embedded defaults and override support
//!
//! Both core operations are pure and synchronous: plain data in, plain data
//! out. Persistence, sync, and transport belong to the callers.

pub mod diff;
pub mod error;
pub mod insights;

pub use diff::{calculate_changes, ChangeDiffer, FieldChange, DEFAULT_EXCLUDED_FIELDS};
pub use error::{Error, Result};
pub use insights::{extract_insights, Category, InsightExtractor, InsightRecord, Lexicon};
