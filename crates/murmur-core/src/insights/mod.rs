//! Insight extraction engine
//!
//! Turns a raw journal transcript into a structured [`InsightRecord`]:
//! wins / regrets / tasks picked out by bilingual indicator matching, plus
//! frequency-ranked keywords. See [`extractor`] for the algorithm and
//! [`lexicon`] for the word tables that drive it.

pub mod extractor;
pub mod lexicon;
pub mod types;

pub use extractor::InsightExtractor;
pub use lexicon::Lexicon;
pub use types::{Category, InsightRecord, MAX_CATEGORY_ENTRIES, MAX_KEYWORDS, MIN_SENTENCE_CHARS};

use crate::error::Result;

/// Extract insights with the embedded default lexicon.
///
/// One-shot convenience for collaborators that analyze a single transcript;
/// callers doing repeated extraction should hold an [`InsightExtractor`].
pub fn extract_insights(transcript: &str) -> Result<InsightRecord> {
    Ok(InsightExtractor::new()?.extract(transcript))
}
