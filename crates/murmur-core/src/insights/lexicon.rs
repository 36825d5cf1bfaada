//! Bilingual indicator and stop-word lexicon
//!
//! The extraction algorithm is generic over whatever word lists it is given;
//! the lists themselves live here as data. Each indicator list carries both
//! English and Korean entries so mixed-script transcripts are handled
//! uniformly by plain substring containment.
//!
//! ## Configuration Resolution
//!
//! 1. Explicit override file passed by the caller ([`Lexicon::from_path`])
//! 2. Embedded defaults (compiled into binary)

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::insights::types::Category;

/// Embedded default lexicon (compiled into binary)
const DEFAULT_LEXICON: &str = include_str!("../../../../config/lexicon.toml");

/// Indicator and stop-word tables driving the extractor
///
/// Matching happens over lower-cased text, so all entries are normalized to
/// lower-case at parse time.
#[derive(Debug, Clone)]
pub struct Lexicon {
    wins: Vec<String>,
    regrets: Vec<String>,
    tasks: Vec<String>,
    stop_words: HashSet<String>,
}

/// Raw lexicon structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawLexicon {
    indicators: RawIndicators,
    stop_words: RawStopWords,
}

#[derive(Debug, Deserialize)]
struct RawIndicators {
    wins: Vec<String>,
    regrets: Vec<String>,
    tasks: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawStopWords {
    #[serde(default)]
    english: Vec<String>,
    #[serde(default)]
    korean: Vec<String>,
}

impl Lexicon {
    /// Load the embedded default lexicon
    pub fn embedded() -> Result<Self> {
        Self::parse(DEFAULT_LEXICON)
    }

    /// Load a lexicon from a TOML override file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a lexicon from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawLexicon =
            toml::from_str(content).map_err(|e| Error::Lexicon(format!("Invalid TOML: {}", e)))?;

        let lexicon = Self {
            wins: normalize(raw.indicators.wins),
            regrets: normalize(raw.indicators.regrets),
            tasks: normalize(raw.indicators.tasks),
            stop_words: raw
                .stop_words
                .english
                .into_iter()
                .chain(raw.stop_words.korean)
                .map(|w| w.trim().to_lowercase())
                .collect(),
        };

        if lexicon.wins.is_empty() || lexicon.regrets.is_empty() || lexicon.tasks.is_empty() {
            return Err(Error::Lexicon(
                "Each indicator category needs at least one entry".to_string(),
            ));
        }

        Ok(lexicon)
    }

    /// Indicator substrings for a category
    pub fn indicators(&self, category: Category) -> &[String] {
        match category {
            Category::Win => &self.wins,
            Category::Regret => &self.regrets,
            Category::Task => &self.tasks,
        }
    }

    /// Whether a (lower-cased) token is dropped from keyword ranking
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        // The embedded file is pinned by tests.
        Self::embedded().expect("embedded lexicon must parse")
    }
}

fn normalize(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}
