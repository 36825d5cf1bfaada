//! Core types for insight extraction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum sentences kept per category
pub const MAX_CATEGORY_ENTRIES: usize = 5;

/// Maximum ranked keywords kept
pub const MAX_KEYWORDS: usize = 10;

/// Minimum trimmed sentence length (in chars) for a sentence to be
/// considered at all. Filters interjections ("Yes.", "No.") while still
/// admitting short-but-meaningful Korean sentences; a character floor, not
/// a word count, so it works across scripts.
pub const MIN_SENTENCE_CHARS: usize = 10;

/// Insight categories a sentence can be classified into
///
/// Categories are independent, non-exclusive: a sentence may qualify for
/// zero, one, or several of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Something that went well
    Win,
    /// Something the author wishes had gone differently
    Regret,
    /// Something the author still intends to do
    Task,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Win => "win",
            Category::Regret => "regret",
            Category::Task => "task",
        }
    }

    /// Get all categories
    pub fn all() -> &'static [Category] {
        &[Category::Win, Category::Regret, Category::Task]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(Category::Win),
            "regret" => Ok(Category::Regret),
            "task" => Ok(Category::Task),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// Structured insights extracted from a single journal transcript
///
/// Each category list holds the original trimmed sentences, in transcript
/// order, capped at [`MAX_CATEGORY_ENTRIES`]. `keywords` holds single
/// tokens ranked by descending frequency (first-seen order on ties),
/// capped at [`MAX_KEYWORDS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightRecord {
    pub wins: Vec<String>,
    pub regrets: Vec<String>,
    pub tasks: Vec<String>,
    pub keywords: Vec<String>,
}

impl InsightRecord {
    /// Sentences collected for a category
    pub fn category(&self, category: Category) -> &[String] {
        match category {
            Category::Win => &self.wins,
            Category::Regret => &self.regrets,
            Category::Task => &self.tasks,
        }
    }

    pub(crate) fn category_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Win => &mut self.wins,
            Category::Regret => &mut self.regrets,
            Category::Task => &mut self.tasks,
        }
    }

    /// True when no category matched and no keywords survived filtering
    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
            && self.regrets.is_empty()
            && self.tasks.is_empty()
            && self.keywords.is_empty()
    }
}
