//! Rule-based insight extraction from journal transcripts
//!
//! Classifies transcript sentences into wins / regrets / tasks by indicator
//! substring matching and ranks keywords by frequency. Deliberately
//! heuristic: sentences come from a plain punctuation split and categories
//! from substring containment, not from sentence-boundary detection or NLP.
//! Upgrading either would change category membership downstream consumers
//! already store.

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::insights::lexicon::Lexicon;
use crate::insights::types::{
    Category, InsightRecord, MAX_CATEGORY_ENTRIES, MAX_KEYWORDS, MIN_SENTENCE_CHARS,
};

/// Characters that terminate a sentence. Runs of these split too, since the
/// empty fragments between them are discarded.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Extracts structured insights from raw transcripts
pub struct InsightExtractor {
    lexicon: Lexicon,
    /// Anything that is not a word character or a Hangul syllable; replaced
    /// with a space before keyword tokenization.
    non_word: Regex,
}

impl InsightExtractor {
    /// Create an extractor with the embedded default lexicon
    pub fn new() -> Result<Self> {
        Self::with_lexicon(Lexicon::default())
    }

    /// Create an extractor with a custom lexicon
    pub fn with_lexicon(lexicon: Lexicon) -> Result<Self> {
        Ok(Self {
            lexicon,
            // Matching runs over lower-cased text, so a-z covers Latin.
            non_word: Regex::new(r"[^0-9a-z_가-힣]+")?,
        })
    }

    /// Extract wins, regrets, tasks, and ranked keywords from a transcript.
    ///
    /// Total over all string inputs: an empty or whitespace-only transcript
    /// yields an all-empty record, and no input can make this fail.
    pub fn extract(&self, transcript: &str) -> InsightRecord {
        let mut record = InsightRecord::default();

        for sentence in split_sentences(transcript) {
            let lowered = sentence.to_lowercase();
            if lowered.chars().count() < MIN_SENTENCE_CHARS {
                continue;
            }

            // Categories are independent: one sentence may land in several.
            for category in Category::all() {
                let matched = self
                    .lexicon
                    .indicators(*category)
                    .iter()
                    .any(|indicator| lowered.contains(indicator.as_str()));
                if matched {
                    record.category_mut(*category).push(sentence.to_string());
                }
            }
        }

        // Caps are a slice after the fact, not an early stop: the first five
        // qualifying sentences win, in transcript order.
        record.wins.truncate(MAX_CATEGORY_ENTRIES);
        record.regrets.truncate(MAX_CATEGORY_ENTRIES);
        record.tasks.truncate(MAX_CATEGORY_ENTRIES);

        record.keywords = self.extract_keywords(transcript);

        debug!(
            wins = record.wins.len(),
            regrets = record.regrets.len(),
            tasks = record.tasks.len(),
            keywords = record.keywords.len(),
            "transcript analyzed"
        );

        record
    }

    /// Frequency-ranked keywords over the whole transcript (not per-sentence)
    fn extract_keywords(&self, transcript: &str) -> Vec<String> {
        let lowered = transcript.to_lowercase();
        let cleaned = self.non_word.replace_all(&lowered, " ");

        // Insertion-ordered counting: the later stable sort then keeps
        // first-seen order for frequency ties.
        let mut first_seen: Vec<String> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for token in cleaned.split_whitespace() {
            if token.chars().count() <= 2 {
                continue;
            }
            if token.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            if self.lexicon.is_stop_word(token) {
                continue;
            }

            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_string(), 1);
                    first_seen.push(token.to_string());
                }
            }
        }

        let mut ranked: Vec<(String, usize)> = first_seen
            .into_iter()
            .map(|token| {
                let count = counts[&token];
                (token, count)
            })
            .collect();

        // A token seen once still qualifies; the cap below is the only
        // limiter. Locked-in behavior, do not raise the threshold.
        ranked.retain(|(_, count)| *count >= 1);

        // Stable sort: ties keep first-seen order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(MAX_KEYWORDS)
            .map(|(token, _)| token)
            .collect()
    }
}

/// Split on sentence terminators, trim, and drop empty fragments
fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> InsightExtractor {
        InsightExtractor::new().unwrap()
    }

    #[test]
    fn test_empty_transcript() {
        let record = extractor().extract("");
        assert!(record.is_empty());
    }

    #[test]
    fn test_whitespace_only_transcript() {
        let record = extractor().extract("   \n\t  ");
        assert!(record.is_empty());
    }

    #[test]
    fn test_punctuation_only_transcript() {
        let record = extractor().extract("...!!!???");
        assert!(record.is_empty());
    }

    #[test]
    fn test_short_sentences_never_categorized() {
        // "Yes." and "No!" are interjections; "잘했다." is a win indicator
        // but only 3 chars, below the 10-char floor.
        let record = extractor().extract("Yes. No! 잘했다. Ok then?");
        assert!(record.wins.is_empty());
        assert!(record.regrets.is_empty());
        assert!(record.tasks.is_empty());
    }

    #[test]
    fn test_english_wins() {
        let record = extractor().extract(
            "Today was great! I successfully completed my project. \
             I feel proud of the work I accomplished.",
        );
        assert!(record
            .wins
            .contains(&"I successfully completed my project".to_string()));
        assert!(record
            .wins
            .contains(&"I feel proud of the work I accomplished".to_string()));
    }

    #[test]
    fn test_korean_wins() {
        let record = extractor().extract("오늘 정말 잘했다. 프로젝트를 성공적으로 완료했고 기분이 좋았다.");
        assert!(!record.wins.is_empty());
        assert!(record.wins.iter().any(|s| s.contains("성공")));
        // First sentence is 9 chars, below the floor.
        assert!(!record.wins.iter().any(|s| s.contains("오늘 정말")));
    }

    #[test]
    fn test_sentence_in_multiple_categories() {
        let record = extractor().extract("I accomplished a lot today but I regret the late start.");
        let sentence = "I accomplished a lot today but I regret the late start";
        assert!(record.wins.contains(&sentence.to_string()));
        assert!(record.regrets.contains(&sentence.to_string()));
    }

    #[test]
    fn test_original_casing_preserved() {
        let record = extractor().extract("  I COMPLETED the Big Migration today!  ");
        assert_eq!(record.wins, ["I COMPLETED the Big Migration today"]);
    }

    #[test]
    fn test_terminator_runs_collapse() {
        let record = extractor().extract("What?! Really... I need to rest more tonight!!");
        // "What" and "Really" fall below the floor; the task survives intact.
        assert_eq!(record.tasks, ["I need to rest more tonight"]);
    }

    #[test]
    fn test_category_cap_keeps_first_five() {
        let transcript = (1..=7)
            .map(|i| format!("I accomplished milestone number {} this week.", i))
            .collect::<Vec<_>>()
            .join(" ");
        let record = extractor().extract(&transcript);

        assert_eq!(record.wins.len(), MAX_CATEGORY_ENTRIES);
        assert!(record.wins[0].contains("number 1"));
        assert!(record.wins[4].contains("number 5"));
    }

    #[test]
    fn test_keywords_exclude_short_and_digit_tokens() {
        let record = extractor().extract("We go to gym 42 at 10 every single morning session.");
        assert!(!record.keywords.iter().any(|k| k.chars().count() <= 2));
        assert!(!record.keywords.contains(&"42".to_string()));
        assert!(record.keywords.contains(&"morning".to_string()));
    }

    #[test]
    fn test_keywords_exclude_stop_words() {
        let record = extractor().extract("The meeting about the budget was really just the meeting.");
        assert!(!record.keywords.contains(&"the".to_string()));
        assert!(!record.keywords.contains(&"about".to_string()));
        assert!(!record.keywords.contains(&"really".to_string()));
        assert!(record.keywords.contains(&"meeting".to_string()));
        assert!(record.keywords.contains(&"budget".to_string()));
    }

    #[test]
    fn test_keywords_ranked_by_frequency() {
        let record = extractor().extract("guitar piano guitar piano guitar drums");
        assert_eq!(record.keywords, ["guitar", "piano", "drums"]);
    }

    #[test]
    fn test_keyword_ties_keep_first_seen_order() {
        let record = extractor().extract("violin cello violin cello flute flute");
        // All have frequency 2; order of first occurrence decides.
        assert_eq!(record.keywords, ["violin", "cello", "flute"]);
    }

    #[test]
    fn test_single_occurrence_tokens_qualify() {
        // Locked-in behavior: the nominal frequency filter is >= 1, so a
        // token seen exactly once is still a keyword candidate.
        let record = extractor().extract("kayaking");
        assert_eq!(record.keywords, ["kayaking"]);
    }

    #[test]
    fn test_keyword_cap() {
        let transcript = (0..15)
            .map(|i| format!("uniqueword{}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let record = extractor().extract(&transcript);
        assert_eq!(record.keywords.len(), MAX_KEYWORDS);
    }

    #[test]
    fn test_hangul_keywords_survive_tokenization() {
        let record = extractor().extract("프로젝트 마케팅, 프로젝트!");
        assert_eq!(record.keywords, ["프로젝트", "마케팅"]);
    }

    #[test]
    fn test_mixed_script_keywords() {
        let record = extractor().extract("meeting 프로젝트 meeting");
        assert_eq!(record.keywords, ["meeting", "프로젝트"]);
    }

    #[test]
    fn test_keywords_lowercased() {
        let record = extractor().extract("Guitar GUITAR guitar");
        assert_eq!(record.keywords, ["guitar"]);
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::parse(
            r#"
            [indicators]
            wins = ["shipped"]
            regrets = ["rolled back"]
            tasks = ["follow up"]

            [stop_words]
            english = ["deploy"]
            "#,
        )
        .unwrap();
        let extractor = InsightExtractor::with_lexicon(lexicon).unwrap();

        let record = extractor.extract("We shipped the release. Must follow up on the deploy logs.");
        assert_eq!(record.wins, ["We shipped the release"]);
        // "Must" is not in this lexicon's task list.
        assert_eq!(record.tasks, ["Must follow up on the deploy logs"]);
        assert!(!record.keywords.contains(&"deploy".to_string()));
    }
}
