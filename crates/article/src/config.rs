//! Extraction configuration and the default vocabularies.
//!
//! The classification heuristics are plain substring matches against two
//! keyword lists. The defaults below are a documented starting point; every
//! field can be overridden from the `[extraction]` table of a config file.

use serde::Deserialize;

use crate::types::DEFAULT_WORDS_PER_MINUTE;

/// Problem indicators, checked before [`DEFAULT_SOLUTION_KEYWORDS`].
pub const DEFAULT_PROBLEM_KEYWORDS: &[&str] = &[
    "problem",
    "challenge",
    "issue",
    "limitation",
    "bottleneck",
    "pain point",
    "struggle",
    "fail",
    "too slow",
    "too high",
    "too expensive",
    "difficult",
    "hard to",
    "unable to",
    "cannot",
    "can't",
];

/// Solution indicators.
///
/// `introduc` is a deliberate stem so that "introduce", "introduced" and
/// "introducing" all match.
pub const DEFAULT_SOLUTION_KEYWORDS: &[&str] = &[
    "solution",
    "approach",
    "built",
    "build",
    "implement",
    "solve",
    "resolve",
    "designed",
    "introduc",
    "developed",
    "created",
    "fixed",
    "workaround",
    "the answer",
];

/// Tunable limits and vocabularies for [`crate::Extractor`].
///
/// Every field has a default, so a config file only needs to name the
/// fields it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractionConfig {
    /// Reading speed for the read-time estimate. Must be positive.
    pub words_per_minute: u32,
    /// Maximum number of key points kept.
    pub max_key_points: usize,
    /// Maximum number of problem sentences kept.
    pub max_problems: usize,
    /// Maximum number of solution sentences kept.
    pub max_solutions: usize,
    /// Maximum number of metrics kept.
    pub max_metrics: usize,
    /// Sentences shorter than this (in characters) are ignored.
    pub min_sentence_chars: usize,
    /// Sentences longer than this (in characters) are ignored.
    pub max_sentence_chars: usize,
    /// Case-insensitive substrings that mark a problem sentence.
    pub problem_keywords: Vec<String>,
    /// Case-insensitive substrings that mark a solution sentence.
    pub solution_keywords: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            max_key_points: 6,
            max_problems: 4,
            max_solutions: 4,
            max_metrics: 5,
            min_sentence_chars: 12,
            max_sentence_chars: 280,
            problem_keywords: to_owned(DEFAULT_PROBLEM_KEYWORDS),
            solution_keywords: to_owned(DEFAULT_SOLUTION_KEYWORDS),
        }
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_owned()).collect()
}
