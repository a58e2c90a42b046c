//! Value types produced by the article parser.

use serde::Serialize;

/// Reading speed used when no configuration overrides it.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

// ---------------------------------------------------------------------------
// Article metadata
// ---------------------------------------------------------------------------

/// Structured signals extracted from one Markdown article.
///
/// Built fresh for every run by [`crate::Extractor::extract`] and never
/// mutated afterwards. Every list keeps document order and holds no exact
/// duplicates. Any list may be empty; renderers substitute placeholders for
/// empty lists rather than dropping the section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleMetadata {
    /// First level-1 heading, or a title derived from the file name.
    pub title: String,

    /// Level-2/level-3 headings and whole-line bold statements.
    pub key_points: Vec<String>,

    /// Sentences that use problem vocabulary.
    pub problems: Vec<String>,

    /// Sentences that use solution vocabulary and no problem vocabulary.
    pub solutions: Vec<String>,

    /// Numeric tokens such as `85%`, `$40K`, or `3x`.
    pub metrics: Vec<String>,

    /// Whitespace-delimited words in the raw article text.
    pub word_count: usize,

    /// Estimated reading time, never less than one minute.
    pub read_time_minutes: u32,
}

impl ArticleMetadata {
    /// Returns `true` when no list-valued signal was extracted.
    pub fn is_sparse(&self) -> bool {
        self.key_points.is_empty()
            && self.problems.is_empty()
            && self.solutions.is_empty()
            && self.metrics.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Read time
// ---------------------------------------------------------------------------

/// Reading time in whole minutes: `ceil(word_count / words_per_minute)`,
/// with a floor of one minute.
///
/// A `words_per_minute` of zero is treated as one; [`crate::Extractor::new`]
/// rejects it before it can reach this function.
pub fn read_time_minutes(word_count: usize, words_per_minute: u32) -> u32 {
    let wpm = u64::from(words_per_minute.max(1));
    let words = word_count as u64;
    let minutes = words.div_ceil(wpm).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_words_reads_in_one_minute() {
        assert_eq!(read_time_minutes(0, DEFAULT_WORDS_PER_MINUTE), 1);
    }

    #[test]
    fn partial_minutes_round_up() {
        assert_eq!(read_time_minutes(200, 200), 1);
        assert_eq!(read_time_minutes(201, 200), 2);
        assert_eq!(read_time_minutes(1000, 200), 5);
    }

    #[test]
    fn doubling_words_never_lowers_read_time() {
        for words in [0usize, 1, 57, 199, 200, 399, 1234, 50_000] {
            let single = read_time_minutes(words, 200);
            let doubled = read_time_minutes(words * 2, 200);
            assert!(doubled >= single, "{words} words: {doubled} < {single}");
            assert_eq!(single, read_time_minutes(words, 200));
        }
    }

    #[test]
    fn sparse_metadata_is_detected() {
        let metadata = ArticleMetadata {
            title: "T".into(),
            key_points: vec![],
            problems: vec![],
            solutions: vec![],
            metrics: vec![],
            word_count: 0,
            read_time_minutes: 1,
        };
        assert!(metadata.is_sparse());

        let populated = ArticleMetadata {
            metrics: vec!["85%".into()],
            ..metadata
        };
        assert!(!populated.is_sparse());
    }
}
