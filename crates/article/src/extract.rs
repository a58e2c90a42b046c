//! The extraction passes that turn article text into [`ArticleMetadata`].
//!
//! Each pass is an independent, ordered scan over the classified lines from
//! [`crate::markdown`]. None of them can fail: an article without headings,
//! vocabulary matches, or numbers simply yields empty lists.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::{
    config::ExtractionConfig,
    errors::ArticleError,
    markdown::{self, Block},
    types::{read_time_minutes, ArticleMetadata},
};

/// Title used when neither a heading nor a usable file name is available.
pub const UNTITLED: &str = "Untitled Article";

/// Money amounts, percentages and multipliers, in that order of preference.
///
/// - `$40,000`, `$1.2M`, `$5K`
/// - `85%`, `12.5%`, `1,000%`
/// - `3x`, `2.5x`, `10,000X` (the `x` must end the word, so `0x1F` does not match)
///
/// The leading group keeps a match from starting inside a longer number, so
/// `2,5%` yields nothing rather than `5%`. The value is the `metric` group.
static METRIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:^|[^\d.,])(?P<metric>",
        r"\$\d{1,3}(?:,\d{3})+(?:\.\d+)?[KkMmBb]?\b",
        r"|\$\d+(?:\.\d+)?[KkMmBb]?\b",
        r"|\$\d+(?:\.\d+)?",
        r"|\b\d{1,3}(?:,\d{3})+(?:\.\d+)?%",
        r"|\b\d+(?:\.\d+)?%",
        r"|\b\d{1,3}(?:,\d{3})+(?:\.\d+)?[xX]\b",
        r"|\b\d+(?:\.\d+)?[xX]\b",
        r")",
    ))
    .unwrap()
});

// ---------------------------------------------------------------------------
// Extractor
// ---------------------------------------------------------------------------

/// Validated extraction settings with vocabularies normalised to lower case.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractionConfig,
}

impl Default for Extractor {
    /// The default vocabularies are already lower case and non-empty.
    fn default() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }
}

impl Extractor {
    /// Validates `config` and prepares it for matching.
    ///
    /// Fails with [`ArticleError::Configuration`] when the reading speed is
    /// zero, the sentence length bounds are inverted, or a vocabulary is empty
    /// or contains a blank keyword.
    pub fn new(mut config: ExtractionConfig) -> Result<Self, ArticleError> {
        if config.words_per_minute == 0 {
            return Err(ArticleError::configuration(
                "words_per_minute must be greater than zero",
            ));
        }
        if config.min_sentence_chars > config.max_sentence_chars {
            return Err(ArticleError::configuration(format!(
                "min_sentence_chars ({}) exceeds max_sentence_chars ({})",
                config.min_sentence_chars, config.max_sentence_chars
            )));
        }
        config.problem_keywords = normalise("problem_keywords", config.problem_keywords)?;
        config.solution_keywords = normalise("solution_keywords", config.solution_keywords)?;

        Ok(Self { config })
    }

    /// Extracts metadata from `text`.
    ///
    /// `source` is only used to derive a title when the text has no level-1
    /// heading; it is never read.
    pub fn extract(&self, text: &str, source: &Path) -> ArticleMetadata {
        let blocks = markdown::scan(text);

        let title = title(&blocks).unwrap_or_else(|| title_from_path(source));
        let key_points = self.key_points(&blocks);
        let (problems, solutions) = self.classify_sentences(&blocks);
        let metrics = self.metrics(&blocks);
        let word_count = text.split_whitespace().count();
        let read_time_minutes = read_time_minutes(word_count, self.config.words_per_minute);

        debug!(
            title = %title,
            key_points = key_points.len(),
            problems = problems.len(),
            solutions = solutions.len(),
            metrics = metrics.len(),
            word_count,
            read_time_minutes,
            "Extracted article metadata"
        );

        ArticleMetadata {
            title,
            key_points,
            problems,
            solutions,
            metrics,
            word_count,
            read_time_minutes,
        }
    }

    fn key_points(&self, blocks: &[Block<'_>]) -> Vec<String> {
        let mut points = Vec::new();
        for block in blocks {
            let text = match *block {
                Block::Heading { level: 2 | 3, text } | Block::Bold(text) => text,
                _ => continue,
            };
            if !push_unique(&mut points, markdown::plain_text(text), self.config.max_key_points) {
                break;
            }
        }
        points
    }

    fn classify_sentences(&self, blocks: &[Block<'_>]) -> (Vec<String>, Vec<String>) {
        let config = &self.config;
        let mut problems = Vec::new();
        let mut solutions = Vec::new();

        for paragraph in markdown::paragraphs(blocks) {
            for sentence in markdown::sentences(&paragraph) {
                let length = sentence.chars().count();
                if length < config.min_sentence_chars || length > config.max_sentence_chars {
                    continue;
                }
                let lowered = sentence.to_lowercase();
                if contains_any(&lowered, &config.problem_keywords) {
                    push_unique(&mut problems, sentence.to_owned(), config.max_problems);
                } else if contains_any(&lowered, &config.solution_keywords) {
                    push_unique(&mut solutions, sentence.to_owned(), config.max_solutions);
                }
            }
            if problems.len() >= config.max_problems && solutions.len() >= config.max_solutions {
                break;
            }
        }

        (problems, solutions)
    }

    fn metrics(&self, blocks: &[Block<'_>]) -> Vec<String> {
        let mut metrics = Vec::new();
        for text in blocks.iter().filter_map(Block::text) {
            for found in METRIC.captures_iter(text).filter_map(|caps| caps.name("metric")) {
                if !push_unique(&mut metrics, found.as_str().to_owned(), self.config.max_metrics) {
                    return metrics;
                }
            }
        }
        metrics
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn normalise(field: &str, keywords: Vec<String>) -> Result<Vec<String>, ArticleError> {
    if keywords.is_empty() {
        return Err(ArticleError::configuration(format!("{field} must not be empty")));
    }
    keywords
        .into_iter()
        .map(|keyword| {
            let keyword = keyword.trim().to_lowercase();
            if keyword.is_empty() {
                Err(ArticleError::configuration(format!(
                    "{field} must not contain blank keywords"
                )))
            } else {
                Ok(keyword)
            }
        })
        .collect()
}

fn contains_any(lowered: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| lowered.contains(keyword.as_str()))
}

/// Appends `value` unless it is empty or already present.
///
/// Returns `false` once `list` has reached `cap`, telling the caller to stop.
fn push_unique(list: &mut Vec<String>, value: String, cap: usize) -> bool {
    if list.len() >= cap {
        return false;
    }
    if !value.is_empty() && !list.contains(&value) {
        list.push(value);
    }
    list.len() < cap
}

fn title(blocks: &[Block<'_>]) -> Option<String> {
    blocks.iter().find_map(|block| match *block {
        Block::Heading { level: 1, text } if !text.is_empty() => Some(text.to_owned()),
        _ => None,
    })
}

/// Derives a title from a file name: extension and directories dropped,
/// `_` and `-` turned into spaces, each word capitalised.
///
/// ```
/// use std::path::Path;
/// assert_eq!(
///     article::title_from_path(Path::new("drafts/my_rag-pipeline.md")),
///     "My Rag Pipeline"
/// );
/// ```
pub fn title_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let title = stem
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalise)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        UNTITLED.to_owned()
    } else {
        title
    }
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
