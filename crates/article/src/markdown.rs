//! Line-level Markdown scanning shared by the extraction passes.
//!
//! This is not a Markdown parser. It classifies each line into the handful of
//! shapes the extraction heuristics care about and drops fenced code blocks
//! entirely, so a `# comment` inside a shell snippet never becomes a title.

use once_cell::sync::Lazy;
use regex::Regex;

static INLINE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!?\[([^\]]*)\]\([^)]*\)").unwrap());

static ORDERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,9}[.)]\s+").unwrap());

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static STRONG_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*\s](?:[^*]*[^*\s])?)\*\*").unwrap());

static EMPHASIS_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*\s](?:[^*]*[^*\s])?)\*").unwrap());

static STRONG_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__([^_\s](?:[^_]*[^_\s])?)__").unwrap());

static EMPHASIS_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_([^_\s](?:[^_]*[^_\s])?)_").unwrap());

/// One classified line of an article, outside any code fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Block<'a> {
    /// ATX heading; `level` is the number of `#` markers (1–6).
    Heading { level: usize, text: &'a str },
    /// A line wrapped entirely in `**` or `__`; `text` is the inner content.
    Bold(&'a str),
    /// Ordinary text with list and quote markers removed.
    ///
    /// `item` is set when the line opened a list item, which always starts a
    /// new paragraph.
    Prose { text: &'a str, item: bool },
    /// A table row.
    Table,
    /// Blank line or thematic break.
    Break,
}

impl<'a> Block<'a> {
    /// Text worth scanning for metrics; `None` for tables and breaks.
    pub(crate) fn text(&self) -> Option<&'a str> {
        match *self {
            Block::Heading { text, .. } | Block::Bold(text) | Block::Prose { text, .. } => {
                Some(text)
            }
            Block::Table | Block::Break => None,
        }
    }
}

/// Classifies every line of `text`, skipping fenced code blocks.
pub(crate) fn scan(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut fence: Option<&str> = None;

    for raw in text.lines() {
        let trimmed = raw.trim();

        if let Some(marker) = fence {
            if trimmed.starts_with(marker) {
                fence = None;
            }
            continue;
        }
        if let Some(marker) = fence_marker(trimmed) {
            fence = Some(marker);
            continue;
        }

        blocks.push(classify(raw, trimmed));
    }

    blocks
}

fn fence_marker(trimmed: &str) -> Option<&'static str> {
    if trimmed.starts_with("```") {
        Some("```")
    } else if trimmed.starts_with("~~~") {
        Some("~~~")
    } else {
        None
    }
}

fn classify<'a>(raw: &'a str, trimmed: &'a str) -> Block<'a> {
    if trimmed.is_empty() || is_thematic_break(trimmed) {
        return Block::Break;
    }
    if let Some((level, text)) = heading(raw) {
        return Block::Heading { level, text };
    }
    if trimmed.starts_with('|') {
        return Block::Table;
    }
    if let Some(inner) = bold_line(trimmed) {
        return Block::Bold(inner);
    }

    let (text, item) = strip_markers(trimmed);
    if text.is_empty() {
        Block::Break
    } else {
        Block::Prose { text, item }
    }
}

/// Parses an ATX heading indented by at most three spaces.
fn heading(raw: &str) -> Option<(usize, &str)> {
    let indent = raw.bytes().take_while(|b| *b == b' ').count();
    if indent > 3 {
        return None;
    }
    let line = &raw[indent..];
    let level = line.bytes().take_while(|b| *b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return None;
    }
    Some((level, without_closing_hashes(rest.trim())))
}

/// Drops an optional closing `#` run, which must follow whitespace.
fn without_closing_hashes(text: &str) -> &str {
    let stripped = text.trim_end_matches('#');
    if stripped.is_empty() {
        stripped
    } else if stripped.ends_with([' ', '\t']) {
        stripped.trim_end()
    } else {
        text
    }
}

fn bold_line(trimmed: &str) -> Option<&str> {
    ["**", "__"].into_iter().find_map(|marker| {
        let inner = trimmed
            .strip_prefix(marker)?
            .strip_suffix(marker)?
            .trim();
        (!inner.is_empty() && !inner.contains(marker)).then_some(inner)
    })
}

fn is_thematic_break(trimmed: &str) -> bool {
    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= 3
        && ['-', '*', '_']
            .into_iter()
            .any(|marker| compact.chars().all(|c| c == marker))
}

/// Removes blockquote and list markers, reporting whether a list item opened.
fn strip_markers(mut line: &str) -> (&str, bool) {
    while let Some(rest) = line.strip_prefix('>') {
        line = rest.trim_start();
    }

    for bullet in ["- ", "* ", "+ "] {
        if let Some(rest) = line.strip_prefix(bullet) {
            return (rest.trim(), true);
        }
    }
    if let Some(found) = ORDERED_MARKER.find(line) {
        return (line[found.end()..].trim(), true);
    }

    (line, false)
}

/// Reduces inline Markdown to plain text: links keep their label, emphasis
/// and code markers are dropped, and whitespace is collapsed.
pub(crate) fn plain_text(text: &str) -> String {
    let text = INLINE_LINK.replace_all(text, "$1");
    let text = unwrap_emphasis(&text, &STRONG_STAR, Flanking::Any);
    let text = unwrap_emphasis(&text, &EMPHASIS_STAR, Flanking::Any);
    let text = unwrap_emphasis(&text, &STRONG_UNDERSCORE, Flanking::WordBoundary);
    let text = unwrap_emphasis(&text, &EMPHASIS_UNDERSCORE, Flanking::WordBoundary);
    let text = text.replace('`', "");
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Where an emphasis delimiter pair may sit relative to the surrounding text.
#[derive(Clone, Copy)]
enum Flanking {
    /// `*` pairs work inside words too.
    Any,
    /// `_` pairs only count outside words, so `snake_case_name` survives.
    /// Lower-case `__name__` runs are dunder identifiers and survive as well.
    WordBoundary,
}

/// Replaces every accepted `pattern` match with its inner text.
fn unwrap_emphasis(text: &str, pattern: &Regex, flanking: Flanking) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in pattern.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if let Flanking::WordBoundary = flanking {
            let before = text[..whole.start()].chars().next_back();
            let after = text[whole.end()..].chars().next();
            if is_word_char(before) || is_word_char(after) || is_dunder(whole.as_str()) {
                continue;
            }
        }
        out.push_str(&text[last..whole.start()]);
        out.push_str(inner.as_str());
        last = whole.end();
    }
    out.push_str(&text[last..]);

    out
}

fn is_word_char(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_alphanumeric() || c == '_')
}

fn is_dunder(delimited: &str) -> bool {
    delimited
        .strip_prefix("__")
        .and_then(|rest| rest.strip_suffix("__"))
        .is_some_and(|name| {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// Joins consecutive prose lines into plain-text paragraphs.
pub(crate) fn paragraphs(blocks: &[Block<'_>]) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for block in blocks {
        match *block {
            Block::Prose { text, item } => {
                if item {
                    flush(&mut current, &mut paragraphs);
                }
                current.push(text);
            }
            _ => flush(&mut current, &mut paragraphs),
        }
    }
    flush(&mut current, &mut paragraphs);

    paragraphs
}

fn flush(current: &mut Vec<&str>, paragraphs: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let paragraph = plain_text(&current.join(" "));
    if !paragraph.is_empty() {
        paragraphs.push(paragraph);
    }
    current.clear();
}

/// Splits a paragraph after every `.`, `!` or `?` that is followed by
/// whitespace. Trailing text without terminal punctuation is kept.
pub(crate) fn sentences(paragraph: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = paragraph.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        if chars.peek().is_some_and(|(_, next)| next.is_whitespace()) {
            let end = index + c.len_utf8();
            push_trimmed(&paragraph[start..end], &mut sentences);
            start = end;
        }
    }
    push_trimmed(&paragraph[start..], &mut sentences);

    sentences
}

fn push_trimmed<'a>(sentence: &'a str, sentences: &mut Vec<&'a str>) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_are_classified_by_level() {
        let blocks = scan("# Title\n## Section\n   ### Indented\n    # code-ish\n#hashtag");
        assert_eq!(blocks[0], Block::Heading { level: 1, text: "Title" });
        assert_eq!(blocks[1], Block::Heading { level: 2, text: "Section" });
        assert_eq!(blocks[2], Block::Heading { level: 3, text: "Indented" });
        assert!(matches!(blocks[3], Block::Prose { .. }));
        assert!(matches!(blocks[4], Block::Prose { text: "#hashtag", .. }));
    }

    #[test]
    fn fenced_code_is_skipped() {
        let text = "Intro line\n```bash\n# not a title\necho 50%\n```\n~~~\n## nope\n~~~\nOutro";
        let blocks = scan(text);
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| matches!(b, Block::Prose { .. })));
    }

    #[test]
    fn whole_line_bold_is_detected() {
        assert_eq!(bold_line("**Caching is the answer**"), Some("Caching is the answer"));
        assert_eq!(bold_line("__Underscored point__"), Some("Underscored point"));
        assert_eq!(bold_line("**Two** and **three**"), None);
        assert_eq!(bold_line("****"), None);
        assert_eq!(bold_line("**Lead-in:** then more text"), None);
    }

    #[test]
    fn thematic_breaks_and_tables_are_not_prose() {
        let blocks = scan("---\n* * *\n| a | b |\n");
        assert_eq!(blocks, vec![Block::Break, Block::Break, Block::Table]);
    }

    #[test]
    fn list_items_start_new_paragraphs() {
        let blocks = scan("First line\ncontinues here.\n- item one\n- item two\n> quoted text\n");
        let paragraphs = paragraphs(&blocks);
        assert_eq!(
            paragraphs,
            vec!["First line continues here.", "item one", "item two quoted text"]
        );
    }

    #[test]
    fn plain_text_drops_inline_markup() {
        assert_eq!(
            plain_text("Read **the** [docs](https://example.com) for `cargo`  now"),
            "Read the docs for cargo now"
        );
    }

    #[test]
    fn plain_text_unwraps_emphasis_pairs() {
        assert_eq!(plain_text("Why *naive* RAG _breaks_"), "Why naive RAG breaks");
        assert_eq!(plain_text("***Both*** and __strong words__"), "Both and strong words");
        assert_eq!(plain_text("un*frigging*believable"), "unfriggingbelievable");
    }

    #[test]
    fn plain_text_leaves_identifiers_alone() {
        assert_eq!(plain_text("Call __init__ on my_module_name"), "Call __init__ on my_module_name");
        assert_eq!(plain_text("Compute 2 * 3 * 4"), "Compute 2 * 3 * 4");
    }

    #[test]
    fn closing_hash_sequence_is_not_heading_text() {
        let blocks = scan("# Title ##
## C#
### ###");
        assert_eq!(blocks[0], Block::Heading { level: 1, text: "Title" });
        assert_eq!(blocks[1], Block::Heading { level: 2, text: "C#" });
        assert_eq!(blocks[2], Block::Heading { level: 3, text: "" });
    }

    #[test]
    fn sentences_split_on_terminal_punctuation_followed_by_space() {
        let split = sentences("Costs rose 3.5x last year. Why? Nobody knew! v1.2 shipped");
        assert_eq!(
            split,
            vec!["Costs rose 3.5x last year.", "Why?", "Nobody knew!", "v1.2 shipped"]
        );
    }

    #[test]
    fn ordered_list_markers_are_stripped() {
        let blocks = scan("1. First step\n2) Second step");
        assert_eq!(
            blocks,
            vec![
                Block::Prose { text: "First step", item: true },
                Block::Prose { text: "Second step", item: true },
            ]
        );
    }
}
