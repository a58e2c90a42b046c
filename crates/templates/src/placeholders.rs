//! Bracketed placeholder texts.
//!
//! A placeholder marks a spot the author must fill in by hand. Fixed
//! placeholders appear in every post of a style; numbered placeholders stand
//! in for an extracted list that came back empty and never appear next to
//! extracted values.

use once_cell::sync::Lazy;
use regex::Regex;

static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\[\]\n]+\]").unwrap());

pub const HOOK: &str = "[ATTENTION-GRABBING HOOK]";
pub const HOOK_GUIDANCE: &str = "[Replace with your hook - Use the template guide for ideas]";
pub const KEY_INSIGHT: &str = "[Share one memorable takeaway from the article]";
pub const MEDIUM_LINK: &str = "[INSERT YOUR MEDIUM LINK]";
pub const COMMUNITY_QUESTION: &str = "[Ask an engaging question related to the article topic]";
pub const LEVEL: &str = "[Beginner/Intermediate/Advanced]";
pub const SYSTEM: &str = "[describe your system/solution]";
pub const TECHNICAL_CHALLENGE: &str = "[relevant technical challenge]";
pub const YEARS: &str = "[X]";
pub const PAST_SITUATION: &str = "[past situation]";
pub const CURRENT_SITUATION: &str = "[current situation]";
pub const MOTIVATION: &str = "[Personal motivation - why this matters to you]";
pub const PROVOCATIVE_STATEMENT: &str = "[Provocative statement related to your article]";
pub const SURPRISING_INSIGHT: &str = "[surprising insight]";
pub const IMPLICATIONS: &str = "[Explain the broader impact or urgency]";

/// Stand-ins for the list-valued fields of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPlaceholder {
    Problem,
    Solution,
    KeyPoint,
    Metric,
}

impl ListPlaceholder {
    /// Text shared by every numbered instance, without the brackets.
    pub fn label(self) -> &'static str {
        match self {
            ListPlaceholder::Problem => "Problem point",
            ListPlaceholder::Solution => "Solution point",
            ListPlaceholder::KeyPoint => "Key point",
            ListPlaceholder::Metric => "Result or metric",
        }
    }

    /// Opening fragment common to every numbered instance, e.g. `[Key point`.
    pub fn prefix(self) -> String {
        format!("[{}", self.label())
    }

    /// The `n`th placeholder, counting from one.
    pub fn numbered(self, n: usize) -> String {
        format!("[{} {n}]", self.label())
    }
}

/// Every bracketed span in `text`, in order of appearance.
pub fn find_all(text: &str) -> Vec<&str> {
    BRACKETED.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_placeholders_share_their_prefix() {
        let first = ListPlaceholder::Metric.numbered(1);
        assert_eq!(first, "[Result or metric 1]");
        assert!(first.starts_with(&ListPlaceholder::Metric.prefix()));
    }

    #[test]
    fn find_all_returns_spans_in_order() {
        let text = "Hi [one] and #[Tag] but not [nested [x] ok]";
        assert_eq!(find_all(text), vec!["[one]", "[Tag]", "[x]"]);
    }
}
