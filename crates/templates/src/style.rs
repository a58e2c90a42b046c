//! The closed set of post styles.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// One of the four fixed post layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostStyle {
    /// Balanced post suitable for most articles.
    Default,
    /// Deep technical dive for engineering audiences.
    Technical,
    /// Personal narrative with a transformation arc.
    Story,
    /// Provocative question to spark debate.
    Question,
}

/// Returned when a style name is not one of [`PostStyle::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown post style '{0}' (expected one of: default, technical, story, question)")]
pub struct UnknownStyle(pub String);

impl PostStyle {
    /// Every style, in the order `--all-styles` renders them.
    pub const ALL: [PostStyle; 4] = [
        PostStyle::Default,
        PostStyle::Technical,
        PostStyle::Story,
        PostStyle::Question,
    ];

    /// Every style name, in [`PostStyle::ALL`] order.
    pub const NAMES: [&'static str; 4] = ["default", "technical", "story", "question"];

    /// Lowercase name used on the command line and in file names.
    pub fn as_str(self) -> &'static str {
        match self {
            PostStyle::Default => "default",
            PostStyle::Technical => "technical",
            PostStyle::Story => "story",
            PostStyle::Question => "question",
        }
    }

    /// One-line description for help and listings.
    pub fn description(self) -> &'static str {
        match self {
            PostStyle::Default => "Balanced post suitable for most articles",
            PostStyle::Technical => "Deep technical dive for engineering audiences",
            PostStyle::Story => "Personal narrative with transformation arc",
            PostStyle::Question => "Provocative question to spark debate",
        }
    }

    /// The static hashtag set closing every post of this style.
    pub fn hashtags(self) -> &'static [&'static str] {
        match self {
            PostStyle::Default => &[
                "#AI",
                "#MachineLearning",
                "#DataScience",
                "#TechArticle",
                "#Medium",
                "#[AddRelevantTags]",
            ],
            PostStyle::Technical => &[
                "#TechnicalArticle",
                "#SoftwareEngineering",
                "#SystemDesign",
                "#AI",
                "#MachineLearning",
                "#MLOps",
            ],
            PostStyle::Story => &[
                "#CareerGrowth",
                "#PersonalDevelopment",
                "#TechJourney",
                "#LearningInPublic",
            ],
            PostStyle::Question => &[
                "#TechDebate",
                "#IndustryInsights",
                "#ThoughtLeadership",
                "#AI",
                "#FutureOfWork",
            ],
        }
    }

    /// The hashtag set as the single line it is rendered on.
    pub fn hashtag_line(self) -> String {
        self.hashtags().join(" ")
    }
}

impl fmt::Display for PostStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PostStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownStyle(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for style in PostStyle::ALL {
            assert_eq!(style.as_str().parse::<PostStyle>(), Ok(style));
            assert_eq!(style.to_string(), style.as_str());
        }
        assert_eq!(PostStyle::ALL.map(PostStyle::as_str), PostStyle::NAMES);
        assert_eq!("Technical".parse::<PostStyle>(), Ok(PostStyle::Technical));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "thread".parse::<PostStyle>().unwrap_err();
        assert_eq!(err, UnknownStyle("thread".into()));
        assert!(err.to_string().contains("thread"));
    }

    #[test]
    fn every_style_has_hashtags() {
        for style in PostStyle::ALL {
            assert!(!style.hashtags().is_empty());
            assert!(style.hashtags().iter().all(|tag| tag.starts_with('#')));
        }
        assert_eq!(
            PostStyle::Story.hashtag_line(),
            "#CareerGrowth #PersonalDevelopment #TechJourney #LearningInPublic"
        );
    }
}
