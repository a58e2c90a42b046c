//! The rendered post.

use std::fmt;

use crate::{placeholders, style::PostStyle};

/// A rendered post ready to be written out or previewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPost {
    style: PostStyle,
    body: String,
}

impl GeneratedPost {
    pub(crate) fn new(style: PostStyle, body: String) -> Self {
        Self { style, body }
    }

    /// The style this post was rendered with.
    pub fn style(&self) -> PostStyle {
        self.style
    }

    /// The full post text.
    pub fn as_str(&self) -> &str {
        &self.body
    }

    /// Bracketed spans still waiting for a human edit, in order.
    ///
    /// Includes the fixed placeholders of the style as well as any numbered
    /// stand-ins for empty extracted lists.
    pub fn placeholders(&self) -> Vec<&str> {
        placeholders::find_all(&self.body)
    }
}

impl fmt::Display for GeneratedPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}
