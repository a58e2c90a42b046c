//! Template renderer for linkpost.
//!
//! Takes an [`article::ArticleMetadata`] and a [`PostStyle`] and produces a
//! [`GeneratedPost`]. Rendering has no error conditions: style names are
//! validated where they are parsed, and empty metadata renders as
//! placeholders.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`style`] | `PostStyle`, hashtag sets, `UnknownStyle` |
//! | [`render`] | `render`, `render_all`, and the four layouts |
//! | [`placeholders`] | Bracketed placeholder texts |
//! | [`post`] | `GeneratedPost` |

pub mod placeholders;
pub mod post;
pub mod render;
pub mod style;

pub use placeholders::ListPlaceholder;
pub use post::GeneratedPost;
pub use render::{render, render_all};
pub use style::{PostStyle, UnknownStyle};
