//! Article parser for linkpost.
//!
//! Turns the text of one Markdown article into an [`ArticleMetadata`]
//! snapshot: title, key points, problem and solution sentences, numeric
//! metrics, and a read-time estimate. The renderers in the `templates` crate
//! consume that snapshot; this crate knows nothing about post layouts.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | `ArticleMetadata` and the read-time formula |
//! | [`config`] | `ExtractionConfig` and the default vocabularies |
//! | [`extract`] | `Extractor` and the extraction passes |
//! | [`source`] | Reading an article file |
//! | [`errors`] | `ArticleError` |
//!
//! ## Example
//!
//! ```
//! use std::path::Path;
//! use article::Extractor;
//!
//! let text = "# My Title\n\nThis is a problem: costs are too high.\n\n\
//!             Our solution: a caching layer.\n\nWe cut costs by 85%.";
//! let metadata = Extractor::default().extract(text, Path::new("post.md"));
//!
//! assert_eq!(metadata.title, "My Title");
//! assert_eq!(metadata.metrics, vec!["85%"]);
//! ```

pub mod config;
pub mod errors;
pub mod extract;
mod markdown;
pub mod source;
pub mod types;

pub use config::{ExtractionConfig, DEFAULT_PROBLEM_KEYWORDS, DEFAULT_SOLUTION_KEYWORDS};
pub use errors::ArticleError;
pub use extract::{title_from_path, Extractor, UNTITLED};
pub use source::load_article;
pub use types::{read_time_minutes, ArticleMetadata, DEFAULT_WORDS_PER_MINUTE};
