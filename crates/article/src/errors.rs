//! Error types for the article parser.
//!
//! [`ArticleError`] covers the only conditions that stop an extraction run:
//! the article cannot be read, or the extraction configuration is invalid.
//! Sparse or degenerate content is never an error; it produces a sparse
//! [`crate::ArticleMetadata`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading an article or building an [`crate::Extractor`].
#[derive(Debug, Error)]
pub enum ArticleError {
    /// The article path does not exist.
    #[error("Article not found: {}", path.display())]
    NotFound {
        /// The path as given by the caller.
        path: PathBuf,
    },

    /// The article exists but could not be read as UTF-8 text.
    ///
    /// Covers permission failures, directories passed as files, and binary
    /// content.
    #[error("Article could not be read: {}", path.display())]
    Unreadable {
        /// The path as given by the caller.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The extraction configuration is invalid.
    ///
    /// Produced by [`crate::Extractor::new`]; extraction never starts with an
    /// invalid configuration.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl ArticleError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
