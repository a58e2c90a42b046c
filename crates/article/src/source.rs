//! Reading an article from disk.

use std::{fs, io, path::Path};

use tracing::debug;

use crate::{errors::ArticleError, extract::Extractor, types::ArticleMetadata};

/// Reads the article at `path` and extracts its metadata.
///
/// A missing path yields [`ArticleError::NotFound`]; any other read failure,
/// including non-UTF-8 content, yields [`ArticleError::Unreadable`]. The file
/// is never modified.
pub fn load_article(path: &Path, extractor: &Extractor) -> Result<ArticleMetadata, ArticleError> {
    let text = read_article(path)?;
    debug!(path = %path.display(), bytes = text.len(), "Read article");
    Ok(extractor.extract(&text, path))
}

fn read_article(path: &Path) -> Result<String, ArticleError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ArticleError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ArticleError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}
