//! Output file naming, writing, and terminal reports.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use article::ArticleMetadata;
use templates::{GeneratedPost, PostStyle};
use tracing::info;

const RULE_WIDTH: usize = 80;

fn article_stem(article: &Path) -> String {
    article
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "article".to_owned())
}

/// `<stem>-linkedin-post.md`, used for single-style runs without `--output`.
pub fn single_post_name(article: &Path) -> PathBuf {
    PathBuf::from(format!("{}-linkedin-post.md", article_stem(article)))
}

/// `<stem>-linkedin-<style>.md`, used by `--all-styles`.
pub fn style_post_name(article: &Path, style: PostStyle) -> PathBuf {
    PathBuf::from(format!("{}-linkedin-{style}.md", article_stem(article)))
}

/// Writes `post` to `path`, replacing any existing file.
pub fn write_post(path: &Path, post: &GeneratedPost) -> Result<()> {
    fs::write(path, post.as_str())
        .with_context(|| format!("Failed to write post to {}", path.display()))?;
    info!(path = %path.display(), style = %post.style(), "Wrote post");
    Ok(())
}

/// Creates `dir` (and parents) for `--all-styles --output <dir>`.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))
}

pub fn print_preview(post: &GeneratedPost) {
    let rule = "=".repeat(RULE_WIDTH);
    println!();
    println!("{rule}");
    println!("PREVIEW ({})", post.style());
    println!("{rule}");
    println!();
    println!("{post}");
    println!("{rule}");
}

pub fn print_generated(path: &Path, post: &GeneratedPost, metadata: &ArticleMetadata) {
    println!("✅ LinkedIn post generated: {}", path.display());
    println!("📊 Article stats: {} min read", metadata.read_time_minutes);
    println!("🔑 Key points found: {}", metadata.key_points.len());
    println!("📈 Metrics extracted: {}", metadata.metrics.len());
    println!("✏️  Placeholders to fill in: {}", post.placeholders().len());
}

pub fn print_next_steps() {
    println!();
    println!("💡 Next steps:");
    println!("   1. Review the generated post");
    println!("   2. Replace placeholders with your content");
    println!("   3. Add your Medium article link");
    println!("   4. Customize the hook and key insight");
    println!("   5. Add relevant hashtags for your audience");
}

pub fn print_metadata(metadata: &ArticleMetadata) {
    println!("Title: {}", metadata.title);
    println!(
        "Words: {} ({} min read)",
        metadata.word_count, metadata.read_time_minutes
    );
    print_section("Key points", &metadata.key_points);
    print_section("Problems", &metadata.problems);
    print_section("Solutions", &metadata.solutions);
    print_section("Metrics", &metadata.metrics);
}

fn print_section(label: &str, items: &[String]) {
    println!();
    println!("{label} ({}):", items.len());
    if items.is_empty() {
        println!("  (none found)");
    }
    for item in items {
        println!("  - {item}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_post_name_uses_the_article_stem() {
        assert_eq!(
            single_post_name(Path::new("../articles/article-01-introduction.md")),
            PathBuf::from("article-01-introduction-linkedin-post.md")
        );
    }

    #[test]
    fn style_post_name_includes_the_style() {
        assert_eq!(
            style_post_name(Path::new("drafts/rag.md"), PostStyle::Question),
            PathBuf::from("rag-linkedin-question.md")
        );
    }

    #[test]
    fn odd_paths_fall_back_to_article() {
        assert_eq!(
            single_post_name(Path::new("/")),
            PathBuf::from("article-linkedin-post.md")
        );
    }
}
