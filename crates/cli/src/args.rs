//! Command-line surface.

use std::path::PathBuf;

use clap::{
    builder::{PossibleValuesParser, TypedValueParser},
    Args, Parser, Subcommand, ValueEnum,
};
use templates::PostStyle;

/// Generate LinkedIn post drafts from Markdown articles
#[derive(Debug, Parser)]
#[command(name = "linkpost")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate LinkedIn post drafts from Markdown articles")]
#[command(long_about = r#"
Generate LinkedIn post drafts from Markdown articles.

The draft keeps every section of the chosen layout. Anything that could not be
extracted from the article is left as a [bracketed placeholder] to fill in.

Examples:
  linkpost generate articles/article-01-introduction.md
  linkpost generate articles/article-02-rag.md --style technical
  linkpost generate articles/article-03-agents.md --output my-post.md --style story
  linkpost generate articles/article-04-finetuning.md --all-styles
  linkpost inspect articles/article-02-rag.md --json
"#)]
pub struct Cli {
    /// TOML file with an [extraction] table overriding the default heuristics
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log line format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a post draft from an article
    Generate(GenerateArgs),

    /// Show what the parser extracted from an article
    Inspect(InspectArgs),

    /// List the available post styles
    Styles,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the article (Markdown)
    pub article: PathBuf,

    /// Post style to render
    #[arg(
        short,
        long,
        default_value_t = PostStyle::Default,
        value_parser = style_parser()
    )]
    pub style: PostStyle,

    /// Render every style, one file each (any --style is ignored)
    #[arg(long)]
    pub all_styles: bool,

    /// Output file; with --all-styles, the directory to write into
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the post instead of writing a file
    #[arg(long)]
    pub preview: bool,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Path to the article (Markdown)
    pub article: PathBuf,

    /// Print the metadata as JSON
    #[arg(long)]
    pub json: bool,
}

/// Accepts exactly the [`PostStyle`] names and lists them in `--help`.
fn style_parser() -> impl TypedValueParser<Value = PostStyle> {
    PossibleValuesParser::new(PostStyle::NAMES).try_map(|name| name.parse::<PostStyle>())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
