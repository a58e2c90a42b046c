//! Subcommand handlers.

use std::path::Path;

use anyhow::{Context, Result};
use article::{load_article, ArticleMetadata, Extractor};
use templates::{render, render_all, PostStyle};
use tracing::debug;

use crate::{
    args::{GenerateArgs, InspectArgs},
    output,
};

pub fn generate(args: GenerateArgs, extractor: &Extractor) -> Result<()> {
    let metadata = load_article(&args.article, extractor)?;

    if args.all_styles {
        generate_all(&args, &metadata)
    } else {
        generate_one(&args, &metadata)
    }
}

fn generate_one(args: &GenerateArgs, metadata: &ArticleMetadata) -> Result<()> {
    let post = render(metadata, args.style);

    if args.preview {
        output::print_preview(&post);
        return Ok(());
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| output::single_post_name(&args.article));
    output::write_post(&path, &post)?;
    output::print_generated(&path, &post, metadata);
    output::print_next_steps();
    Ok(())
}

fn generate_all(args: &GenerateArgs, metadata: &ArticleMetadata) -> Result<()> {
    let posts = render_all(metadata);

    if args.preview {
        posts.iter().for_each(output::print_preview);
        return Ok(());
    }

    let dir = args.output.as_deref().unwrap_or(Path::new(""));
    if !dir.as_os_str().is_empty() {
        output::ensure_dir(dir)?;
    }
    for post in &posts {
        let path = dir.join(output::style_post_name(&args.article, post.style()));
        output::write_post(&path, post)?;
        println!("✅ Generated: {}", path.display());
    }
    println!();
    println!("🎉 All {} style variations generated!", posts.len());
    Ok(())
}

pub fn inspect(args: InspectArgs, extractor: &Extractor) -> Result<()> {
    let metadata = load_article(&args.article, extractor)?;
    debug!(sparse = metadata.is_sparse(), "Inspecting article");

    if args.json {
        let json =
            serde_json::to_string_pretty(&metadata).context("Failed to serialise metadata")?;
        println!("{json}");
    } else {
        output::print_metadata(&metadata);
    }
    Ok(())
}

pub fn styles() {
    for style in PostStyle::ALL {
        println!("{:<10} {}", style.as_str(), style.description());
        println!("{:<10} {}", "", style.hashtag_line());
    }
}
