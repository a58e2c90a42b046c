//! Placeholder and determinism guarantees across every style.

use std::path::Path;

use article::{ArticleMetadata, Extractor};
use templates::{placeholders, render, render_all, ListPlaceholder, PostStyle};

const FIELDS: [ListPlaceholder; 4] = [
    ListPlaceholder::Problem,
    ListPlaceholder::Solution,
    ListPlaceholder::KeyPoint,
    ListPlaceholder::Metric,
];

fn field(metadata: &ArticleMetadata, placeholder: ListPlaceholder) -> &[String] {
    match placeholder {
        ListPlaceholder::Problem => &metadata.problems,
        ListPlaceholder::Solution => &metadata.solutions,
        ListPlaceholder::KeyPoint => &metadata.key_points,
        ListPlaceholder::Metric => &metadata.metrics,
    }
}

fn empty() -> ArticleMetadata {
    Extractor::default().extract("", Path::new("empty.md"))
}

fn full() -> ArticleMetadata {
    ArticleMetadata {
        title: "Judging LLMs with LLMs".into(),
        key_points: vec!["Rubrics beat vibes".into(), "Calibrate the judge".into()],
        problems: vec!["Manual review is too slow.".into()],
        solutions: vec!["We built a judge pipeline.".into()],
        metrics: vec!["92%".into()],
        word_count: 900,
        read_time_minutes: 5,
    }
}

/// Each field on its own: only that field is empty.
fn with_one_empty(placeholder: ListPlaceholder) -> ArticleMetadata {
    let mut metadata = full();
    match placeholder {
        ListPlaceholder::Problem => metadata.problems.clear(),
        ListPlaceholder::Solution => metadata.solutions.clear(),
        ListPlaceholder::KeyPoint => metadata.key_points.clear(),
        ListPlaceholder::Metric => metadata.metrics.clear(),
    }
    metadata
}

#[test]
fn placeholder_present_if_and_only_if_field_is_empty() {
    let mut cases = vec![empty(), full()];
    cases.extend(FIELDS.into_iter().map(with_one_empty));

    for metadata in &cases {
        for style in PostStyle::ALL {
            let post = render(metadata, style);
            for placeholder in FIELDS {
                let is_empty = field(metadata, placeholder).is_empty();
                let shown = post.as_str().contains(&placeholder.prefix());
                assert_eq!(
                    shown, is_empty,
                    "{style}: {placeholder:?} placeholder shown={shown} but empty={is_empty}"
                );
            }
        }
    }
}

#[test]
fn empty_article_renders_every_section_as_placeholder() {
    let metadata = empty();
    assert_eq!(metadata.read_time_minutes, 1);

    let post = render(&metadata, PostStyle::Default);
    let text = post.as_str();
    for expected in [
        "[Problem point 1]",
        "[Problem point 3]",
        "[Solution point 1]",
        "[Key point 1]",
        "[Result or metric 1]",
        placeholders::HOOK,
        placeholders::KEY_INSIGHT,
        placeholders::MEDIUM_LINK,
        placeholders::COMMUNITY_QUESTION,
    ] {
        assert!(text.contains(expected), "missing {expected}");
    }
    assert!(text.contains("- Read Time: 1 minute\n"));
    assert!(text.starts_with("# LinkedIn Post: Empty\n"));
}

#[test]
fn rendering_is_deterministic() {
    for metadata in [empty(), full()] {
        for style in PostStyle::ALL {
            assert_eq!(render(&metadata, style), render(&metadata, style));
        }
    }
}

#[test]
fn all_styles_yield_four_posts_with_their_hashtags_verbatim() {
    let posts = render_all(&full());
    assert_eq!(posts.len(), 4);
    for (post, style) in posts.iter().zip(PostStyle::ALL) {
        assert_eq!(post.style(), style);
        assert!(post.as_str().contains(&style.hashtag_line()));
    }
}

#[test]
fn populated_post_only_keeps_fixed_placeholders() {
    let post = render(&full(), PostStyle::Technical);
    let found = post.placeholders();
    assert_eq!(
        found,
        vec![
            placeholders::SYSTEM,
            placeholders::MEDIUM_LINK,
            placeholders::TECHNICAL_CHALLENGE,
        ]
    );
}

#[test]
fn sparse_post_lists_numbered_placeholders() {
    let post = render(&empty(), PostStyle::Story);
    let found = post.placeholders();
    assert!(found.contains(&"[Problem point 1]"));
    assert!(found.contains(&"[Problem point 2]"));
    assert!(!found.contains(&"[Problem point 3]"));
    assert!(found.contains(&placeholders::MOTIVATION));
}
