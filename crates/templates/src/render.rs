//! The four post layouts.
//!
//! Each style maps to one template function through [`template`]. A template
//! writes every one of its sections unconditionally: list sections print the
//! extracted items when there are any and numbered placeholders when there
//! are none, so a sparse article still yields a complete draft.

use article::ArticleMetadata;
use tracing::debug;

use crate::{
    placeholders::{self, ListPlaceholder},
    post::GeneratedPost,
    style::PostStyle,
};

type Template = fn(&ArticleMetadata, &mut Draft);

/// Renders `metadata` in `style`.
///
/// Pure and deterministic: identical inputs always produce byte-identical
/// posts.
pub fn render(metadata: &ArticleMetadata, style: PostStyle) -> GeneratedPost {
    let mut draft = Draft::default();
    template(style)(metadata, &mut draft);
    let body = draft.finish();
    debug!(style = %style, bytes = body.len(), "Rendered post");
    GeneratedPost::new(style, body)
}

/// Renders `metadata` once per style, in [`PostStyle::ALL`] order.
pub fn render_all(metadata: &ArticleMetadata) -> Vec<GeneratedPost> {
    PostStyle::ALL
        .into_iter()
        .map(|style| render(metadata, style))
        .collect()
}

fn template(style: PostStyle) -> Template {
    match style {
        PostStyle::Default => default_post,
        PostStyle::Technical => technical_post,
        PostStyle::Story => story_post,
        PostStyle::Question => question_post,
    }
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

const KEY_POINT_MARKERS: &[&str] = &["🔍", "💡", "⚡", "🎯", "📈", "🚀"];

fn default_post(m: &ArticleMetadata, d: &mut Draft) {
    d.header(&m.title, "");
    d.line(format!("🚀 **{}**", placeholders::HOOK)).blank();
    d.line(placeholders::HOOK_GUIDANCE).blank();

    d.heading("The Problem:");
    d.list(&m.problems, 3, ListPlaceholder::Problem, Bullet::Plain("❌"));

    d.line("**But there's a solution—and I've documented it.**").blank();
    d.list(&m.solutions, 3, ListPlaceholder::Solution, Bullet::Plain("🛠️"));

    d.line("I just published a comprehensive article on Medium exploring:")
        .blank();
    d.list(
        &m.key_points,
        6,
        ListPlaceholder::KeyPoint,
        Bullet::Emphasised(KEY_POINT_MARKERS),
    );

    d.heading("Key Results:");
    d.list(&m.metrics, 3, ListPlaceholder::Metric, Bullet::Plain("✅"));

    d.heading("My Key Insight:");
    d.line(placeholders::KEY_INSIGHT).blank();
    d.line(format!(
        "👉 **Read the full article on Medium:** {}",
        placeholders::MEDIUM_LINK
    ))
    .blank();
    d.rule();

    d.line("💭 **Question for the community:**").blank();
    d.line(placeholders::COMMUNITY_QUESTION).blank();
    d.line("What's your experience with this? Share your thoughts below! 👇")
        .blank();
    d.rule();

    d.hashtags(PostStyle::Default);
    d.blank().rule();

    d.line("**📊 Article Stats:**");
    d.line(format!("- Read Time: {}", read_time(m.read_time_minutes)));
    d.line(format!("- Level: {}", placeholders::LEVEL));
    d.line(format!("- Focus: {}", m.title)).blank();
    d.line("**P.S.** If you find this valuable, please share with your network!");
}

fn technical_post(m: &ArticleMetadata, d: &mut Draft) {
    d.header(&m.title, " (Technical Deep-Dive)");
    d.line(format!("🔧 **Technical Deep-Dive: {}**", m.title)).blank();
    d.line(format!(
        "After extensive research and implementation, I've documented my journey building {}.",
        placeholders::SYSTEM
    ))
    .blank();

    d.heading("The Technical Challenge:");
    d.list(&m.problems, 2, ListPlaceholder::Problem, Bullet::Plain("⚠️"));

    d.heading("The Approach:");
    d.list(&m.solutions, 3, ListPlaceholder::Solution, Bullet::Plain("🛠️"));

    d.heading("My Implementation:");
    d.list(&m.key_points, 5, ListPlaceholder::KeyPoint, Bullet::Plain("🔹"));

    d.heading("Technical Metrics:");
    d.list(&m.metrics, 4, ListPlaceholder::Metric, Bullet::Plain("📊"));

    d.line(format!(
        "👉 **Full technical breakdown on Medium:** {}",
        placeholders::MEDIUM_LINK
    ))
    .blank();
    d.line("The article includes:");
    d.line("✅ Architecture diagrams");
    d.line("✅ Code snippets and implementation details");
    d.line("✅ Benchmark comparisons");
    d.line("✅ Lessons learned and gotchas").blank();
    d.rule();

    d.line("💭 **For the engineers:**").blank();
    d.line(format!(
        "What's your approach to {}? Any alternative solutions you'd recommend?",
        placeholders::TECHNICAL_CHALLENGE
    ))
    .blank();
    d.rule();

    d.hashtags(PostStyle::Technical);
}

fn story_post(m: &ArticleMetadata, d: &mut Draft) {
    d.header(&m.title, " (Personal Story)");
    d.line(format!(
        "**{} years ago, I {}.**",
        placeholders::YEARS,
        placeholders::PAST_SITUATION
    ))
    .blank();
    d.line(format!("**Today, I {}.**", placeholders::CURRENT_SITUATION))
        .blank();
    d.line(
        "The journey wasn't straightforward. I wrote about this transformation on Medium, \
         and the lessons might surprise you.",
    )
    .blank();

    d.heading("What stood in the way:");
    d.list(&m.problems, 2, ListPlaceholder::Problem, Bullet::Plain("🧱"));

    d.heading("What changed:");
    d.list(&m.solutions, 2, ListPlaceholder::Solution, Bullet::Plain("🔑"));

    d.heading("What I learned:");
    d.list(&m.key_points, 4, ListPlaceholder::KeyPoint, Bullet::Plain("💡"));

    d.heading("The results speak for themselves:");
    d.list(&m.metrics, 3, ListPlaceholder::Metric, Bullet::Plain("✅"));

    d.heading("Why I'm sharing this:");
    d.line(placeholders::MOTIVATION).blank();
    d.line(format!(
        "👉 **Read my full story on Medium:** {}",
        placeholders::MEDIUM_LINK
    ))
    .blank();
    d.rule();

    d.line("💭 **Your turn:**").blank();
    d.line(
        "What's been your biggest learning moment in your career? I'd love to hear your story.",
    )
    .blank();
    d.rule();

    d.hashtags(PostStyle::Story);
}

fn question_post(m: &ArticleMetadata, d: &mut Draft) {
    d.header(&m.title, " (Question Hook)");
    d.line(format!(
        "🤔 **Hot take: {}**",
        placeholders::PROVOCATIVE_STATEMENT
    ))
    .blank();
    d.line(format!(
        "Most professionals don't realize {}. I spent weeks researching this and wrote a detailed analysis.",
        placeholders::SURPRISING_INSIGHT
    ))
    .blank();

    d.heading("Here's what the data shows:");
    d.list(&m.metrics, 3, ListPlaceholder::Metric, Bullet::Plain("📊"));

    d.heading("The problem nobody talks about:");
    d.list(&m.problems, 2, ListPlaceholder::Problem, Bullet::Plain("❌"));

    d.heading("What actually works:");
    d.list(&m.solutions, 2, ListPlaceholder::Solution, Bullet::Plain("✅"));

    d.heading("In my article, I explore:");
    d.list(&m.key_points, 5, ListPlaceholder::KeyPoint, Bullet::Keycap);

    d.heading("The implications are significant:");
    d.line(placeholders::IMPLICATIONS).blank();
    d.line(format!(
        "👉 **Full analysis on Medium:** {}",
        placeholders::MEDIUM_LINK
    ))
    .blank();
    d.rule();

    d.line("💭 **Agree or disagree?**").blank();
    d.line(
        "Comment your thoughts—especially if you think I'm wrong! Let's have a healthy debate. 👇",
    )
    .blank();
    d.rule();

    d.hashtags(PostStyle::Question);
}

fn read_time(minutes: u32) -> String {
    let unit = if minutes == 1 { "minute" } else { "minutes" };
    format!("{minutes} {unit}")
}

// ---------------------------------------------------------------------------
// Draft builder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Bullet {
    /// `marker text`
    Plain(&'static str),
    /// `marker **text**`, markers taken in order, then `🔹`.
    Emphasised(&'static [&'static str]),
    /// `1️⃣ text`, `2️⃣ text`, ...
    Keycap,
}

impl Bullet {
    fn format(self, index: usize, text: &str) -> String {
        match self {
            Bullet::Plain(marker) => format!("{marker} {text}"),
            Bullet::Emphasised(markers) => {
                let marker = markers.get(index).copied().unwrap_or("🔹");
                format!("{marker} **{text}**")
            }
            Bullet::Keycap => format!("{} {text}", keycap(index + 1)),
        }
    }
}

fn keycap(n: usize) -> String {
    match n {
        0..=9 => format!("{n}\u{fe0f}\u{20e3}"),
        10 => "🔟".to_owned(),
        _ => format!("{n}."),
    }
}

/// How many numbered placeholders stand in for an empty list.
fn fallback_count(field: ListPlaceholder) -> usize {
    match field {
        ListPlaceholder::Problem | ListPlaceholder::KeyPoint => 3,
        ListPlaceholder::Solution | ListPlaceholder::Metric => 2,
    }
}

#[derive(Debug, Default)]
struct Draft {
    out: String,
}

impl Draft {
    fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
        self
    }

    fn blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    fn rule(&mut self) -> &mut Self {
        self.line("---").blank()
    }

    fn header(&mut self, title: &str, suffix: &str) -> &mut Self {
        self.line(format!("# LinkedIn Post: {title}{suffix}")).blank().rule()
    }

    fn heading(&mut self, text: &str) -> &mut Self {
        self.line(format!("**{text}**")).blank()
    }

    fn hashtags(&mut self, style: PostStyle) -> &mut Self {
        self.line(style.hashtag_line())
    }

    /// Writes up to `cap` items, or numbered placeholders when `items` is
    /// empty, followed by a blank line.
    fn list(
        &mut self,
        items: &[String],
        cap: usize,
        field: ListPlaceholder,
        bullet: Bullet,
    ) -> &mut Self {
        if items.is_empty() {
            for index in 0..fallback_count(field).min(cap).max(1) {
                self.line(bullet.format(index, &field.numbered(index + 1)));
            }
        } else {
            for (index, item) in items.iter().take(cap).enumerate() {
                self.line(bullet.format(index, item));
            }
        }
        self.blank()
    }

    fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> ArticleMetadata {
        ArticleMetadata {
            title: "Caching at Scale".into(),
            key_points: vec!["Measure first".into(), "Cache the hot path".into()],
            problems: vec!["Costs are too high.".into()],
            solutions: vec!["We built a caching layer.".into()],
            metrics: vec!["85%".into(), "3x".into()],
            word_count: 420,
            read_time_minutes: 3,
        }
    }

    #[test]
    fn default_post_includes_extracted_values() {
        let post = render(&metadata(), PostStyle::Default);
        let text = post.as_str();
        assert!(text.starts_with("# LinkedIn Post: Caching at Scale\n"));
        assert!(text.contains("❌ Costs are too high.\n"));
        assert!(text.contains("🛠️ We built a caching layer.\n"));
        assert!(text.contains("🔍 **Measure first**\n💡 **Cache the hot path**\n"));
        assert!(text.contains("✅ 85%\n✅ 3x\n"));
        assert!(text.contains("- Read Time: 3 minutes\n"));
        assert!(text.contains("- Focus: Caching at Scale\n"));
    }

    #[test]
    fn read_time_unit_is_singular_for_one_minute() {
        let metadata = ArticleMetadata {
            read_time_minutes: 1,
            ..metadata()
        };
        let post = render(&metadata, PostStyle::Default);
        assert!(post.as_str().contains("- Read Time: 1 minute\n"));
    }

    #[test]
    fn list_sections_are_capped_per_style() {
        let metadata = ArticleMetadata {
            problems: (1..=4).map(|i| format!("Problem {i} here.")).collect(),
            ..metadata()
        };
        let technical = render(&metadata, PostStyle::Technical);
        assert!(technical.as_str().contains("⚠️ Problem 2 here."));
        assert!(!technical.as_str().contains("Problem 3 here."));

        let default = render(&metadata, PostStyle::Default);
        assert!(default.as_str().contains("❌ Problem 3 here."));
        assert!(!default.as_str().contains("Problem 4 here."));
    }

    #[test]
    fn question_post_numbers_key_points_with_keycaps() {
        let post = render(&metadata(), PostStyle::Question);
        assert!(post
            .as_str()
            .contains("1\u{fe0f}\u{20e3} Measure first\n2\u{fe0f}\u{20e3} Cache the hot path\n"));
    }

    #[test]
    fn emphasised_bullets_fall_back_after_the_marker_list() {
        assert_eq!(Bullet::Emphasised(KEY_POINT_MARKERS).format(6, "x"), "🔹 **x**");
        assert_eq!(keycap(10), "🔟");
        assert_eq!(keycap(11), "11.");
    }

    #[test]
    fn every_style_ends_with_its_hashtags() {
        for post in render_all(&metadata()) {
            let hashtags = post.style().hashtag_line();
            assert!(post.as_str().contains(&hashtags), "{}", post.style());
        }
    }

    #[test]
    fn render_all_follows_style_order() {
        let styles: Vec<_> = render_all(&metadata()).iter().map(|p| p.style()).collect();
        assert_eq!(styles, PostStyle::ALL.to_vec());
    }
}
