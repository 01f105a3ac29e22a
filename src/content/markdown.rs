//! Markdown rendering for content bodies.
//!
//! A fixed-precedence regex subset, not a conforming Markdown engine. The
//! passes run in this order and the order is load-bearing:
//!
//! 1. ATX headings `#`..`#####`
//! 2. Bold `**text**` (before italic, so `**` never reads as two `*`)
//! 3. Italic `*text*`
//! 4. Images `![alt](url "title")` (before links; the quoted title is discarded)
//! 5. Links `[text](url)`
//! 6. Paragraph wrapping on blank lines
//!
//! Content is trusted first-party markdown, so nothing is HTML-escaped;
//! raw HTML blocks pass through untouched.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,5})[ \t]+(.+?)[ \t]*$").unwrap());

static RE_BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

static RE_ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

static RE_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

static RE_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Render a markdown body to an HTML fragment.
pub fn render(markdown: &str) -> String {
    let html = RE_HEADING.replace_all(markdown, |caps: &Captures| {
        let level = caps[1].len();
        format!("<h{level}>{}</h{level}>", &caps[2])
    });

    let html = RE_BOLD.replace_all(&html, "<strong>$1</strong>");
    let html = RE_ITALIC.replace_all(&html, "<em>$1</em>");

    let html = RE_IMAGE.replace_all(&html, |caps: &Captures| {
        // A quoted title is discarded: cut the url at the first quote
        let url = caps[2].split('"').next().unwrap_or("").trim();
        format!("<img src=\"{url}\" alt=\"{}\">", &caps[1])
    });

    let html = RE_LINK.replace_all(&html, "<a href=\"$2\">$1</a>");

    wrap_paragraphs(&html)
}

/// Wrap text blocks in `<p>`, leaving blocks that already start with a tag
/// alone. Blocks are separated by blank lines; single newlines inside a
/// block are preserved.
fn wrap_paragraphs(html: &str) -> String {
    html.split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            if block.starts_with('<') {
                block.to_owned()
            } else {
                format!("<p>{block}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-text form of a markdown body, for excerpts. Strips the inline
/// markers the renderer would turn into tags and drops image lines.
pub fn to_plain_text(markdown: &str) -> String {
    let text = RE_IMAGE.replace_all(markdown, "");
    let text = RE_LINK.replace_all(&text, "$1");
    let text = RE_HEADING.replace_all(&text, "$2");
    let text = RE_BOLD.replace_all(&text, "$1");
    let text = RE_ITALIC.replace_all(&text, "$1");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
