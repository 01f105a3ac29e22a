//! Home page configuration (`home.yaml`).
//!
//! Parsed with the same line cursor as front matter, but with nested
//! sections the flat field parser cannot express:
//!
//! ```yaml
//! hero_section:
//!   site_title: ...
//! about:
//!   - about_title: ...
//!     about_content: |-
//!       ...
//! timeline:
//!   - year: 2018
//!     event:
//!       - event_title: ...
//!         event_content: |-
//!           ...
//! latest_news_slug: some-article
//! ```
//!
//! Missing sections yield empty defaults; a malformed section never fails
//! the whole parse.

use super::frontmatter::{Chomp, LineCursor, indent_of, parse_block_scalar, strip_quotes};
use super::markdown;
use serde::Serialize;

/// The hero banner fields of the home page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeroSection {
    pub site_title: String,
    pub site_subtitle: String,
    pub slogan: String,
    pub btn_text: String,
    pub btn_link: String,
    pub btn_text2: String,
    pub btn_link2: String,
}

/// One titled section of the about block, content rendered to HTML.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AboutSection {
    pub title: String,
    pub content_html: String,
}

/// One event on the timeline. Content stays plain text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineEvent {
    pub title: String,
    pub content: String,
    pub image: String,
    pub link: String,
}

/// A year on the timeline with its events in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineYear {
    pub year: String,
    pub events: Vec<TimelineEvent>,
}

/// Parsed home page configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HomeConfig {
    pub hero: HeroSection,
    pub about: Vec<AboutSection>,
    pub timeline: Vec<TimelineYear>,

    /// Pins a chosen article into the home preview instead of the newest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_news_slug: Option<String>,
}

/// Parse `home.yaml`. Unknown top-level keys are ignored.
pub fn parse(text: &str) -> HomeConfig {
    let mut home = HomeConfig::default();
    let mut cursor = LineCursor::new(text);

    while let Some(line) = cursor.peek() {
        if indent_of(line) != 0 || line.trim().is_empty() {
            cursor.bump();
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            cursor.bump();
            continue;
        };
        match (key.trim(), value.trim()) {
            ("hero_section", "") => {
                cursor.bump();
                home.hero = parse_hero(&mut cursor);
            }
            ("about", "") => {
                cursor.bump();
                home.about = parse_about(&mut cursor);
            }
            ("timeline", "") => {
                cursor.bump();
                home.timeline = parse_timeline(&mut cursor);
            }
            ("latest_news_slug", v) if !v.is_empty() => {
                home.latest_news_slug = Some(strip_quotes(v).to_owned());
                cursor.bump();
            }
            _ => {
                cursor.bump();
            }
        }
    }
    home
}

/// Scalar fields of the indented `hero_section:` block.
fn parse_hero(cursor: &mut LineCursor) -> HeroSection {
    let mut hero = HeroSection::default();

    while let Some(line) = cursor.peek() {
        if line.trim().is_empty() {
            cursor.bump();
            continue;
        }
        if indent_of(line) == 0 {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            let value = strip_quotes(value).to_owned();
            match key.trim() {
                "site_title" => hero.site_title = value,
                "site_subtitle" => hero.site_subtitle = value,
                "slogan" => hero.slogan = value,
                "btn_text" => hero.btn_text = value,
                "btn_link" => hero.btn_link = value,
                "btn_text2" => hero.btn_text2 = value,
                "btn_link2" => hero.btn_link2 = value,
                _ => {}
            }
        }
        cursor.bump();
    }
    hero
}

/// `- about_title:` items with optional `about_content:` block scalars.
fn parse_about(cursor: &mut LineCursor) -> Vec<AboutSection> {
    let mut sections: Vec<(String, String)> = Vec::new();

    while let Some(line) = cursor.peek() {
        if line.trim().is_empty() {
            cursor.bump();
            continue;
        }
        if indent_of(line) == 0 {
            break;
        }
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("- about_title:") {
            sections.push((strip_quotes(rest).to_owned(), String::new()));
            cursor.bump();
        } else if let Some(rest) = trimmed.strip_prefix("about_content:") {
            let key_indent = indent_of(line);
            cursor.bump();
            let content = parse_maybe_block(cursor, key_indent, rest);
            if let Some(section) = sections.last_mut() {
                section.1 = content;
            }
        } else {
            cursor.bump();
        }
    }

    sections
        .into_iter()
        .map(|(title, content)| AboutSection {
            title,
            content_html: markdown::render(&content),
        })
        .collect()
}

/// `- year:` items, each with an `event:` list of `- event_title:` entries.
fn parse_timeline(cursor: &mut LineCursor) -> Vec<TimelineYear> {
    let mut years: Vec<TimelineYear> = Vec::new();

    while let Some(line) = cursor.peek() {
        if line.trim().is_empty() {
            cursor.bump();
            continue;
        }
        if indent_of(line) == 0 {
            break;
        }
        let trimmed = line.trim();
        let key_indent = indent_of(line);

        if let Some(rest) = trimmed.strip_prefix("- year:") {
            years.push(TimelineYear {
                year: strip_quotes(rest).to_owned(),
                events: Vec::new(),
            });
            cursor.bump();
        } else if let Some(rest) = trimmed.strip_prefix("- event_title:") {
            if let Some(year) = years.last_mut() {
                year.events.push(TimelineEvent {
                    title: strip_quotes(rest).to_owned(),
                    ..TimelineEvent::default()
                });
            }
            cursor.bump();
        } else if let Some(rest) = trimmed.strip_prefix("event_content:") {
            cursor.bump();
            let content = parse_maybe_block(cursor, key_indent, rest);
            if let Some(event) = last_event(&mut years) {
                event.content = content;
            }
        } else if let Some(rest) = trimmed.strip_prefix("event_image:") {
            if let Some(event) = last_event(&mut years) {
                event.image = strip_quotes(rest).to_owned();
            }
            cursor.bump();
        } else if let Some(rest) = trimmed.strip_prefix("event_link:") {
            if let Some(event) = last_event(&mut years) {
                event.link = strip_quotes(rest).to_owned();
            }
            cursor.bump();
        } else {
            // `event:` markers and anything unrecognized
            cursor.bump();
        }
    }
    years
}

fn last_event(years: &mut [TimelineYear]) -> Option<&mut TimelineEvent> {
    years.last_mut()?.events.last_mut()
}

/// A field value that is either an inline scalar or a `|`/`|-` block.
fn parse_maybe_block(cursor: &mut LineCursor, key_indent: usize, rest: &str) -> String {
    match rest.trim() {
        "|" => parse_block_scalar(cursor, key_indent, Chomp::Keep),
        "|-" => parse_block_scalar(cursor, key_indent, Chomp::Strip),
        inline => strip_quotes(inline).to_owned(),
    }
}
