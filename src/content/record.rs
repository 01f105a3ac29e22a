//! Typed content records.
//!
//! A [`ContentRecord`] is the raw parse result of one content file. The
//! typed projections ([`Article`], [`Message`], [`FaqEntry`]) pull their
//! fields out of it, applying the visibility gate and defaults. Records
//! with `published: false` never become typed records.

use super::frontmatter::{self, Fields, Value};
use super::markdown;
use crate::utils::date::DateTimeUtc;
use crate::utils::slug;
use serde::Serialize;
use std::cmp::Ordering;

/// Excerpt length in characters when no explicit excerpt is given.
const EXCERPT_CHARS: usize = 150;

// ============================================================================
// Raw records
// ============================================================================

/// One parsed content file: fields, raw body, derived slug.
#[derive(Debug, Clone)]
pub struct ContentRecord {
    pub fields: Fields,
    pub body: String,
    pub slug: String,
}

impl ContentRecord {
    /// Parse a content file. The slug comes from the `slug` field when
    /// present, otherwise from the file name.
    pub fn from_text(file_name: &str, text: &str) -> Self {
        let doc = frontmatter::parse(text);
        let slug = doc
            .fields
            .get("slug")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| slug::from_file_name(file_name));
        Self {
            fields: doc.fields,
            body: doc.body,
            slug,
        }
    }

    /// The canonical visibility gate: only `published: false` hides a
    /// record, anything else (including absence) is visible.
    pub fn is_published(&self) -> bool {
        self.fields
            .get("published")
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn num_field(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_num)
    }

    pub fn list_field(&self, key: &str) -> Vec<String> {
        self.fields
            .get(key)
            .and_then(Value::as_list)
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    pub fn date(&self) -> Option<DateTimeUtc> {
        DateTimeUtc::parse(self.str_field("date")?)
    }
}

// ============================================================================
// Articles
// ============================================================================

/// A published article, ready for listing and detail views.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub slug: String,
    pub title: String,

    /// Raw date string as written in the file, for display.
    pub date_label: String,

    #[serde(skip)]
    pub date: Option<DateTimeUtc>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub category: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    pub excerpt: String,

    /// Body rendered to HTML.
    pub html: String,
}

impl Article {
    /// Project a record into an article. Unpublished records yield `None`.
    pub fn from_record(record: &ContentRecord) -> Option<Self> {
        if !record.is_published() {
            return None;
        }

        let title = record
            .str_field("title")
            .filter(|t| !t.is_empty())
            .unwrap_or("Untitled")
            .to_owned();

        let excerpt = match record.str_field("excerpt").filter(|e| !e.is_empty()) {
            Some(explicit) => explicit.trim().to_owned(),
            None => excerpt_of(&record.body),
        };

        Some(Self {
            slug: record.slug.clone(),
            title,
            date_label: record.str_field("date").unwrap_or_default().to_owned(),
            date: record.date(),
            category: record.str_field("category").unwrap_or_default().to_owned(),
            tags: record.list_field("tags"),
            image: record
                .str_field("image")
                .filter(|i| !i.is_empty())
                .map(str::to_owned),
            excerpt,
            html: markdown::render(&record.body),
        })
    }
}

/// First `EXCERPT_CHARS` characters of the plain body, with an ellipsis
/// when truncated.
fn excerpt_of(body: &str) -> String {
    let plain = markdown::to_plain_text(body);
    let mut excerpt: String = plain.chars().take(EXCERPT_CHARS).collect();
    if plain.chars().count() > EXCERPT_CHARS {
        excerpt.push_str("...");
    }
    excerpt
}

/// Newest first; undated records sink to the end; title breaks ties.
pub fn compare_articles(a: &Article, b: &Article) -> Ordering {
    match (a.date, b.date) {
        (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.title.cmp(&b.title)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    }
}

// ============================================================================
// Support messages
// ============================================================================

/// A published support message. Bodies stay plain text by policy.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub slug: String,
    pub author: String,
    pub date_label: String,

    #[serde(skip)]
    pub date: Option<DateTimeUtc>,

    /// Trimmed plain text, never rendered as markdown.
    pub text: String,
}

impl Message {
    pub fn from_record(record: &ContentRecord) -> Option<Self> {
        if !record.is_published() {
            return None;
        }
        let author = record
            .str_field("author")
            .filter(|a| !a.is_empty())
            .unwrap_or("Anonymous")
            .to_owned();
        Some(Self {
            slug: record.slug.clone(),
            author,
            date_label: record.str_field("date").unwrap_or_default().to_owned(),
            date: record.date(),
            text: record.body.trim().to_owned(),
        })
    }
}

pub fn compare_messages(a: &Message, b: &Message) -> Ordering {
    match (a.date, b.date) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.author.cmp(&b.author),
    }
}

// ============================================================================
// FAQ
// ============================================================================

/// A published FAQ entry. Ordered by the explicit `order` field.
#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub slug: String,
    pub question: String,
    pub answer_html: String,
    pub order: f64,
}

impl FaqEntry {
    pub fn from_record(record: &ContentRecord) -> Option<Self> {
        if !record.is_published() {
            return None;
        }
        Some(Self {
            slug: record.slug.clone(),
            question: record
                .str_field("title")
                .filter(|t| !t.is_empty())
                .unwrap_or("Untitled")
                .to_owned(),
            answer_html: markdown::render(&record.body),
            order: record.num_field("order").unwrap_or(0.0),
        })
    }
}

/// Ascending `order`; entries without one sort as 0.
pub fn compare_faq(a: &FaqEntry, b: &FaqEntry) -> Ordering {
    a.order
        .total_cmp(&b.order)
        .then_with(|| a.question.cmp(&b.question))
}
