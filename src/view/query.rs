//! Listing query strings.
//!
//! The static pages select content through URL query parameters:
//! `slug`/`id` pick an article, `cat`/`tag`/`date` filter listings, and
//! `page` paginates. [`ListingQuery`] is the typed form; parsing ignores
//! unknown keys and malformed pairs, and encoding emits keys in a fixed
//! order so a parsed query re-encodes to the same string.

use crate::repo::filter::{DateWindow, FilterCriteria};
use std::borrow::Cow;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    /// Article slug selector.
    pub slug: Option<String>,
    /// 1-based position selector, kept verbatim for the lookup fallback.
    pub id: Option<String>,
    pub cat: Option<String>,
    pub tag: Option<String>,
    pub date: Option<DateWindow>,
    pub page: Option<usize>,
}

impl ListingQuery {
    /// Parse a query string, with or without the leading `?`. Later
    /// duplicates of a key win. Keys this module does not know are
    /// skipped, as are pairs whose value fails to decode.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut parsed = Self::default();

        for pair in query.split('&') {
            let (key, raw) = match pair.split_once('=') {
                Some((key, raw)) => (key, raw),
                None => (pair, ""),
            };
            let Ok(value) = urlencoding::decode(raw) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            match key {
                "slug" => parsed.slug = Some(value.into_owned()),
                "id" => parsed.id = Some(value.into_owned()),
                "cat" => parsed.cat = Some(value.into_owned()),
                "tag" => parsed.tag = Some(value.into_owned()),
                "date" => parsed.date = DateWindow::parse(&value),
                "page" => parsed.page = value.parse().ok(),
                _ => {}
            }
        }

        parsed
    }

    /// Encode the set fields, keys in the fixed order
    /// `slug, id, cat, tag, date, page`. Empty query encodes to `""`.
    pub fn encode(&self) -> String {
        let mut pairs: Vec<(&str, Cow<'_, str>)> = Vec::new();

        if let Some(slug) = &self.slug {
            pairs.push(("slug", urlencoding::encode(slug)));
        }
        if let Some(id) = &self.id {
            pairs.push(("id", urlencoding::encode(id)));
        }
        if let Some(cat) = &self.cat {
            pairs.push(("cat", urlencoding::encode(cat)));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag", urlencoding::encode(tag)));
        }
        if let Some(date) = self.date {
            pairs.push(("date", Cow::Borrowed(date.as_str())));
        }
        if let Some(page) = self.page {
            pairs.push(("page", Cow::Owned(page.to_string())));
        }

        pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// The filter portion of the query.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category: self.cat.clone(),
            tag: self.tag.clone(),
            date: self.date,
        }
    }

    /// The requested page, defaulting to the first.
    pub fn page_or_first(&self) -> usize {
        self.page.unwrap_or(1)
    }
}
