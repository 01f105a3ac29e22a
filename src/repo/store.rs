//! The assembled content store.
//!
//! Holds every published record, already projected into its typed form
//! and sorted: articles newest first, messages newest first, FAQ by its
//! explicit order. Unpublished records are dropped during assembly and
//! never reach a presenter.

use crate::content::home::HomeConfig;
use crate::content::record::{
    Article, ContentRecord, FaqEntry, Message, compare_articles, compare_faq, compare_messages,
};
use serde::Serialize;

/// How many related articles a detail view shows.
pub const RELATED_LIMIT: usize = 3;

#[derive(Debug, Default, Serialize)]
pub struct ContentStore {
    pub articles: Vec<Article>,
    pub messages: Vec<Message>,
    pub faq: Vec<FaqEntry>,
    pub home: HomeConfig,
}

impl ContentStore {
    /// Project raw records into their typed forms, dropping unpublished
    /// ones, and sort each collection.
    pub fn assemble(
        news: Vec<ContentRecord>,
        messages: Vec<ContentRecord>,
        faq: Vec<ContentRecord>,
        home: HomeConfig,
    ) -> Self {
        let mut articles: Vec<_> = news.iter().filter_map(Article::from_record).collect();
        articles.sort_by(compare_articles);

        let mut messages: Vec<_> = messages.iter().filter_map(Message::from_record).collect();
        messages.sort_by(compare_messages);

        let mut faq: Vec<_> = faq.iter().filter_map(FaqEntry::from_record).collect();
        faq.sort_by(compare_faq);

        Self {
            articles,
            messages,
            faq,
            home,
        }
    }

    /// Look an article up by slug, or by a 1-based position in the sorted
    /// list. A present slug settles the lookup either way: an unmatched
    /// slug is absent, never a fall-through to the position.
    pub fn find_by_slug_or_position(
        &self,
        slug: Option<&str>,
        position: Option<&str>,
    ) -> Option<&Article> {
        if let Some(slug) = slug {
            return self.articles.iter().find(|a| a.slug == slug);
        }

        let index = position?.trim().parse::<usize>().ok()?;
        if index == 0 {
            return None;
        }
        self.articles.get(index - 1)
    }

    /// The article pinned by `latest_news_slug`, else the newest one.
    pub fn home_headline(&self) -> Option<&Article> {
        if let Some(slug) = &self.home.latest_news_slug
            && let Some(pinned) = self.articles.iter().find(|a| &a.slug == slug)
        {
            return Some(pinned);
        }
        self.articles.first()
    }

    /// Related articles for a detail view: same category first, then
    /// shared tags, never the article itself, capped at [`RELATED_LIMIT`].
    pub fn related_articles(&self, article: &Article) -> Vec<&Article> {
        let mut related: Vec<&Article> = Vec::new();

        let same_category = self.articles.iter().filter(|other| {
            other.slug != article.slug
                && !article.category.is_empty()
                && other.category == article.category
        });
        for other in same_category {
            if related.len() == RELATED_LIMIT {
                return related;
            }
            related.push(other);
        }

        let shares_tag = |other: &Article| other.tags.iter().any(|t| article.tags.contains(t));
        for other in &self.articles {
            if related.len() == RELATED_LIMIT {
                break;
            }
            if other.slug != article.slug
                && !related.iter().any(|r| r.slug == other.slug)
                && shares_tag(other)
            {
                related.push(other);
            }
        }

        related
    }

    /// Neighbors of an article in the sorted list: previous is newer,
    /// next is older.
    pub fn prev_next(&self, slug: &str) -> (Option<&Article>, Option<&Article>) {
        let Some(index) = self.articles.iter().position(|a| a.slug == slug) else {
            return (None, None);
        };
        let prev = index.checked_sub(1).and_then(|i| self.articles.get(i));
        let next = self.articles.get(index + 1);
        (prev, next)
    }
}
