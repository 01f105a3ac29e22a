//! Presenters: pure `(records, pagination) -> view record` functions.
//!
//! View records are plain serializable structs with everything a renderer
//! needs and nothing it has to compute. Rendering lives behind
//! [`crate::view::html::FragmentRender`], so presenters are testable
//! without producing a byte of markup.

use crate::content::home::{AboutSection, HeroSection, TimelineYear};
use crate::content::record::{Article, FaqEntry, Message};
use crate::repo::store::ContentStore;
use serde::Serialize;

/// Items per page on listing views.
pub const LISTING_PAGE_SIZE: usize = 6;

/// Articles shown in the home preview.
pub const HOME_NEWS_PREVIEW: usize = 4;

/// Messages shown in the home preview.
pub const HOME_MESSAGES_PREVIEW: usize = 3;

// ============================================================================
// Pagination
// ============================================================================

/// Resolved pagination state for a listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Current page, 1-based, clamped into range.
    pub page: usize,
    /// Ceiling of items over page size; 0 when the listing is empty.
    pub total_pages: usize,
    pub total_items: usize,
}

impl PageInfo {
    /// Clamp `requested` and compute the index range of the current page.
    fn resolve(total_items: usize, page_size: usize, requested: usize) -> (Self, std::ops::Range<usize>) {
        let total_pages = total_items.div_ceil(page_size);
        let page = requested.clamp(1, total_pages.max(1));
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total_items);
        (
            Self {
                page,
                total_pages,
                total_items,
            },
            start..end,
        )
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

// ============================================================================
// View records
// ============================================================================

/// One article card in a listing or preview.
#[derive(Debug, Clone, Serialize)]
pub struct NewsCard {
    pub slug: String,
    pub title: String,
    pub date_label: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub excerpt: String,
}

impl NewsCard {
    fn of(article: &Article) -> Self {
        Self {
            slug: article.slug.clone(),
            title: article.title.clone(),
            date_label: article.date_label.clone(),
            category: article.category.clone(),
            tags: article.tags.clone(),
            image: article.image.clone(),
            excerpt: article.excerpt.clone(),
        }
    }
}

/// A paginated news listing.
#[derive(Debug, Clone, Serialize)]
pub struct NewsListView {
    pub cards: Vec<NewsCard>,
    pub pages: PageInfo,
}

/// Slug and title of a neighboring article.
#[derive(Debug, Clone, Serialize)]
pub struct NavRef {
    pub slug: String,
    pub title: String,
}

/// A full article detail view.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleView {
    pub slug: String,
    pub title: String,
    pub date_label: String,
    pub category: String,
    pub tags: Vec<String>,
    pub html: String,
    pub prev: Option<NavRef>,
    pub next: Option<NavRef>,
    pub related: Vec<NewsCard>,
}

/// One support message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageView {
    pub author: String,
    pub date_label: String,
    pub text: String,
}

/// A paginated message board.
#[derive(Debug, Clone, Serialize)]
pub struct MessageBoardView {
    pub items: Vec<MessageView>,
    pub pages: PageInfo,
}

/// The FAQ in display order.
#[derive(Debug, Clone, Serialize)]
pub struct FaqView {
    pub entries: Vec<FaqEntry>,
}

/// The home page: hero, about, timeline, and content previews.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub hero: HeroSection,
    pub about: Vec<AboutSection>,
    pub timeline: Vec<TimelineYear>,
    /// The pinned or newest article, shown as the banner.
    pub headline: Option<NewsCard>,
    pub news_preview: Vec<NewsCard>,
    pub message_preview: Vec<MessageView>,
}

// ============================================================================
// Presenters
// ============================================================================

/// A page of article cards. Accepts pre-filtered slices so filters and
/// pagination compose.
pub fn news_list(articles: &[&Article], page: usize) -> NewsListView {
    let (pages, range) = PageInfo::resolve(articles.len(), LISTING_PAGE_SIZE, page);
    NewsListView {
        cards: articles[range].iter().map(|a| NewsCard::of(a)).collect(),
        pages,
    }
}

/// Detail view of one article with neighbors and related cards.
pub fn article_detail(store: &ContentStore, article: &Article) -> ArticleView {
    let (prev, next) = store.prev_next(&article.slug);
    let nav = |a: &Article| NavRef {
        slug: a.slug.clone(),
        title: a.title.clone(),
    };
    ArticleView {
        slug: article.slug.clone(),
        title: article.title.clone(),
        date_label: article.date_label.clone(),
        category: article.category.clone(),
        tags: article.tags.clone(),
        html: article.html.clone(),
        prev: prev.map(nav),
        next: next.map(nav),
        related: store
            .related_articles(article)
            .into_iter()
            .map(NewsCard::of)
            .collect(),
    }
}

/// A page of the message board.
pub fn message_board(messages: &[Message], page: usize) -> MessageBoardView {
    let (pages, range) = PageInfo::resolve(messages.len(), LISTING_PAGE_SIZE, page);
    MessageBoardView {
        items: messages[range].iter().map(message_view).collect(),
        pages,
    }
}

fn message_view(message: &Message) -> MessageView {
    MessageView {
        author: message.author.clone(),
        date_label: message.date_label.clone(),
        text: message.text.clone(),
    }
}

/// The FAQ, already sorted by the store.
pub fn faq(store: &ContentStore) -> FaqView {
    FaqView {
        entries: store.faq.clone(),
    }
}

/// The home page preview composition.
pub fn home(store: &ContentStore) -> HomeView {
    HomeView {
        hero: store.home.hero.clone(),
        about: store.home.about.clone(),
        timeline: store.home.timeline.clone(),
        headline: store.home_headline().map(NewsCard::of),
        news_preview: store
            .articles
            .iter()
            .take(HOME_NEWS_PREVIEW)
            .map(NewsCard::of)
            .collect(),
        message_preview: store
            .messages
            .iter()
            .take(HOME_MESSAGES_PREVIEW)
            .map(message_view)
            .collect(),
    }
}
