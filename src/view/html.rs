//! HTML fragment rendering.
//!
//! The presenters hand over plain view records; this module binds them to
//! markup. [`FragmentRender`] is the seam: swap the implementation and the
//! presenters never notice. Empty collections render their defined
//! placeholder fragment, never blank markup.
//!
//! Like the markdown renderer, nothing here escapes HTML: the content is
//! trusted first-party material.

use super::model::{
    ArticleView, FaqView, HomeView, MessageBoardView, MessageView, NewsCard, NewsListView,
};
use crate::content::home::TimelineYear;

/// Placeholder fragments for empty collections.
pub mod placeholder {
    pub const NEWS: &str = "<p>暂无新闻</p>";
    pub const ARTICLES: &str = "<div class=\"no-articles\">暂无文章</div>";
    pub const MESSAGES: &str = "<p>暂无留言</p>";
    pub const TIMELINE: &str = "<p>暫無時間線內容</p>";
    pub const ABOUT: &str = "<p>暂无关于内容</p>";
    pub const FAQ: &str = "<p>暂无FAQ内容</p>";
    pub const RELATED: &str = "<p>暂无相关文章</p>";
}

/// Binds view records to markup fragments.
pub trait FragmentRender {
    fn news_list(&self, view: &NewsListView) -> String;
    fn article(&self, view: &ArticleView) -> String;
    fn message_board(&self, view: &MessageBoardView) -> String;
    fn faq(&self, view: &FaqView) -> String;
    fn home(&self, view: &HomeView) -> String;
}

/// The stock HTML renderer.
pub struct HtmlFragments;

impl HtmlFragments {
    fn card(card: &NewsCard) -> String {
        let mut html = String::from("<article class=\"news-card\">\n");
        if let Some(image) = &card.image {
            html.push_str(&format!("<img src=\"{image}\" alt=\"{}\">\n", card.title));
        }
        html.push_str(&format!(
            "<h3><a href=\"{}\">{}</a></h3>\n",
            article_href(&card.slug),
            card.title
        ));
        if !card.date_label.is_empty() || !card.category.is_empty() {
            html.push_str(&format!(
                "<p class=\"news-meta\">{} {}</p>\n",
                card.date_label, card.category
            ));
        }
        html.push_str(&format!("<p class=\"news-excerpt\">{}</p>\n", card.excerpt));
        html.push_str("</article>");
        html
    }

    fn cards(cards: &[NewsCard], empty: &str) -> String {
        if cards.is_empty() {
            return empty.to_owned();
        }
        cards
            .iter()
            .map(Self::card)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn message(message: &MessageView) -> String {
        format!(
            "<div class=\"message\">\n<p class=\"message-text\">{}</p>\n<p class=\"message-meta\">{} · {}</p>\n</div>",
            message.text, message.author, message.date_label
        )
    }

    fn timeline(timeline: &[TimelineYear]) -> String {
        if timeline.is_empty() {
            return placeholder::TIMELINE.to_owned();
        }
        timeline
            .iter()
            .map(|year| {
                let events = year
                    .events
                    .iter()
                    .map(|event| {
                        let mut html =
                            format!("<div class=\"timeline-event\">\n<h4>{}</h4>\n", event.title);
                        if !event.content.is_empty() {
                            html.push_str(&format!("<p>{}</p>\n", event.content));
                        }
                        if !event.image.is_empty() {
                            html.push_str(&format!(
                                "<img src=\"{}\" alt=\"{}\">\n",
                                event.image, event.title
                            ));
                        }
                        if !event.link.is_empty() {
                            html.push_str(&format!("<a href=\"{}\">更多</a>\n", event.link));
                        }
                        html.push_str("</div>");
                        html
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "<section class=\"timeline-year\">\n<h3>{}</h3>\n{events}\n</section>",
                    year.year
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn pager(view: &NewsListView) -> String {
        if view.pages.total_pages <= 1 {
            return String::new();
        }
        format!(
            "\n<nav class=\"pagination\"><span class=\"page-current\">{} / {}</span></nav>",
            view.pages.page, view.pages.total_pages
        )
    }
}

impl FragmentRender for HtmlFragments {
    fn news_list(&self, view: &NewsListView) -> String {
        if view.cards.is_empty() {
            return placeholder::ARTICLES.to_owned();
        }
        format!(
            "{}{}",
            Self::cards(&view.cards, placeholder::ARTICLES),
            Self::pager(view)
        )
    }

    fn article(&self, view: &ArticleView) -> String {
        let mut html = format!(
            "<article class=\"article-detail\">\n<h1>{}</h1>\n<p class=\"article-meta\">{} {}</p>\n{}\n</article>\n",
            view.title, view.date_label, view.category, view.html
        );

        html.push_str("<nav class=\"article-nav\">\n");
        if let Some(prev) = &view.prev {
            html.push_str(&format!(
                "<a class=\"prev\" href=\"{}\">{}</a>\n",
                article_href(&prev.slug),
                prev.title
            ));
        }
        if let Some(next) = &view.next {
            html.push_str(&format!(
                "<a class=\"next\" href=\"{}\">{}</a>\n",
                article_href(&next.slug),
                next.title
            ));
        }
        html.push_str("</nav>\n");

        html.push_str("<aside class=\"related\">\n");
        html.push_str(&Self::cards(&view.related, placeholder::RELATED));
        html.push_str("\n</aside>");
        html
    }

    fn message_board(&self, view: &MessageBoardView) -> String {
        if view.items.is_empty() {
            return placeholder::MESSAGES.to_owned();
        }
        view.items
            .iter()
            .map(Self::message)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn faq(&self, view: &FaqView) -> String {
        if view.entries.is_empty() {
            return placeholder::FAQ.to_owned();
        }
        view.entries
            .iter()
            .map(|entry| {
                format!(
                    "<details class=\"faq-entry\">\n<summary>{}</summary>\n{}\n</details>",
                    entry.question, entry.answer_html
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn home(&self, view: &HomeView) -> String {
        let hero = &view.hero;
        let mut html = format!(
            "<section class=\"hero\">\n<h1>{}</h1>\n<h2>{}</h2>\n<p class=\"slogan\">{}</p>\n",
            hero.site_title, hero.site_subtitle, hero.slogan
        );
        if !hero.btn_text.is_empty() {
            html.push_str(&format!(
                "<a class=\"cta\" href=\"{}\">{}</a>\n",
                hero.btn_link, hero.btn_text
            ));
        }
        if !hero.btn_text2.is_empty() {
            html.push_str(&format!(
                "<a class=\"cta\" href=\"{}\">{}</a>\n",
                hero.btn_link2, hero.btn_text2
            ));
        }
        html.push_str("</section>\n");

        html.push_str("<section class=\"about\">\n");
        if view.about.is_empty() {
            html.push_str(placeholder::ABOUT);
        } else {
            for section in &view.about {
                html.push_str(&format!(
                    "<h3>{}</h3>\n{}\n",
                    section.title, section.content_html
                ));
            }
        }
        html.push_str("</section>\n");

        html.push_str("<section class=\"timeline\">\n");
        html.push_str(&Self::timeline(&view.timeline));
        html.push_str("\n</section>\n");

        html.push_str("<section class=\"latest-news\">\n");
        if let Some(headline) = &view.headline {
            html.push_str(&format!(
                "<div class=\"headline\">{}</div>\n",
                Self::card(headline)
            ));
        }
        html.push_str(&Self::cards(&view.news_preview, placeholder::NEWS));
        html.push_str("\n</section>\n");

        html.push_str("<section class=\"message-preview\">\n");
        if view.message_preview.is_empty() {
            html.push_str(placeholder::MESSAGES);
        } else {
            html.push_str(
                &view
                    .message_preview
                    .iter()
                    .map(Self::message)
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
        html.push_str("\n</section>");
        html
    }
}

/// Link to an article detail page by slug.
pub fn article_href(slug: &str) -> String {
    format!("article.html?slug={}", urlencoding::encode(slug))
}
