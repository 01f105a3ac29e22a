//! Site building orchestration.
//!
//! Fetches the remote content, assembles the store, and writes the site:
//!
//! ```text
//! build_site()
//!     │
//!     ├── load_all() ──► fetch categories concurrently, assemble store
//!     │
//!     └── write_site()
//!             ├── home, news listings, article pages
//!             ├── category and tag listings
//!             ├── message board, FAQ
//!             └── data/site.json (the full store, for external tools)
//! ```
//!
//! Every page is one template with its placeholder elements filled from
//! rendered fragments, so the layout lives in `page.html` and nowhere else.

use crate::config::SiteConfig;
use crate::content::record::Article;
use crate::log;
use crate::repo::fetch::HttpFetcher;
use crate::repo::filter::{FilterCriteria, apply_filters, today};
use crate::repo::loader::load_all;
use crate::repo::store::ContentStore;
use crate::utils::slug;
use crate::view::html::{FragmentRender, HtmlFragments};
use crate::view::model;
use crate::view::page::PageTemplate;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Fallback page template, used when the site ships none of its own.
const PAGE_TEMPLATE: &str = include_str!("embed/page.html");

/// Fetch all content and write the site to the output directory.
pub async fn build_site(config: &SiteConfig) -> Result<()> {
    let fetcher = HttpFetcher::new();
    let store = load_all(&fetcher, config).await;
    write_site(config, &store)
}

/// Write every page of the site from an assembled store.
pub fn write_site(config: &SiteConfig, store: &ContentStore) -> Result<()> {
    let output = &config.content.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    let template = load_template(config)?;
    let renderer = HtmlFragments;
    let site_title = &config.base.title;

    // Home
    let home = renderer.home(&model::home(store));
    write_page(
        &output.join("index.html"),
        &template,
        site_title,
        &home,
        config,
    )?;

    // News listings, unfiltered
    let all: Vec<&Article> = store.articles.iter().collect();
    let mut pages = write_listing(
        &output.join("news"),
        &all,
        &format!("新聞 - {site_title}"),
        &template,
        &renderer,
        config,
    )?;

    // One listing per category and per tag
    let now = today();
    for category in distinct(store.articles.iter().map(|a| a.category.as_str())) {
        let criteria = FilterCriteria {
            category: Some(category.to_owned()),
            ..FilterCriteria::default()
        };
        pages += write_listing(
            &output.join("news").join("cat").join(slug::from_title(category)),
            &apply_filters(&store.articles, &criteria, now),
            &format!("{category} - {site_title}"),
            &template,
            &renderer,
            config,
        )?;
    }
    for tag in distinct(store.articles.iter().flat_map(|a| a.tags.iter().map(String::as_str))) {
        let criteria = FilterCriteria {
            tag: Some(tag.to_owned()),
            ..FilterCriteria::default()
        };
        pages += write_listing(
            &output.join("news").join("tag").join(slug::from_title(tag)),
            &apply_filters(&store.articles, &criteria, now),
            &format!("{tag} - {site_title}"),
            &template,
            &renderer,
            config,
        )?;
    }

    // Article detail pages
    for article in &store.articles {
        let fragment = renderer.article(&model::article_detail(store, article));
        write_page(
            &output.join("article").join(&article.slug).join("index.html"),
            &template,
            &format!("{} - {site_title}", article.title),
            &fragment,
            config,
        )?;
        pages += 1;
    }

    // Message board
    pages += write_message_board(output, store, &template, &renderer, config)?;

    // FAQ
    let faq = renderer.faq(&model::faq(store));
    write_page(
        &output.join("faq").join("index.html"),
        &template,
        &format!("FAQ - {site_title}"),
        &faq,
        config,
    )?;

    // Full store as JSON, for external tools and client scripts
    let data_path = output.join("data").join("site.json");
    let json = serde_json::to_string_pretty(store).context("Failed to serialize site data")?;
    write_file(&data_path, &json)?;

    // Plus the home and FAQ pages
    log!("build"; "wrote {} pages, {} articles", pages + 2, store.articles.len());
    Ok(())
}

/// The site's own `page.html` if present, else the embedded fallback.
fn load_template(config: &SiteConfig) -> Result<String> {
    let path = config.content.templates.join("page.html");
    if path.is_file() {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read template: {}", path.display()))
    } else {
        Ok(PAGE_TEMPLATE.to_owned())
    }
}

/// Paginated listing pages: `index.html` for the first page,
/// `page-N.html` for the rest. Returns the number of pages written.
fn write_listing(
    dir: &Path,
    articles: &[&Article],
    title: &str,
    template: &str,
    renderer: &HtmlFragments,
    config: &SiteConfig,
) -> Result<usize> {
    let total_pages = model::news_list(articles, 1).pages.total_pages.max(1);
    for page in 1..=total_pages {
        let fragment = renderer.news_list(&model::news_list(articles, page));
        write_page(&listing_path(dir, page), template, title, &fragment, config)?;
    }
    Ok(total_pages)
}

fn write_message_board(
    output: &Path,
    store: &ContentStore,
    template: &str,
    renderer: &HtmlFragments,
    config: &SiteConfig,
) -> Result<usize> {
    let dir = output.join("messages");
    let title = format!("留言 - {}", config.base.title);
    let total_pages = model::message_board(&store.messages, 1)
        .pages
        .total_pages
        .max(1);
    for page in 1..=total_pages {
        let fragment = renderer.message_board(&model::message_board(&store.messages, page));
        write_page(&listing_path(&dir, page), template, &title, &fragment, config)?;
    }
    Ok(total_pages)
}

fn listing_path(dir: &Path, page: usize) -> PathBuf {
    if page == 1 {
        dir.join("index.html")
    } else {
        dir.join(format!("page-{page}.html"))
    }
}

/// Fill the template's placeholder elements and write the page.
fn write_page(
    path: &Path,
    template: &str,
    title: &str,
    main: &str,
    config: &SiteConfig,
) -> Result<()> {
    let mut page = PageTemplate::new(template);
    page.fill("page-title", title)
        .fill("main-content", main)
        .fill("site-footer", &config.base.copyright);
    write_file(path, &page.render())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Distinct non-empty values, in stable order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
