//! Category loading.
//!
//! Each category is a directory under the content base URL holding an
//! `index.json` (a JSON array of file names) and the files themselves.
//! Loading is tolerant by design: a file that fails to fetch or parse is
//! skipped with a warning, and a missing index yields an empty category.
//! Categories load concurrently; files within a category load in order.

use super::fetch::ContentFetcher;
use super::store::ContentStore;
use crate::config::{ContentConfig, SiteConfig};
use crate::content::home::{self, HomeConfig};
use crate::content::record::ContentRecord;
use crate::log;
use anyhow::{Context, Result};

/// Fetch and parse one category. Failures never propagate; the worst
/// outcome is an empty list.
pub async fn load_category<F: ContentFetcher>(
    fetcher: &F,
    content: &ContentConfig,
    category: &str,
) -> Vec<ContentRecord> {
    let index_url = content.index_url(category);
    let files = match fetch_index(fetcher, &index_url).await {
        Ok(files) => files,
        Err(err) => {
            log!("warn"; "failed to load {index_url}: {err:#}");
            return Vec::new();
        }
    };

    let mut records = Vec::with_capacity(files.len());
    for file in &files {
        let url = content.file_url(category, file);
        match fetcher.fetch_text(&url).await {
            Ok(text) => records.push(ContentRecord::from_text(file, &text)),
            Err(err) => log!("warn"; "skipping {url}: {err:#}"),
        }
    }

    log!("fetch"; "{category}: {} of {} files", records.len(), files.len());
    records
}

async fn fetch_index<F: ContentFetcher>(fetcher: &F, index_url: &str) -> Result<Vec<String>> {
    let text = fetcher.fetch_text(index_url).await?;
    serde_json::from_str(&text).with_context(|| format!("parsing {index_url}"))
}

/// Fetch the home configuration. A missing or unreadable file yields the
/// empty default.
pub async fn load_home<F: ContentFetcher>(fetcher: &F, content: &ContentConfig) -> HomeConfig {
    let url = content.home_url();
    match fetcher.fetch_text(&url).await {
        Ok(text) => home::parse(&text),
        Err(err) => {
            log!("warn"; "failed to load {url}: {err:#}");
            HomeConfig::default()
        }
    }
}

/// Load every category concurrently and assemble the store.
///
/// The `join!` is the barrier: all four loads run at once and the store
/// is built only when the slowest finishes.
pub async fn load_all<F: ContentFetcher>(fetcher: &F, config: &SiteConfig) -> ContentStore {
    let content = &config.content;
    let (news, messages, faq, home) = tokio::join!(
        load_category(fetcher, content, &content.news),
        load_category(fetcher, content, &content.messages),
        load_category(fetcher, content, &content.faq),
        load_home(fetcher, content),
    );
    ContentStore::assemble(news, messages, faq, home)
}
