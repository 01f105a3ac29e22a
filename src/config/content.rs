//! `[content]` section configuration.
//!
//! Where the content lives and where assembled pages go.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section in vigil.toml - content source and output settings.
///
/// Each category name is a path segment under `base_url`; the loader
/// fetches `<base_url>/<category>/index.json` and then each listed file.
///
/// # Example
/// ```toml
/// [content]
/// base_url = "https://freeyadi.org/content"
/// output = "public"
/// news = "news"
/// messages = "messages"
/// faq = "faq"
/// home = "home.yaml"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Root URL the content tree is fetched from.
    #[serde(default = "defaults::content::base_url")]
    #[educe(Default = defaults::content::base_url())]
    pub base_url: String,

    /// Output directory for assembled pages (default: `public`).
    #[serde(default = "defaults::content::output")]
    #[educe(Default = defaults::content::output())]
    pub output: PathBuf,

    /// Directory of page templates; missing templates fall back to the
    /// embedded defaults.
    #[serde(default = "defaults::content::templates")]
    #[educe(Default = defaults::content::templates())]
    pub templates: PathBuf,

    /// Path segment of the news category.
    #[serde(default = "defaults::content::news")]
    #[educe(Default = defaults::content::news())]
    pub news: String,

    /// Path segment of the support-messages category.
    #[serde(default = "defaults::content::messages")]
    #[educe(Default = defaults::content::messages())]
    pub messages: String,

    /// Path segment of the FAQ category.
    #[serde(default = "defaults::content::faq")]
    #[educe(Default = defaults::content::faq())]
    pub faq: String,

    /// File name of the home configuration, relative to `base_url`.
    #[serde(default = "defaults::content::home")]
    #[educe(Default = defaults::content::home())]
    pub home: String,
}

impl ContentConfig {
    /// URL of a file within a category: `<base_url>/<category>/<file>`.
    pub fn file_url(&self, category: &str, file: &str) -> String {
        format!(
            "{}/{category}/{file}",
            self.base_url.trim_end_matches('/')
        )
    }

    /// URL of a category's index: `<base_url>/<category>/index.json`.
    pub fn index_url(&self, category: &str) -> String {
        self.file_url(category, "index.json")
    }

    /// URL of the home configuration file.
    pub fn home_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.home)
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_content_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.content.base_url, "http://127.0.0.1:5277/content");
        assert_eq!(config.content.output, std::path::PathBuf::from("public"));
        assert_eq!(config.content.news, "news");
        assert_eq!(config.content.messages, "messages");
        assert_eq!(config.content.faq, "faq");
        assert_eq!(config.content.home, "home.yaml");
    }

    #[test]
    fn test_content_config_override() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [content]
            base_url = "https://freeyadi.org/content"
            output = "dist"
            news = "updates"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.content.base_url, "https://freeyadi.org/content");
        assert_eq!(config.content.output, std::path::PathBuf::from("dist"));
        assert_eq!(config.content.news, "updates");
        // Untouched fields keep defaults
        assert_eq!(config.content.faq, "faq");
    }

    #[test]
    fn test_url_builders_trim_trailing_slash() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"

            [content]
            base_url = "https://example.org/content/"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.content.index_url("news"),
            "https://example.org/content/news/index.json"
        );
        assert_eq!(
            config.content.file_url("faq", "bail.md"),
            "https://example.org/content/faq/bail.md"
        );
        assert_eq!(
            config.content.home_url(),
            "https://example.org/content/home.yaml"
        );
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"

            [content]
            not_a_field = true
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
