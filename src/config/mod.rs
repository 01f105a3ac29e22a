//! Site configuration management for `vigil.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url)               |
//! | `[content]` | Content source URL, categories, output paths     |
//! | `[serve]`   | Preview server (port, interface)                 |
//! | `[extra]`   | User-defined custom fields                       |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Free Yadi"
//! description = "Campaign site"
//! url = "https://freeyadi.org"
//!
//! [content]
//! base_url = "https://freeyadi.org/content"
//! output = "public"
//!
//! [serve]
//! port = 5277
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```
//!
//! The merged config is leaked to `&'static` once at startup and passed
//! explicitly to everything that needs it; there is no global accessor.

mod base;
mod content;
pub mod defaults;
mod error;
mod serve;

pub use base::BaseConfig;
pub use content::ContentConfig;
pub use error::ConfigError;
pub use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing vigil.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory (set after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Content source and output settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Preview server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let root = Self::normalize_path(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        Self::update_option(&mut self.content.output, cli.output.as_ref());
        self.content.output = Self::normalize_path(&root.join(&self.content.output));
        self.content.templates = Self::normalize_path(&root.join(&self.content.templates));
        self.root = root;

        match &cli.command {
            Commands::Build { base_url } => {
                Self::update_option(&mut self.content.base_url, base_url.as_ref());
            }
            Commands::Serve { interface, port } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found: {}", self.config_path.display());
        }

        if self.content.base_url.is_empty() {
            bail!(ConfigError::Validation(
                "[content.base_url] must not be empty".into()
            ));
        }

        if !self.content.base_url.starts_with("http") {
            bail!(ConfigError::Validation(
                "[content.base_url] must start with http:// or https://".into()
            ));
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        for (field, segment) in [
            ("[content.news]", &self.content.news),
            ("[content.messages]", &self.content.messages),
            ("[content.faq]", &self.content.faq),
            ("[content.home]", &self.content.home),
        ] {
            if segment.is_empty() || segment.contains("..") {
                bail!(ConfigError::Validation(format!(
                    "{field} must be a plain path segment"
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let config_str = r#"
            [base]
            title = "Free Yadi"
            description = "Campaign site"
            author = "The Team"
        "#;
        let result = SiteConfig::from_str(config_str);

        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.base.title, "Free Yadi");
        assert_eq!(config.base.author, "The Team");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [base
            title = "Broken"
        "#;
        let result = SiteConfig::from_str(invalid_config);

        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.base.title, "");
        assert_eq!(config.content.base_url, "http://127.0.0.1:5277/content");
        assert_eq!(config.serve.port, 5277);
    }

    #[test]
    fn test_extra_fields() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [extra]
            custom_field = "custom_value"
            number_field = 42
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.extra.get("custom_field").and_then(|v| v.as_str()),
            Some("custom_value")
        );
        assert_eq!(
            config
                .extra
                .get("number_field")
                .and_then(|v| v.as_integer()),
            Some(42)
        );
    }

    #[test]
    fn test_extra_fields_nested() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"

            [extra]
            [extra.social]
            twitter = "@freeyadi"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let social = config.extra.get("social").and_then(|v| v.as_table());
        assert!(social.is_some());
        assert_eq!(
            social.unwrap().get("twitter").and_then(|v| v.as_str()),
            Some("@freeyadi")
        );
    }

    #[test]
    fn test_validate_rejects_relative_base_url() {
        let mut config = SiteConfig::from_str(
            r#"
            [base]
            title = "Test"
            description = "Test"

            [content]
            base_url = "./content"
        "#,
        )
        .unwrap();
        // Pretend the config file exists so only the URL check can fail
        config.config_path = std::env::current_dir().unwrap();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[content.base_url]"));
    }

    #[test]
    fn test_validate_rejects_dotdot_segments() {
        let mut config = SiteConfig::from_str(
            r#"
            [base]
            title = "Test"
            description = "Test"

            [content]
            faq = "../secrets"
        "#,
        )
        .unwrap();
        config.config_path = std::env::current_dir().unwrap();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[content.faq]"));
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = r#"
            [base]
            title = "Free Yadi"
            description = "Campaign site"
            author = "The Team"
            url = "https://freeyadi.org"
            language = "zh-Hant"
            copyright = "2025"

            [content]
            base_url = "https://freeyadi.org/content"
            output = "dist"
            news = "news"
            messages = "messages"
            faq = "faq"
            home = "home.yaml"

            [serve]
            interface = "127.0.0.1"
            port = 3000

            [extra]
            analytics_id = "UA-12345"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Free Yadi");
        assert_eq!(config.content.output, PathBuf::from("dist"));
        assert_eq!(config.serve.port, 3000);
        assert!(config.extra.contains_key("analytics_id"));
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"

            [unknown_section]
            field = "value"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
