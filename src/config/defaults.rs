//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "Free Yadi Campaign".into()
    }

    pub fn language() -> String {
        "zh-Hant".into()
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn base_url() -> String {
        "http://127.0.0.1:5277/content".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn templates() -> PathBuf {
        "templates".into()
    }

    pub fn news() -> String {
        "news".into()
    }

    pub fn messages() -> String {
        "messages".into()
    }

    pub fn faq() -> String {
        "faq".into()
    }

    pub fn home() -> String {
        "home.yaml".into()
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        5277
    }
}
