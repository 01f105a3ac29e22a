//! URL slug derivation for content records.
//!
//! A record's slug comes from its `slug` front-matter field when present,
//! otherwise from its file name. Title slugs back share links.

/// Characters forbidden in slugs and share fragments
const FORBIDDEN_CHARS: &[char] = &[
    '<', '>', ':', '|', '?', '*', '#', '\\', '(', ')', '[', ']', '"', '\t', '\r', '\n',
];

/// Derive a slug from a content file name by stripping the `.md` extension.
///
/// `"2024-03-01-appeal.md"` → `"2024-03-01-appeal"`. Names without the
/// extension pass through unchanged.
pub fn from_file_name(name: &str) -> String {
    name.strip_suffix(".md").unwrap_or(name).to_owned()
}

/// Derive a slug from a title: lowercase, whitespace runs collapsed to `-`,
/// forbidden characters removed. Unicode text is preserved as-is.
pub fn from_title(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.trim().chars() {
        if c.is_whitespace() {
            pending_dash = !slug.is_empty();
            continue;
        }
        if FORBIDDEN_CHARS.contains(&c) {
            continue;
        }
        if pending_dash {
            slug.push('-');
            pending_dash = false;
        }
        for lower in c.to_lowercase() {
            slug.push(lower);
        }
    }
    slug
}
