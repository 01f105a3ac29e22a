//! Content parsing: front matter, markdown, typed records, home config.

pub mod frontmatter;
pub mod home;
pub mod markdown;
pub mod record;
