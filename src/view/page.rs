//! Page templates.
//!
//! A page template is an ordinary HTML file with placeholder elements
//! identified by `id`. [`PageTemplate::fill`] replaces the inner HTML of
//! such an element with a rendered fragment, leaving the element's own
//! tag and attributes in place. Unknown ids warn and leave the page
//! untouched, so a missing placeholder never fails a build.

use crate::log;

pub struct PageTemplate {
    html: String,
}

impl PageTemplate {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Replace the inner HTML of the element with the given id.
    pub fn fill(&mut self, id: &str, fragment: &str) -> &mut Self {
        match inject(&self.html, id, fragment) {
            Some(html) => self.html = html,
            None => log!("warn"; "template has no element with id \"{id}\""),
        }
        self
    }

    pub fn render(self) -> String {
        self.html
    }
}

/// Replace the inner HTML of the element carrying `id="<id>"`. Returns
/// `None` when no such element exists or its closing tag cannot be found.
fn inject(html: &str, id: &str, fragment: &str) -> Option<String> {
    let (tag, open_end) = find_element(html, id)?;
    let close_start = find_closing_tag(html, &tag, open_end)?;
    let mut out = String::with_capacity(html.len() + fragment.len());
    out.push_str(&html[..open_end]);
    out.push_str(fragment);
    out.push_str(&html[close_start..]);
    Some(out)
}

/// Locate the opening tag whose attributes carry the id. Returns the tag
/// name and the byte offset just past the opening tag's `>`.
fn find_element(html: &str, id: &str) -> Option<(String, usize)> {
    let needles = [format!("id=\"{id}\""), format!("id='{id}'")];

    let mut search_from = 0;
    while let Some(rel) = html[search_from..].find('<') {
        let tag_start = search_from + rel;
        let rest = &html[tag_start..];
        let close = rest.find('>')?;
        let open_tag = &rest[..close];

        if needles.iter().any(|n| open_tag.contains(n.as_str())) {
            let name: String = open_tag[1..]
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric())
                .collect();
            if !name.is_empty() {
                return Some((name, tag_start + close + 1));
            }
        }
        search_from = tag_start + close + 1;
    }
    None
}

/// Find the start of the closing tag matching an already-open element,
/// counting nested same-name tags.
fn find_closing_tag(html: &str, tag: &str, from: usize) -> Option<usize> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut depth = 1usize;
    let mut pos = from;

    while depth > 0 {
        let next_open = html[pos..].find(&open).map(|i| pos + i);
        let next_close = html[pos..].find(&close).map(|i| pos + i)?;

        // A nested open tag must be a real tag, not a prefix like
        // <section> when scanning for <sect>
        let is_real_open = next_open.is_some_and(|at| {
            html[at + open.len()..]
                .chars()
                .next()
                .is_some_and(|c| c == '>' || c.is_whitespace() || c == '/')
        });

        match next_open {
            Some(at) if is_real_open && at < next_close => {
                depth += 1;
                pos = at + open.len();
            }
            Some(at) if at < next_close => {
                pos = at + open.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(next_close);
                }
                pos = next_close + close.len();
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<html><head><title id=\"page-title\">x</title></head>\
<body><main id=\"main-content\"><p>placeholder</p></main>\
<footer id=\"site-footer\"></footer></body></html>";

    #[test]
    fn test_fill_replaces_inner_html() {
        let mut page = PageTemplate::new(TEMPLATE);
        page.fill("main-content", "<h1>Free Yadi</h1>");
        let html = page.render();
        assert!(html.contains("<main id=\"main-content\"><h1>Free Yadi</h1></main>"));
        assert!(!html.contains("placeholder"));
    }

    #[test]
    fn test_fill_keeps_surroundings() {
        let mut page = PageTemplate::new(TEMPLATE);
        page.fill("page-title", "聲援雅迪");
        let html = page.render();
        assert!(html.contains("<title id=\"page-title\">聲援雅迪</title>"));
        assert!(html.contains("<main id=\"main-content\">"));
        assert!(html.contains("<footer id=\"site-footer\">"));
    }

    #[test]
    fn test_fill_empty_element() {
        let mut page = PageTemplate::new(TEMPLATE);
        page.fill("site-footer", "<p>© 2024</p>");
        assert!(page.render().contains("<footer id=\"site-footer\"><p>© 2024</p></footer>"));
    }

    #[test]
    fn test_fill_unknown_id_leaves_page_untouched() {
        let mut page = PageTemplate::new(TEMPLATE);
        page.fill("no-such-id", "<p>lost</p>");
        assert_eq!(page.render(), TEMPLATE);
    }

    #[test]
    fn test_nested_same_tag() {
        let html = "<div id=\"outer\"><div><div>deep</div></div></div><div>after</div>";
        let out = inject(html, "outer", "NEW").unwrap();
        assert_eq!(out, "<div id=\"outer\">NEW</div><div>after</div>");
    }

    #[test]
    fn test_single_quoted_id() {
        let html = "<section id='about'>old</section>";
        let out = inject(html, "about", "new").unwrap();
        assert_eq!(out, "<section id='about'>new</section>");
    }

    #[test]
    fn test_tag_name_prefix_not_confused() {
        // <section> inside must not count as a nested <sect>
        let html = "<sect id=\"s\"><section>inner</section></sect>";
        let out = inject(html, "s", "new").unwrap();
        assert_eq!(out, "<sect id=\"s\">new</sect>");
    }

    #[test]
    fn test_unclosed_element_is_rejected() {
        assert!(inject("<div id=\"broken\">never closed", "broken", "x").is_none());
    }

    #[test]
    fn test_chained_fills() {
        let mut page = PageTemplate::new(TEMPLATE);
        page.fill("page-title", "首頁").fill("main-content", "<p>內容</p>");
        let html = page.render();
        assert!(html.contains("首頁"));
        assert!(html.contains("<p>內容</p>"));
    }
}
