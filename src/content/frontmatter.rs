//! Front-matter parsing for markdown content files.
//!
//! This is a deliberate subset of YAML, parsed line by line with a cursor
//! over the line buffer. Each construct has a named sub-parser that consumes
//! lines and leaves the cursor on the first line it does not own:
//!
//! | Construct    | Shape                              | Result        |
//! |--------------|------------------------------------|---------------|
//! | scalar       | `key: value`                       | Str/Bool/Num  |
//! | inline array | `key: [a, b, c]`                   | List          |
//! | dash list    | `key:` + following `- item` lines  | List          |
//! | block scalar | `key: \|` or `key: \|-` + block    | Str           |
//!
//! Parsing never fails: malformed lines are skipped, duplicate keys resolve
//! last-write-wins. Scalars are coerced with a single policy for every
//! category of content: `true`/`false` become booleans, then any value that
//! parses fully as a number becomes a number.

use std::collections::HashMap;

// ============================================================================
// Values
// ============================================================================

/// Parsed front-matter fields, keyed by field name.
pub type Fields = HashMap<String, Value>;

/// A single front-matter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Bool(bool),
    Num(f64),
    List(Vec<String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// String form for display contexts: numbers and booleans format
    /// naturally, lists join with `, `.
    pub fn to_display(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Num(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Value::List(items) => items.join(", "),
        }
    }
}

/// A parsed content document: front-matter fields plus the raw body.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub fields: Fields,
    pub body: String,
}

// ============================================================================
// Document splitting
// ============================================================================

/// Split a document into front-matter text and body.
///
/// The document must open with a `---` fence on the first line and close
/// with a second `---` line. Without a well-formed fence pair the whole
/// text is body.
pub fn split_document(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("---")?;
    let (first_line, rest) = rest.split_once('\n')?;
    if !first_line.trim().is_empty() {
        return None;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let front = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((front, body));
        }
        offset += line.len();
    }
    None
}

/// Parse a full content document. Documents without a front-matter fence
/// yield empty fields and the original text as body.
pub fn parse(text: &str) -> Document {
    match split_document(text) {
        Some((front, body)) => Document {
            fields: parse_fields(front),
            body: body.to_owned(),
        },
        None => Document {
            fields: Fields::new(),
            body: text.to_owned(),
        },
    }
}

// ============================================================================
// Line cursor
// ============================================================================

/// Cursor over a buffer of lines. Sub-parsers advance it past the lines
/// they consume and no further.
pub(crate) struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    pub(crate) fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    pub(crate) fn bump(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }
}

/// Leading-space count of a line.
pub(crate) fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Strip one matching pair of surrounding single or double quotes.
pub(crate) fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    if s.len() >= 2 {
        let bytes = s.as_bytes();
        if (bytes[0] == b'"' && bytes[s.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[s.len() - 1] == b'\'')
        {
            return &s[1..s.len() - 1];
        }
    }
    s
}

// ============================================================================
// Sub-parsers
// ============================================================================

/// Parse a front-matter block into fields.
pub fn parse_fields(front: &str) -> Fields {
    let mut fields = Fields::new();
    let mut cursor = LineCursor::new(front);

    while let Some(line) = cursor.bump() {
        if line.trim().is_empty() {
            continue;
        }
        // Malformed lines (no key separator) are skipped, not fatal
        let Some((key, raw_value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.starts_with('-') {
            continue;
        }
        let key_indent = indent_of(line);
        let raw_value = raw_value.trim();

        let value = match raw_value {
            "" => match parse_dash_list(&mut cursor) {
                Some(items) => Value::List(items),
                None => Value::Str(String::new()),
            },
            "|" => Value::Str(parse_block_scalar(&mut cursor, key_indent, Chomp::Keep)),
            "|-" => Value::Str(parse_block_scalar(&mut cursor, key_indent, Chomp::Strip)),
            _ => parse_scalar(raw_value),
        };

        // Duplicate keys: last write wins
        fields.insert(key.to_owned(), value);
    }

    fields
}

/// Parse a single scalar value: quote stripping, inline arrays, then the
/// canonical coercion order (bool before number, number before string).
pub(crate) fn parse_scalar(raw: &str) -> Value {
    let raw = raw.trim();

    if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        let items = inner
            .split(',')
            .map(|item| strip_quotes(item).to_owned())
            .filter(|item| !item.is_empty())
            .collect();
        return Value::List(items);
    }

    let unquoted = strip_quotes(raw);
    match unquoted {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => {
            if !unquoted.is_empty()
                && let Ok(n) = unquoted.parse::<f64>()
            {
                Value::Num(n)
            } else {
                Value::Str(unquoted.to_owned())
            }
        }
    }
}

/// Collect a dash list following a bare `key:` line.
///
/// Items are consecutive lines whose trimmed content starts with `-`,
/// whatever their indent; `- item` and `-item` both count. Returns `None`
/// (cursor untouched) when the next line is not a dash item.
pub(crate) fn parse_dash_list(cursor: &mut LineCursor) -> Option<Vec<String>> {
    if !cursor.peek()?.trim_start().starts_with('-') {
        return None;
    }

    let mut items = Vec::new();
    while let Some(line) = cursor.peek() {
        let trimmed = line.trim_start();
        let Some(item) = trimmed.strip_prefix('-') else {
            break;
        };
        items.push(strip_quotes(item).to_owned());
        cursor.bump();
    }
    Some(items)
}

/// Trailing-newline handling for block scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Chomp {
    /// `|`: keep one trailing newline
    Keep,
    /// `|-`: strip trailing newlines
    Strip,
}

/// Collect a block scalar following `key: |` or `key: |-`.
///
/// The block ends only at a line that both contains a colon and sits at
/// (or before) the key's indent; colon-free lines stay in the block even
/// when unindented. Content is dedented by the indent of its first
/// non-blank line.
pub(crate) fn parse_block_scalar(
    cursor: &mut LineCursor,
    key_indent: usize,
    chomp: Chomp,
) -> String {
    let mut collected: Vec<&str> = Vec::new();

    while let Some(line) = cursor.peek() {
        if line.trim().is_empty() {
            collected.push("");
            cursor.bump();
            continue;
        }
        if indent_of(line) <= key_indent && line.contains(':') {
            break;
        }
        collected.push(line);
        cursor.bump();
    }

    // Trailing blanks between the block and the next key belong to neither
    while collected.last().is_some_and(|l| l.is_empty()) {
        collected.pop();
    }

    let base_indent = collected
        .iter()
        .find(|l| !l.is_empty())
        .map(|l| indent_of(l))
        .unwrap_or(0);

    let mut text = collected
        .iter()
        .map(|line| {
            if line.is_empty() {
                ""
            } else if indent_of(line) >= base_indent {
                &line[base_indent..]
            } else {
                line.trim_start()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    if chomp == Chomp::Keep && !text.is_empty() {
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(fields: &'a Fields, key: &str) -> &'a Value {
        fields.get(key).unwrap_or_else(|| panic!("missing {key}"))
    }

    // ------------------------------------------------------------------
    // Document splitting
    // ------------------------------------------------------------------

    #[test]
    fn test_split_document_basic() {
        let (front, body) = split_document("---\ntitle: Hi\n---\nbody text\n").unwrap();
        assert_eq!(front, "title: Hi\n");
        assert_eq!(body, "body text\n");
    }

    #[test]
    fn test_split_document_trailing_whitespace_on_fences() {
        let (front, body) = split_document("---  \ntitle: Hi\n---   \nbody").unwrap();
        assert_eq!(front, "title: Hi\n");
        assert_eq!(body, "body");
    }

    #[test]
    fn test_split_document_without_fence() {
        assert!(split_document("just a body\nwith lines\n").is_none());
    }

    #[test]
    fn test_split_document_unclosed_fence() {
        assert!(split_document("---\ntitle: Hi\nno closing fence\n").is_none());
    }

    #[test]
    fn test_split_document_fence_must_open_line_one() {
        assert!(split_document("\n---\ntitle: Hi\n---\nbody").is_none());
    }

    #[test]
    fn test_parse_without_fence_is_all_body() {
        let doc = parse("# Just markdown\n\nNo front matter here.\n");
        assert!(doc.fields.is_empty());
        assert!(doc.body.starts_with("# Just markdown"));
    }

    #[test]
    fn test_parse_dashes_inside_body_are_not_fences() {
        let doc = parse("---\ntitle: Hi\n---\nintro\n---\noutro\n");
        assert_eq!(field(&doc.fields, "title"), &Value::Str("Hi".into()));
        assert_eq!(doc.body, "intro\n---\noutro\n");
    }

    // ------------------------------------------------------------------
    // Scalars and coercion
    // ------------------------------------------------------------------

    #[test]
    fn test_scalar_string() {
        let fields = parse_fields("title: An Open Letter\n");
        assert_eq!(field(&fields, "title"), &Value::Str("An Open Letter".into()));
    }

    #[test]
    fn test_scalar_quotes_stripped() {
        let fields = parse_fields("title: \"Quoted Title\"\nauthor: 'Ms. Chen'\n");
        assert_eq!(field(&fields, "title"), &Value::Str("Quoted Title".into()));
        assert_eq!(field(&fields, "author"), &Value::Str("Ms. Chen".into()));
    }

    #[test]
    fn test_scalar_mismatched_quotes_kept() {
        let fields = parse_fields("title: \"half quoted\n");
        assert_eq!(field(&fields, "title"), &Value::Str("\"half quoted".into()));
    }

    #[test]
    fn test_scalar_booleans() {
        let fields = parse_fields("published: false\nfeatured: true\n");
        assert_eq!(field(&fields, "published"), &Value::Bool(false));
        assert_eq!(field(&fields, "featured"), &Value::Bool(true));
    }

    #[test]
    fn test_scalar_numbers() {
        let fields = parse_fields("order: 3\nweight: 2.5\nnegative: -1\n");
        assert_eq!(field(&fields, "order"), &Value::Num(3.0));
        assert_eq!(field(&fields, "weight"), &Value::Num(2.5));
        assert_eq!(field(&fields, "negative"), &Value::Num(-1.0));
    }

    #[test]
    fn test_scalar_dates_stay_strings() {
        let fields = parse_fields("date: 2024-03-01\n");
        assert_eq!(field(&fields, "date"), &Value::Str("2024-03-01".into()));
    }

    #[test]
    fn test_scalar_value_containing_colon() {
        let fields = parse_fields("url: https://example.org/page\n");
        assert_eq!(
            field(&fields, "url"),
            &Value::Str("https://example.org/page".into())
        );
    }

    #[test]
    fn test_scalar_empty_value() {
        let fields = parse_fields("image:\ntitle: Hi\n");
        assert_eq!(field(&fields, "image"), &Value::Str(String::new()));
    }

    #[test]
    fn test_inline_array() {
        let fields = parse_fields("tags: [legal, appeal, \"family letter\"]\n");
        assert_eq!(
            field(&fields, "tags"),
            &Value::List(vec![
                "legal".into(),
                "appeal".into(),
                "family letter".into()
            ])
        );
    }

    #[test]
    fn test_inline_array_empty() {
        let fields = parse_fields("tags: []\n");
        assert_eq!(field(&fields, "tags"), &Value::List(vec![]));
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let fields = parse_fields("title: First\ntitle: Second\n");
        assert_eq!(field(&fields, "title"), &Value::Str("Second".into()));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let fields = parse_fields("title: Ok\nthis line has no separator\n  stray indent\nauthor: Li\n");
        assert_eq!(fields.len(), 2);
        assert_eq!(field(&fields, "title"), &Value::Str("Ok".into()));
        assert_eq!(field(&fields, "author"), &Value::Str("Li".into()));
    }

    // ------------------------------------------------------------------
    // Dash lists
    // ------------------------------------------------------------------

    #[test]
    fn test_dash_list() {
        let fields = parse_fields("tags:\n  - legal\n  - appeal\ntitle: Hi\n");
        assert_eq!(
            field(&fields, "tags"),
            &Value::List(vec!["legal".into(), "appeal".into()])
        );
        assert_eq!(field(&fields, "title"), &Value::Str("Hi".into()));
    }

    #[test]
    fn test_dash_list_quoted_items() {
        let fields = parse_fields("tags:\n  - \"due process\"\n  - 'open trial'\n");
        assert_eq!(
            field(&fields, "tags"),
            &Value::List(vec!["due process".into(), "open trial".into()])
        );
    }

    #[test]
    fn test_dash_list_items_at_key_indent() {
        // Items need no extra indent, only the dash
        let fields = parse_fields("tags:\n- legal\n- appeal\ntitle: Hi\n");
        assert_eq!(
            field(&fields, "tags"),
            &Value::List(vec!["legal".into(), "appeal".into()])
        );
        assert_eq!(field(&fields, "title"), &Value::Str("Hi".into()));
    }

    #[test]
    fn test_dash_list_item_without_space_after_dash() {
        let fields = parse_fields("tags:\n-legal\n  -appeal\n");
        assert_eq!(
            field(&fields, "tags"),
            &Value::List(vec!["legal".into(), "appeal".into()])
        );
    }

    #[test]
    fn test_bare_key_without_list_is_empty_string() {
        let fields = parse_fields("image:\nnext: value\n");
        assert_eq!(field(&fields, "image"), &Value::Str(String::new()));
        assert_eq!(field(&fields, "next"), &Value::Str("value".into()));
    }

    // ------------------------------------------------------------------
    // Block scalars
    // ------------------------------------------------------------------

    #[test]
    fn test_block_scalar_keeps_trailing_newline() {
        let fields = parse_fields("summary: |\n  line one\n  line two\ntitle: Hi\n");
        assert_eq!(
            field(&fields, "summary"),
            &Value::Str("line one\nline two\n".into())
        );
        assert_eq!(field(&fields, "title"), &Value::Str("Hi".into()));
    }

    #[test]
    fn test_block_scalar_strip_chomp() {
        let fields = parse_fields("summary: |-\n  line one\n  line two\n");
        assert_eq!(
            field(&fields, "summary"),
            &Value::Str("line one\nline two".into())
        );
    }

    #[test]
    fn test_block_scalar_preserves_interior_blank_lines() {
        let fields = parse_fields("summary: |-\n  para one\n\n  para two\nnext: x\n");
        assert_eq!(
            field(&fields, "summary"),
            &Value::Str("para one\n\npara two".into())
        );
        assert_eq!(field(&fields, "next"), &Value::Str("x".into()));
    }

    #[test]
    fn test_block_scalar_dedents_by_first_line() {
        let fields = parse_fields("summary: |-\n    deep\n      deeper\n");
        assert_eq!(field(&fields, "summary"), &Value::Str("deep\n  deeper".into()));
    }

    #[test]
    fn test_block_scalar_keeps_unindented_line_without_colon() {
        // Only a colon-bearing line at the key's level ends the block
        let fields = parse_fields("summary: |-\n  first\nsecond without colon\nnext: x\n");
        assert_eq!(
            field(&fields, "summary"),
            &Value::Str("first\nsecond without colon".into())
        );
        assert_eq!(field(&fields, "next"), &Value::Str("x".into()));
    }

    #[test]
    fn test_block_scalar_stops_at_next_key() {
        let fields = parse_fields("summary: |-\n  content here\ndate: 2024-01-01\n");
        assert_eq!(field(&fields, "summary"), &Value::Str("content here".into()));
        assert_eq!(field(&fields, "date"), &Value::Str("2024-01-01".into()));
    }

    #[test]
    fn test_block_scalar_empty() {
        let fields = parse_fields("summary: |-\ndate: 2024-01-01\n");
        assert_eq!(field(&fields, "summary"), &Value::Str(String::new()));
    }

    // ------------------------------------------------------------------
    // Value helpers
    // ------------------------------------------------------------------

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Str("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Num(2.0).as_num(), Some(2.0));
        assert_eq!(Value::Str("x".into()).as_bool(), None);
        assert!(Value::List(vec!["a".into()]).as_list().is_some());
    }

    #[test]
    fn test_value_to_display() {
        assert_eq!(Value::Num(2024.0).to_display(), "2024");
        assert_eq!(Value::Num(2.5).to_display(), "2.5");
        assert_eq!(Value::Bool(false).to_display(), "false");
        assert_eq!(
            Value::List(vec!["a".into(), "b".into()]).to_display(),
            "a, b"
        );
    }

    // ------------------------------------------------------------------
    // Whole documents
    // ------------------------------------------------------------------

    #[test]
    fn test_full_document() {
        let text = "---\ntitle: \"Detention Update\"\ndate: 2024-03-01\ntags:\n  - legal\npublished: true\nsummary: |-\n  Short form.\n---\n# Heading\n\nBody paragraph.\n";
        let doc = parse(text);
        assert_eq!(field(&doc.fields, "title"), &Value::Str("Detention Update".into()));
        assert_eq!(field(&doc.fields, "published"), &Value::Bool(true));
        assert_eq!(
            field(&doc.fields, "tags"),
            &Value::List(vec!["legal".into()])
        );
        assert_eq!(field(&doc.fields, "summary"), &Value::Str("Short form.".into()));
        assert_eq!(doc.body, "# Heading\n\nBody paragraph.\n");
    }
}
