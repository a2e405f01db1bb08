//! Title cleanup, cover extraction and slug derivation.

use regex::Regex;
use std::sync::LazyLock;

/// Parenthesized and braced annotations, plus inline HTML tags.
static ANNOTATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*(?:\([^)]*\)|\{[^}]*\}|<[^>]*>)").expect("Invalid annotation regex")
});

/// Comma between two digits, as in `1,000`.
static DIGIT_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d),(\d)").expect("Invalid digit comma regex"));

static COVER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src="([^"]+)""#).expect("Invalid cover regex"));

/// A raw title split into the parts a content file needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedTitle {
    /// Title with annotations and markup removed
    pub clean: String,

    /// URL-safe slug derived from the clean title
    pub slug: String,

    /// Image reference embedded in the raw title
    pub cover: Option<String>,
}

impl ProcessedTitle {
    /// Process a raw title cell.
    pub fn from_raw(raw: &str) -> Self {
        let clean = clean_title(raw);
        let slug = slugify(&clean);
        let cover = extract_cover(raw).map(str::to_string);

        Self { clean, slug, cover }
    }
}

/// Strip `(...)`, `{...}` and `<...>` groups, then trim.
pub fn clean_title(raw: &str) -> String {
    ANNOTATION_RE.replace_all(raw, "").trim().to_string()
}

/// First `src="..."` attribute value in the title.
pub fn extract_cover(raw: &str) -> Option<&str> {
    COVER_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Convert a title to a URL-safe slug.
///
/// HTML entities are decoded and non-ASCII text is transliterated first, so
/// `Cien a&ntilde;os` becomes `cien-anos`. Thousands separators are dropped
/// from numbers, so `1,000` becomes `1000`.
pub fn slugify(text: &str) -> String {
    let decoded = html_escape::decode_html_entities(text);
    let mut ascii = deunicode::deunicode(&decoded).to_lowercase();

    // Matches cannot overlap, so `1,2,3` needs a second pass.
    loop {
        let joined = DIGIT_COMMA_RE.replace_all(&ascii, "${1}${2}").into_owned();
        if joined == ascii {
            break;
        }
        ascii = joined;
    }

    ascii
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
