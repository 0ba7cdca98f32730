use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&[^;]+;").unwrap());
// U+FEFF（BOM）也算空白
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]+").unwrap());

/// 依序替換的實體表；表外的實體一律刪除
pub const ENTITY_TABLE: [(&str, &str); 7] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&#8217;", "'"),
    ("&#8216;", "'"),
    ("&#39;", "'"),
    ("&#038;", "&"),
];

/// Canonical duplicate-detection key for a post title.
///
/// Strips markup, decodes [`ENTITY_TABLE`], drops any other `&...;`
/// sequence, collapses whitespace, lowercases and trims. Total for any
/// input; an `&` without a closing `;` is left as is.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let stripped = TAG_RE.replace_all(raw, "");

    let mut decoded = stripped.into_owned();
    for (entity, literal) in ENTITY_TABLE {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, literal);
        }
    }

    let without_entities = ENTITY_RE.replace_all(&decoded, "");
    let collapsed = WHITESPACE_RE.replace_all(&without_entities, " ");

    collapsed
        .to_lowercase()
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_string()
}

pub fn normalize_opt(raw: Option<&str>) -> String {
    raw.map(normalize).unwrap_or_default()
}
