//! Shorthand-tag stripping
//!
//! Templating dialects wrap ASL documents with `!Ref`-style shorthand
//! tags that YAML loaders reject as unknown local tags. Stripping them is
//! a plain text pre-processing step applied before structural parsing.

/// Shorthand tag keywords recognized by default
pub const DEFAULT_TAG_KEYWORDS: &[&str] = &["Ref", "GetAtt", "Join"];

/// Strip the default shorthand tags from a document
pub fn strip_tags(text: &str) -> String {
    strip_tags_with(text, DEFAULT_TAG_KEYWORDS)
}

/// Strip `!{keyword} ` occurrences for each keyword in the given list
///
/// Only the tag itself is removed; the value it was applied to stays in
/// place.
pub fn strip_tags_with(text: &str, keywords: &[&str]) -> String {
    keywords.iter().fold(text.to_string(), |acc, keyword| {
        acc.replace(&format!("!{} ", keyword), "")
    })
}
