//! Text normalization for extracted lesson-plan text.

use lazy_static::lazy_static;
use regex::Regex;

/// Literal prefix of the page separator inserted by the text source.
pub const PAGE_MARKER_PREFIX: &str = "--- Página";

lazy_static! {
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    /// One or more adjacent page markers together with their surrounding whitespace
    static ref RE_PAGE_MARKERS: Regex = Regex::new(r"(?:\s*--- Página \d+ ---)+\s*").unwrap();
}

/// Collapse every whitespace run to one space, drop page markers and trim.
///
/// The result never holds two consecutive whitespace characters nor a page
/// marker. Marker removal is repeated until none is left, since deleting one
/// marker can splice the halves of another together.
pub fn normalize(text: &str) -> String {
    let mut collapsed = RE_WHITESPACE.replace_all(text, " ").into_owned();
    while RE_PAGE_MARKERS.is_match(&collapsed) {
        collapsed = RE_PAGE_MARKERS.replace_all(&collapsed, " ").into_owned();
    }
    collapsed.trim().to_string()
}

/// Number of page markers in the raw, unnormalized text.
pub fn count_pages(raw: &str) -> usize {
    raw.matches(PAGE_MARKER_PREFIX).count()
}

pub fn count_words(normalized: &str) -> usize {
    normalized.split_whitespace().count()
}

/// Join page texts the way the text source does, numbering pages from 1.
pub fn paginate<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = (usize, S)>,
    S: AsRef<str>,
{
    pages
        .into_iter()
        .map(|(number, text)| format!("{} {} ---\n{}", PAGE_MARKER_PREFIX, number, text.as_ref()))
        .collect::<Vec<_>>()
        .join("\n\n")
}
