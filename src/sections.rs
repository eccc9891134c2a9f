//! Section boundary detection.

use log::debug;
use std::collections::BTreeMap;

use crate::catalog::{SectionCatalog, SectionKind};
use crate::utils::{advance_chars, truncate_chars};

/// Characters after a heading start in which other headings are ignored.
pub const HEADING_LOOKAHEAD_CHARS: usize = 50;

/// Longest span kept for a single section.
pub const MAX_SPAN_CHARS: usize = 1000;

pub type SectionMap = BTreeMap<SectionKind, String>;

/// Locate every catalog section in `text`.
///
/// A section starts at its first heading match and runs until the nearest
/// heading of any other category found at least
/// [`HEADING_LOOKAHEAD_CHARS`] characters later. Categories with no heading,
/// or whose span is blank, are absent from the map.
pub fn locate_sections(text: &str, catalog: &SectionCatalog) -> SectionMap {
    let mut sections = SectionMap::new();

    for entry in catalog.entries() {
        let start = match entry.first_heading(text) {
            Some(start) => start,
            None => continue,
        };

        let search_from = advance_chars(text, start, HEADING_LOOKAHEAD_CHARS);
        let end = catalog
            .entries()
            .iter()
            .filter(|other| other.kind != entry.kind)
            .flat_map(|other| other.patterns.iter())
            .filter_map(|re| re.find_at(text, search_from).map(|m| m.start()))
            .min()
            .unwrap_or(text.len());

        let span = truncate_chars(text[start..end].trim(), MAX_SPAN_CHARS);
        if span.is_empty() {
            continue;
        }

        debug!("Found section '{}' at {}..{} ({} chars)", entry.kind, start, end, span.chars().count());
        sections.insert(entry.kind, span.to_string());
    }

    sections
}
