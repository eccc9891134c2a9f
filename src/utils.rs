use std::path::Path;
use anyhow::Result;

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

pub fn sanitize_filename(filename: &str) -> String {
    filename.replace(|c: char| !c.is_ascii_alphanumeric(), "_")
}

/// First `max_chars` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Byte offset reached by moving `chars` characters forward from `start`,
/// clamped to the end of `text`.
pub fn advance_chars(text: &str, start: usize, chars: usize) -> usize {
    match text[start..].char_indices().nth(chars) {
        Some((offset, _)) => start + offset,
        None => text.len(),
    }
}
