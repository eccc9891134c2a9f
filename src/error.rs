use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the analyzer's contract boundary.
#[derive(Error, Debug, Clone)]
pub enum AnalysisError {
    /// Upstream supplied no text at all.
    #[error("No text available to analyze")]
    EmptyText,

    /// A catalog pattern failed to compile.
    #[error("Invalid section pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Errors raised while turning a document on disk into paginated text.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read PDF {path}: {message}")]
    Pdf { path: PathBuf, message: String },

    #[error("pdftotext failed for {path}: {message}")]
    Pdftotext { path: PathBuf, message: String },

    #[error("No text could be extracted from {path}")]
    NoText { path: PathBuf },

    #[error("Unsupported document format: {path}")]
    UnsupportedFormat { path: PathBuf },
}
