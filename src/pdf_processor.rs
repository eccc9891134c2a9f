use crate::analyzer::LessonPlanAnalyzer;
use crate::config::Config;
use crate::error::ExtractionError;
use crate::models::{BatchSummary, DocumentReport, FailedDocument, ReportMetadata};
use crate::normalize::paginate;
use crate::summary::{render_feedback_brief, render_summary};
use crate::utils::{ensure_directory_exists, sanitize_filename};
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use pdf::content::{Content, Op, TextDrawAdjusted};
use pdf::file::FileOptions;
use pdf::object::Resolve;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Vertical text moves larger than this start a new line.
const LINE_BREAK_MOVE: f32 = 12.0;

pub struct PdfProcessor;

impl PdfProcessor {
    /// Analyze every configured document, writing one JSON report each.
    ///
    /// A document that cannot be read is logged and recorded in the returned
    /// summary; it does not stop the rest of the batch.
    pub fn process_collection(config: &Config) -> Result<BatchSummary> {
        ensure_directory_exists(&config.output_dir)
            .with_context(|| format!("Failed to create output directory {}", config.output_dir.display()))?;

        let mut summary = BatchSummary::default();
        for path in config.document_paths()? {
            match Self::process_document(&path, config) {
                Ok((report, output_path)) => {
                    info!("Wrote {}", output_path.display());
                    if config.print_summary {
                        println!("{}\n", report.summary);
                    }
                    if report.analysis.is_degraded() {
                        summary.degraded += 1;
                    }
                    summary.processed += 1;
                }
                Err(e) => {
                    warn!("Skipping {}: {:#}", path.display(), e);
                    summary.failed.push(FailedDocument {
                        source: path.display().to_string(),
                        reason: format!("{:#}", e),
                    });
                }
            }
        }
        Ok(summary)
    }

    pub fn process_document(path: &Path, config: &Config) -> Result<(DocumentReport, PathBuf)> {
        let text = Self::load_text(path)
            .with_context(|| format!("Failed to load text from {}", path.display()))?;

        let report = Self::build_report(path, &text, config);

        let output_path = config.output_dir.join(Self::report_file_name(path));
        std::fs::write(&output_path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("Failed to write output to {}", output_path.display()))?;

        Ok((report, output_path))
    }

    pub fn build_report(path: &Path, text: &str, config: &Config) -> DocumentReport {
        let analysis = LessonPlanAnalyzer::analyze(text);
        let summary = render_summary(analysis.structure());
        let feedback_brief = render_feedback_brief(analysis.structure(), &config.context, &summary);

        DocumentReport {
            metadata: ReportMetadata {
                source: path.display().to_string(),
                document: path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
                processing_timestamp: Utc::now().to_rfc3339(),
                analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            educational_context: config.context.clone(),
            analysis,
            summary,
            feedback_brief,
        }
    }

    pub fn report_file_name(path: &Path) -> String {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "document".to_string());
        format!("{}.analysis.json", sanitize_filename(&stem))
    }

    /// Paginated text for a document: PDFs are extracted, `.txt` files are
    /// taken as already-extracted text.
    pub fn load_text(path: &Path) -> Result<String, ExtractionError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let text = match extension.as_deref() {
            Some("pdf") => Self::extract_text(path)?,
            Some("txt") => String::from_utf8_lossy(&std::fs::read(path)?).into_owned(),
            _ => return Err(ExtractionError::UnsupportedFormat { path: path.to_path_buf() }),
        };

        if text.trim().is_empty() {
            return Err(ExtractionError::NoText { path: path.to_path_buf() });
        }
        Ok(text)
    }

    /// Extract PDF text as `--- Página N ---` separated pages, falling back to
    /// `pdftotext` when the content streams yield nothing.
    pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
        info!("Starting PDF text extraction from {}", path.display());

        let pages = match Self::extract_page_texts(path) {
            Ok(pages) if !pages.is_empty() => pages,
            Ok(_) => {
                info!("No text in content streams of {}, trying pdftotext", path.display());
                Self::extract_with_pdftotext(path)?
            }
            Err(e) => {
                warn!("{}; trying pdftotext", e);
                Self::extract_with_pdftotext(path)?
            }
        };

        if pages.is_empty() {
            return Err(ExtractionError::NoText { path: path.to_path_buf() });
        }

        let text = paginate(pages);
        info!("Extracted {} characters from {}", text.len(), path.display());
        Ok(text)
    }

    fn extract_page_texts(path: &Path) -> Result<Vec<(usize, String)>, ExtractionError> {
        let pdf_error = |e: pdf::error::PdfError| ExtractionError::Pdf {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let file = FileOptions::cached().open(path).map_err(pdf_error)?;
        let total_pages = file.num_pages();
        debug!("PDF has {} pages", total_pages);

        let mut page_texts = Vec::new();
        for page_num in 0..total_pages {
            let page_number = page_num as usize + 1;
            let page = match file.get_page(page_num) {
                Ok(page) => page,
                Err(e) => {
                    warn!("Failed to get page {}: {}", page_number, e);
                    continue;
                }
            };

            let mut page_text = String::new();
            if let Some(content) = &page.contents {
                if let Err(e) = Self::extract_text_from_content(&file, content, &mut page_text) {
                    warn!("Failed to extract from page {} content: {}", page_number, e);
                }
            }

            let cleaned = Self::clean_page_text(&page_text);
            if cleaned.is_empty() {
                debug!("No text extracted from page {}", page_number);
                continue;
            }
            debug!("Page {} extracted {} chars", page_number, cleaned.len());
            page_texts.push((page_number, cleaned));
        }

        Ok(page_texts)
    }

    fn clean_page_text(raw_text: &str) -> String {
        raw_text
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn extract_text_from_content(
        resolver: &impl Resolve,
        content: &Content,
        text: &mut String,
    ) -> Result<(), pdf::error::PdfError> {
        for op in content.operations(resolver)? {
            match op {
                Op::TextDraw { text: t } => {
                    let text_str = t.to_string_lossy();
                    if !text_str.trim().is_empty() {
                        text.push_str(&text_str);
                        text.push(' ');
                    }
                }
                Op::TextDrawAdjusted { array } => {
                    for item in array {
                        match item {
                            TextDrawAdjusted::Text(text_str) => {
                                let text_content = text_str.to_string_lossy();
                                if !text_content.trim().is_empty() {
                                    text.push_str(&text_content);
                                    text.push(' ');
                                }
                            }
                            TextDrawAdjusted::Spacing(_) => text.push(' '),
                        }
                    }
                }
                Op::TextNewline => text.push('\n'),
                Op::MoveTextPosition { translation } => {
                    if translation.y.abs() > LINE_BREAK_MOVE {
                        text.push('\n');
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn extract_with_pdftotext(path: &Path) -> Result<Vec<(usize, String)>, ExtractionError> {
        let failure = |message: String| ExtractionError::Pdftotext {
            path: path.to_path_buf(),
            message,
        };

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg("-enc")
            .arg("UTF-8")
            .arg(path)
            .arg("-")
            .output()
            .map_err(|e| failure(format!("could not run pdftotext ({}); is poppler-utils installed?", e)))?;

        if !output.status.success() {
            return Err(failure(format!(
                "exit status {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_form_feed_pages(&text))
    }
}

/// Split `pdftotext` output on form feeds, keeping non-blank pages with their
/// 1-based page numbers.
fn split_form_feed_pages(text: &str) -> Vec<(usize, String)> {
    text.split('\u{c}')
        .enumerate()
        .map(|(i, page)| (i + 1, page.trim().to_string()))
        .filter(|(_, page)| !page.is_empty())
        .collect()
}
