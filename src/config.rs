use std::path::{Path, PathBuf};
use anyhow::{bail, Result};
use walkdir::WalkDir;

use crate::models::LessonContext;

pub const OUTPUT_DIR_ENV: &str = "LESSON_PLAN_OUTPUT_DIR";
pub const DEFAULT_OUTPUT_DIR: &str = "reports";
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["pdf", "txt"];

pub struct Config {
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub context: LessonContext,
    pub print_summary: bool,
}

impl Config {
    pub fn new(inputs: Vec<PathBuf>, output_dir: PathBuf) -> Result<Self> {
        if inputs.is_empty() {
            bail!("No input documents given");
        }
        for input in &inputs {
            if !input.exists() {
                bail!("Input not found: {}", input.display());
            }
        }
        Ok(Self {
            inputs,
            output_dir,
            context: LessonContext::default(),
            print_summary: false,
        })
    }

    pub fn with_lesson_context(mut self, context: LessonContext) -> Self {
        self.context = context;
        self
    }

    /// Every supported document under the configured inputs, sorted.
    ///
    /// Files given explicitly are kept whatever their extension, so the
    /// processor can report them as unsupported.
    pub fn document_paths(&self) -> Result<Vec<PathBuf>> {
        let mut documents = Vec::new();
        for input in &self.inputs {
            if input.is_file() {
                documents.push(input.clone());
                continue;
            }
            for entry in WalkDir::new(input).follow_links(true) {
                let entry = entry?;
                if entry.file_type().is_file() && is_supported(entry.path()) {
                    documents.push(entry.into_path());
                }
            }
        }
        documents.sort();
        documents.dedup();
        Ok(documents)
    }
}

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
