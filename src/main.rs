use anyhow::{bail, Result};
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use lesson_plan_analyzer::config::{Config, DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV};
use lesson_plan_analyzer::pdf_processor::PdfProcessor;
use lesson_plan_analyzer::LessonContext;

/// Analyze the structure of lesson plans and write one JSON report per document.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// PDF or text files, or directories to search for them
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    #[arg(short, long, env = OUTPUT_DIR_ENV, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    #[arg(long)]
    subject: Option<String>,

    #[arg(long)]
    grade_level: Option<String>,

    #[arg(long)]
    topic: Option<String>,

    /// Planned lesson length in minutes
    #[arg(long)]
    duration: Option<u32>,

    #[arg(long)]
    students: Option<u32>,

    /// Free-text notes about the class
    #[arg(long)]
    context: Option<String>,

    /// Print each document's digest to stdout
    #[arg(long)]
    print_summary: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let context = LessonContext {
        subject: args.subject,
        grade_level: args.grade_level,
        lesson_topic: args.topic,
        lesson_duration: args.duration,
        student_count: args.students,
        additional_context: args.context,
    };

    let mut config = Config::new(args.inputs, args.output_dir)?.with_lesson_context(context);
    config.print_summary = args.print_summary;

    let summary = PdfProcessor::process_collection(&config)?;
    info!(
        "Processed {} document(s): {} degraded, {} failed",
        summary.processed,
        summary.degraded,
        summary.failed.len()
    );
    for failure in &summary.failed {
        warn!("{}: {}", failure.source, failure.reason);
    }

    if summary.attempted() > 0 && summary.processed == 0 {
        bail!("No document could be analyzed");
    }
    Ok(())
}
