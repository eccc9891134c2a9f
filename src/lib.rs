//! Heuristic structural analysis of lesson plans.
//!
//! Raw document text (pages separated by `--- Página N ---` markers) is
//! normalized, split into up to six known sections, mined for objectives,
//! activities, assessment methods, resources and time allocation, and scored
//! for completeness. The result can be rendered into a digest for a feedback
//! generator and persisted as JSON.

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extractors;
pub mod models;
pub mod normalize;
pub mod pdf_processor;
pub mod scoring;
pub mod sections;
pub mod summary;
pub mod utils;

pub use analyzer::LessonPlanAnalyzer;
pub use catalog::{GradeBand, SectionKind};
pub use error::{AnalysisError, ExtractionError};
pub use models::{Analysis, LessonContext, StructureAnalysis, TimeAllocation};
pub use summary::{render_feedback_brief, render_summary};
