use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;

use crate::catalog::{GradeBand, SectionKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeAllocation {
    pub total_minutes: u32,
    pub activities_with_time: u32,
}

/// Structural digest of a single lesson plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureAnalysis {
    pub total_words: usize,
    pub total_pages: usize,
    pub sections_found: Vec<SectionKind>,
    pub sections_content: BTreeMap<SectionKind, String>,
    pub grade_level_indicators: Vec<GradeBand>,
    pub learning_objectives: Vec<String>,
    pub activities_count: usize,
    pub assessment_methods: Vec<String>,
    pub resources_list: Vec<String>,
    pub time_allocation: TimeAllocation,
    pub completeness_score: u8,
}

impl StructureAnalysis {
    /// The neutral all-zero report used when analysis cannot complete.
    pub fn basic() -> Self {
        Self::default()
    }
}

/// Outcome of analyzing one document.
///
/// `Degraded` carries the basic empty structure together with the reason the
/// analysis could not run, so callers can flag the document without having
/// to handle a panic or an error path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Analysis {
    Complete(StructureAnalysis),
    Degraded {
        reason: String,
        structure: StructureAnalysis,
    },
}

impl Analysis {
    pub fn degraded(reason: impl Into<String>) -> Self {
        Analysis::Degraded {
            reason: reason.into(),
            structure: StructureAnalysis::basic(),
        }
    }

    pub fn structure(&self) -> &StructureAnalysis {
        match self {
            Analysis::Complete(structure) => structure,
            Analysis::Degraded { structure, .. } => structure,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Analysis::Degraded { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

impl LessonContext {
    pub fn is_empty(&self) -> bool {
        self == &LessonContext::default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub source: String,
    pub document: String,
    pub processing_timestamp: String,
    pub analyzer_version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentReport {
    pub metadata: ReportMetadata,
    #[serde(skip_serializing_if = "LessonContext::is_empty", default)]
    pub educational_context: LessonContext,
    pub analysis: Analysis,
    pub summary: String,
    pub feedback_brief: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FailedDocument {
    pub source: String,
    pub reason: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub degraded: usize,
    pub failed: Vec<FailedDocument>,
}

impl BatchSummary {
    pub fn attempted(&self) -> usize {
        self.processed + self.failed.len()
    }
}
