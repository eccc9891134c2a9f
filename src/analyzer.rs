//! Lesson-plan structure analysis pipeline.

use log::{debug, error, info};

use crate::catalog::{SectionCatalog, SectionKind};
use crate::error::AnalysisError;
use crate::extractors;
use crate::models::{Analysis, StructureAnalysis};
use crate::normalize::{count_pages, count_words, normalize};
use crate::scoring::completeness_score;
use crate::sections::locate_sections;

pub struct LessonPlanAnalyzer;

impl LessonPlanAnalyzer {
    /// Analyze raw document text, degrading to an empty report on failure.
    ///
    /// Never fails: blank text yields a complete all-zero structure, and an
    /// internal fault is logged and reported as [`Analysis::Degraded`].
    pub fn analyze(raw: &str) -> Analysis {
        Self::analyze_with(raw, SectionCatalog::global())
    }

    /// Analyze against an explicit catalog, or degrade if it is unavailable.
    pub fn analyze_with(raw: &str, catalog: Result<&SectionCatalog, AnalysisError>) -> Analysis {
        match catalog.map(|catalog| Self::structure_with(raw, catalog)) {
            Ok(structure) => Analysis::Complete(structure),
            Err(e) => {
                error!("Lesson plan structure analysis failed: {}", e);
                Analysis::degraded(e.to_string())
            }
        }
    }

    /// Like [`analyze`](Self::analyze) but rejects documents with no text.
    pub fn analyze_checked(raw: &str) -> Result<Analysis, AnalysisError> {
        if raw.trim().is_empty() {
            return Err(AnalysisError::EmptyText);
        }
        Ok(Self::analyze(raw))
    }

    pub fn analyze_structure(raw: &str) -> Result<StructureAnalysis, AnalysisError> {
        Ok(Self::structure_with(raw, SectionCatalog::global()?))
    }

    fn structure_with(raw: &str, catalog: &SectionCatalog) -> StructureAnalysis {
        info!("Starting lesson plan structure analysis ({} chars)", raw.len());

        let cleaned = normalize(raw);
        let sections = locate_sections(&cleaned, catalog);
        let section = |kind: SectionKind| sections.get(&kind).map(String::as_str).unwrap_or("");

        let timed_text = format!("{} {}", section(SectionKind::Time), section(SectionKind::Activities));

        let structure = StructureAnalysis {
            total_words: count_words(&cleaned),
            total_pages: count_pages(raw),
            sections_found: sections.keys().copied().collect(),
            grade_level_indicators: extractors::detect_grade_levels(&cleaned),
            learning_objectives: extractors::extract_learning_objectives(section(SectionKind::Objectives)),
            activities_count: extractors::count_activities(section(SectionKind::Activities)),
            assessment_methods: extractors::extract_assessment_methods(section(SectionKind::Assessment)),
            resources_list: extractors::extract_resources(section(SectionKind::Resources)),
            time_allocation: extractors::extract_time_allocation(&timed_text),
            completeness_score: completeness_score(&sections),
            sections_content: sections,
        };

        debug!(
            "Sections found: {:?}, completeness {}/100",
            structure.sections_found, structure.completeness_score
        );
        info!("Lesson plan structure analysis completed");
        structure
    }
}
