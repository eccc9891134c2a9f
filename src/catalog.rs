//! Static pattern tables: section headings and grade-level indicators.
//!
//! Both catalogs are compiled once and shared read-only. Order matters in
//! both: categories are evaluated in declaration order and, within a
//! category, the first heading pattern that matches anywhere wins.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Objectives,
    Content,
    Activities,
    Assessment,
    Resources,
    Time,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Objectives,
        SectionKind::Content,
        SectionKind::Activities,
        SectionKind::Assessment,
        SectionKind::Resources,
        SectionKind::Time,
    ];

    pub const ESSENTIAL: [SectionKind; 3] = [
        SectionKind::Objectives,
        SectionKind::Content,
        SectionKind::Activities,
    ];

    pub const RECOMMENDED: [SectionKind; 3] = [
        SectionKind::Assessment,
        SectionKind::Resources,
        SectionKind::Time,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Objectives => "objectives",
            SectionKind::Content => "content",
            SectionKind::Activities => "activities",
            SectionKind::Assessment => "assessment",
            SectionKind::Resources => "resources",
            SectionKind::Time => "time",
        }
    }

    /// Spanish label used in rendered digests.
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Objectives => "objetivos",
            SectionKind::Content => "contenidos",
            SectionKind::Activities => "actividades",
            SectionKind::Assessment => "evaluación",
            SectionKind::Resources => "recursos",
            SectionKind::Time => "tiempo",
        }
    }

    fn heading_patterns(self) -> &'static [&'static str] {
        match self {
            SectionKind::Objectives => &[
                r"objetivos?\s+(?:de\s+)?(?:aprendizaje|específicos?|generales?)",
                r"propósitos?\s+(?:de\s+la\s+)?(?:clase|lección)",
                r"metas?\s+(?:de\s+)?aprendizaje",
                r"qué\s+aprenderán",
                r"logros?\s+esperados?",
                r"\bobjetivos?\b",
            ],
            SectionKind::Content => &[
                r"contenidos?\s+(?:temáticos?|curriculares?)?",
                r"temas?\s+(?:a\s+)?(?:desarrollar|tratar)",
                r"materias?\s+(?:de\s+estudio)?",
                r"conceptos?\s+(?:clave|principales?)",
                r"\bcontenidos?\b",
            ],
            SectionKind::Activities => &[
                r"actividades?\s+(?:de\s+)?(?:aprendizaje|enseñanza)?",
                r"estrategias?\s+(?:didácticas?|metodológicas?)",
                r"desarrollo\s+(?:de\s+la\s+)?clase",
                r"secuencia\s+didáctica",
                r"metodología",
                r"\bactividades?\b",
            ],
            SectionKind::Assessment => &[
                r"evaluación",
                r"assessment",
                r"criterios?\s+de\s+evaluación",
                r"instrumentos?\s+de\s+evaluación",
                r"rúbricas?",
            ],
            SectionKind::Resources => &[
                r"recursos?\s+(?:didácticos?|educativos?)?",
                r"materiales?\s+(?:educativos?|de\s+apoyo)?",
                r"herramientas?",
                r"tecnología\s+educativa",
                r"\brecursos?\b",
                r"\bmateriales?\b",
            ],
            SectionKind::Time => &[
                r"tiempo\s+(?:estimado|asignado)",
                r"duración\s+(?:de\s+la\s+)?(?:clase|actividad)",
                r"cronograma",
                r"distribución\s+del\s+tiempo",
                r"\bduraci[oó]n\b",
                r"\btiempo\s*:",
            ],
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct SectionEntry {
    pub kind: SectionKind,
    pub patterns: Vec<Regex>,
}

impl SectionEntry {
    /// Start offset of the first pattern, in pattern order, that matches anywhere.
    pub fn first_heading(&self, text: &str) -> Option<usize> {
        self.patterns
            .iter()
            .find_map(|re| re.find(text).map(|m| m.start()))
    }
}

pub struct SectionCatalog {
    entries: Vec<SectionEntry>,
}

impl SectionCatalog {
    pub fn build() -> Result<Self, regex::Error> {
        let mut entries = Vec::with_capacity(SectionKind::ALL.len());
        for kind in SectionKind::ALL {
            let patterns = kind
                .heading_patterns()
                .iter()
                .map(|pattern| Regex::new(&format!("(?i){}", pattern)))
                .collect::<Result<Vec<_>, _>>()?;
            entries.push(SectionEntry { kind, patterns });
        }
        Ok(Self { entries })
    }

    /// The process-wide catalog, compiled on first use.
    pub fn global() -> Result<&'static SectionCatalog, AnalysisError> {
        match &*SECTION_CATALOG {
            Ok(catalog) => Ok(catalog),
            Err(e) => Err(AnalysisError::Pattern(e.clone())),
        }
    }

    pub fn entries(&self) -> &[SectionEntry] {
        &self.entries
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeBand {
    Preschool,
    LowerPrimary,
    UpperPrimary,
    Secondary,
    UpperSecondary,
}

impl GradeBand {
    pub fn label(self) -> &'static str {
        match self {
            GradeBand::Preschool => "preescolar",
            GradeBand::LowerPrimary => "primaria baja",
            GradeBand::UpperPrimary => "primaria alta",
            GradeBand::Secondary => "secundaria",
            GradeBand::UpperSecondary => "bachillerato",
        }
    }
}

/// Literal indicator tokens per band, matched against lowercased text.
pub const GRADE_LEVEL_CATALOG: [(GradeBand, &[&str]); 5] = [
    (GradeBand::Preschool, &["preescolar", "jardín", "kinder", "inicial"]),
    (
        GradeBand::LowerPrimary,
        &["1°", "2°", "3°", "primero", "segundo", "tercero", "grado"],
    ),
    (
        GradeBand::UpperPrimary,
        &["4°", "5°", "6°", "cuarto", "quinto", "sexto"],
    ),
    (
        GradeBand::Secondary,
        &["7°", "8°", "9°", "séptimo", "octavo", "noveno", "secundaria"],
    ),
    (
        GradeBand::UpperSecondary,
        &["10°", "11°", "12°", "décimo", "once", "doce", "bachillerato", "preparatoria"],
    ),
];

lazy_static! {
    static ref SECTION_CATALOG: Result<SectionCatalog, regex::Error> = SectionCatalog::build();
}
