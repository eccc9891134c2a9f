//! Text renderings of an analysis for the feedback generator.

use crate::models::{LessonContext, StructureAnalysis};
use crate::utils::truncate_chars;

const DIGEST_OBJECTIVES: usize = 3;
const DIGEST_OBJECTIVE_CHARS: usize = 100;
const BRIEF_OBJECTIVES: usize = 5;
const BRIEF_RESOURCES: usize = 5;
const UNSPECIFIED: &str = "No especificado";

/// Compact digest of a structural analysis.
///
/// Lines appear in a fixed order and fields without data are left out.
pub fn render_summary(analysis: &StructureAnalysis) -> String {
    let mut summary = vec![
        "=== ANÁLISIS DE PLANEACIÓN (PDF) ===".to_string(),
        format!("Páginas analizadas: {}", analysis.total_pages),
        format!("Total de palabras: {}", analysis.total_words),
        format!("Puntuación de completitud: {}/100", analysis.completeness_score),
        String::new(),
    ];

    if !analysis.sections_found.is_empty() {
        summary.push(format!("Secciones encontradas: {}", section_labels(analysis)));
    }

    let objectives = &analysis.learning_objectives;
    if !objectives.is_empty() {
        summary.push(format!("Objetivos de aprendizaje detectados: {}", objectives.len()));
        for (i, objective) in objectives.iter().take(DIGEST_OBJECTIVES).enumerate() {
            summary.push(format!("  {}. {}", i + 1, shorten(objective, DIGEST_OBJECTIVE_CHARS)));
        }
    }

    if analysis.activities_count > 0 {
        summary.push(format!("Actividades planificadas: {}", analysis.activities_count));
    }

    if !analysis.assessment_methods.is_empty() {
        summary.push(format!("Métodos de evaluación: {}", analysis.assessment_methods.join(", ")));
    }

    if analysis.time_allocation.total_minutes > 0 {
        summary.push(format!("Tiempo total estimado: {} minutos", analysis.time_allocation.total_minutes));
    }

    summary.join("\n")
}

/// Full request text for the feedback generator: educational context,
/// structural findings and the digest.
pub fn render_feedback_brief(analysis: &StructureAnalysis, context: &LessonContext, digest: &str) -> String {
    let mut brief = Vec::new();

    if !context.is_empty() {
        brief.push("=== CONTEXTO EDUCATIVO ===".to_string());
        brief.push(format!("Materia: {}", context.subject.as_deref().unwrap_or(UNSPECIFIED)));
        brief.push(format!("Grado: {}", context.grade_level.as_deref().unwrap_or(UNSPECIFIED)));
        brief.push(format!("Tema de la clase: {}", context.lesson_topic.as_deref().unwrap_or(UNSPECIFIED)));
        if let Some(duration) = context.lesson_duration {
            brief.push(format!("Duración planificada: {} minutos", duration));
        }
        if let Some(students) = context.student_count {
            brief.push(format!("Número de estudiantes: {}", students));
        }
        if let Some(extra) = context.additional_context.as_deref().filter(|s| !s.trim().is_empty()) {
            brief.push(format!("Contexto adicional: {}", extra));
        }
        brief.push(String::new());
    }

    brief.push("=== ANÁLISIS ESTRUCTURAL ===".to_string());
    brief.push(format!("Completitud de la planeación: {}/100", analysis.completeness_score));
    brief.push(format!("Páginas analizadas: {}", analysis.total_pages));
    brief.push(format!("Total de palabras: {}", analysis.total_words));

    if !analysis.sections_found.is_empty() {
        brief.push(format!("Secciones encontradas: {}", section_labels(analysis)));
    }

    let objectives = &analysis.learning_objectives;
    if !objectives.is_empty() {
        brief.push(format!("\nObjetivos de aprendizaje ({} encontrados):", objectives.len()));
        for (i, objective) in objectives.iter().take(BRIEF_OBJECTIVES).enumerate() {
            brief.push(format!("  {}. {}", i + 1, objective));
        }
    }

    if analysis.activities_count > 0 {
        brief.push(format!("\nActividades planificadas: {}", analysis.activities_count));
    }

    if !analysis.assessment_methods.is_empty() {
        brief.push(format!("Métodos de evaluación: {}", analysis.assessment_methods.join(", ")));
    }

    if !analysis.resources_list.is_empty() {
        let resources: Vec<&str> = analysis
            .resources_list
            .iter()
            .take(BRIEF_RESOURCES)
            .map(String::as_str)
            .collect();
        brief.push(format!("Recursos educativos: {}", resources.join(", ")));
    }

    let time = &analysis.time_allocation;
    if time.total_minutes > 0 {
        brief.push(format!("Tiempo total estimado: {} minutos", time.total_minutes));
        brief.push(format!("Actividades con tiempo asignado: {}", time.activities_with_time));
    }

    if !analysis.grade_level_indicators.is_empty() {
        let bands: Vec<&str> = analysis.grade_level_indicators.iter().map(|band| band.label()).collect();
        brief.push(format!("Indicadores de nivel detectados: {}", bands.join(", ")));
    }

    if !digest.trim().is_empty() {
        brief.push("\n=== CONTENIDO DE LA PLANEACIÓN ===".to_string());
        brief.push(digest.to_string());
    }

    brief.join("\n")
}

fn section_labels(analysis: &StructureAnalysis) -> String {
    analysis
        .sections_found
        .iter()
        .map(|kind| kind.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn shorten(text: &str, max_chars: usize) -> String {
    let head = truncate_chars(text, max_chars);
    if head.len() < text.len() {
        format!("{}...", head)
    } else {
        head.to_string()
    }
}
