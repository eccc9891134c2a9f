//! Per-section content heuristics.
//!
//! Every extractor is total: blank input produces the empty value for its
//! output type. Normalized text arrives as a single line, so the list-based
//! extractors first rebuild logical lines from list markers and sentence ends.

use lazy_static::lazy_static;
use regex::Regex;

use crate::catalog::{GradeBand, GRADE_LEVEL_CATALOG};
use crate::models::TimeAllocation;

pub const MAX_OBJECTIVES: usize = 5;
pub const MAX_RESOURCES: usize = 10;

const MIN_OBJECTIVE_CHARS: usize = 10;
const MIN_RESOURCE_CHARS: usize = 3;

pub const ASSESSMENT_KEYWORDS: [&str; 12] = [
    "observación",
    "rúbrica",
    "lista de cotejo",
    "portafolio",
    "examen",
    "prueba",
    "quiz",
    "proyecto",
    "presentación",
    "autoevaluación",
    "coevaluación",
    "heteroevaluación",
];

lazy_static! {
    /// Heading label at the very start of a span, e.g. "Objetivos:"
    static ref RE_LEADING_LABEL: Regex = Regex::new(r"^[^:.;]{1,60}:\s*").unwrap();

    /// Sentence ends (cut after) and list markers (cut before)
    static ref RE_LINE_BREAK: Regex = Regex::new(r"[.;]\s+|\b\d{1,2}[.)]\s+|[-*•]\s+").unwrap();

    static ref RE_LIST_ITEM: Regex = Regex::new(r"^(?:\d{1,2}[.)]|[-*•])\s*(.+)$").unwrap();
    static ref RE_SUBJECT_LINE: Regex =
        Regex::new(r"(?i)^(?:que|el\s+estudiante|los\s+estudiantes?)\s+.+$").unwrap();
    static ref RE_VERB_LINE: Regex = Regex::new(
        r"(?i)^(?:identificar|reconocer|comprender|analizar|aplicar|evaluar)\s+.+$"
    ).unwrap();

    /// Resource-noun label, optionally qualified ("Recursos didácticos: ...")
    static ref RE_RESOURCE_LABEL: Regex = Regex::new(
        r"(?i)^(?:libros?|textos?|material(?:es)?|recursos?|herramientas?)(?:\s+(?:didácticos?|educativos?|de\s+apoyo))?\s*:\s*(.+)$"
    ).unwrap();

    static ref RE_LABELED_ACTIVITY: Regex =
        Regex::new(r"(?i)^(?:\d{1,2}[.)]?|[-*•])\s*(?:actividad|ejercicio|tarea)").unwrap();
    static ref RE_ORDINAL_ACTIVITY: Regex = Regex::new(
        r"(?i)(?:primera|segunda|tercera|cuarta|quinta)\s+(?:actividad|fase)"
    ).unwrap();
    static ref RE_STAGE_MARKER: Regex = Regex::new(r"(?i)\b(?:inicio|desarrollo|cierre)\s*:").unwrap();
    static ref RE_STEP_LINE: Regex = Regex::new(r"(?i)^(?:paso|etapa)\s+\d+").unwrap();

    static ref RE_DURATION: Regex = Regex::new(r"(?i)(\d+)\s*(minutos?|min|horas?|hrs?)\b").unwrap();
}

/// Rebuild the logical lines of a single-line section, heading label dropped.
fn logical_lines(text: &str) -> Vec<&str> {
    match RE_LEADING_LABEL.find(text) {
        Some(label) => split_lines(&text[label.end()..]),
        None => split_lines(text),
    }
}

/// Cut after sentence ends and before list markers.
fn split_lines(body: &str) -> Vec<&str> {
    let mut cuts = vec![0];
    for m in RE_LINE_BREAK.find_iter(body) {
        if m.as_str().starts_with(['.', ';']) {
            cuts.push(m.end());
        } else {
            cuts.push(m.start());
        }
    }
    cuts.push(body.len());

    cuts.windows(2)
        .map(|w| body[w[0]..w[1]].trim())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Learning objectives: list items first, then subject-led lines, then
/// lines opening with a cognitive verb.
pub fn extract_learning_objectives(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let lines = logical_lines(text);

    let list_items = lines
        .iter()
        .filter_map(|line| RE_LIST_ITEM.captures(line).and_then(|c| c.get(1)))
        .map(|m| m.as_str());
    let subject_lines = lines.iter().copied().filter(|line| RE_SUBJECT_LINE.is_match(line));
    let verb_lines = lines.iter().copied().filter(|line| RE_VERB_LINE.is_match(line));

    list_items
        .chain(subject_lines)
        .chain(verb_lines)
        .map(str::trim)
        .filter(|objective| objective.chars().count() > MIN_OBJECTIVE_CHARS)
        .take(MAX_OBJECTIVES)
        .map(String::from)
        .collect()
}

/// Number of activities announced in the section.
///
/// A non-blank section where no heuristic fires still counts as one
/// activity: the section exists but its items could not be enumerated.
pub fn count_activities(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    let lines = logical_lines(text);

    let labeled = lines.iter().filter(|line| RE_LABELED_ACTIVITY.is_match(line)).count();
    let ordinal = RE_ORDINAL_ACTIVITY.find_iter(text).count();
    let stages = RE_STAGE_MARKER.find_iter(text).count();
    let steps = lines.iter().filter(|line| RE_STEP_LINE.is_match(line)).count();

    (labeled + ordinal + stages + steps).max(1)
}

/// Assessment instruments named in the section, in keyword order.
pub fn extract_assessment_methods(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();
    ASSESSMENT_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .map(|keyword| title_case(keyword))
        .collect()
}

/// Resources: list items first, then lines opening with a resource label.
///
/// The heading line is kept here, since "Recursos: pizarrón" is itself a
/// labeled resource line.
pub fn extract_resources(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let lines = split_lines(text);

    let list_items = lines
        .iter()
        .filter_map(|line| RE_LIST_ITEM.captures(line).and_then(|c| c.get(1)));
    let labeled = lines
        .iter()
        .filter_map(|line| RE_RESOURCE_LABEL.captures(line).and_then(|c| c.get(1)));

    list_items
        .chain(labeled)
        .map(|m| m.as_str().trim())
        .filter(|resource| resource.chars().count() > MIN_RESOURCE_CHARS)
        .take(MAX_RESOURCES)
        .map(String::from)
        .collect()
}

/// Sum every minute or hour quantity mentioned in `text`.
pub fn extract_time_allocation(text: &str) -> TimeAllocation {
    let mut allocation = TimeAllocation::default();

    for caps in RE_DURATION.captures_iter(text) {
        let quantity: u32 = match caps[1].parse() {
            Ok(quantity) => quantity,
            Err(_) => continue,
        };
        let minutes = if caps[2].as_bytes()[0].eq_ignore_ascii_case(&b'h') {
            quantity.saturating_mul(60)
        } else {
            quantity
        };
        allocation.total_minutes = allocation.total_minutes.saturating_add(minutes);
        allocation.activities_with_time += 1;
    }

    allocation
}

/// Grade bands with at least one indicator token present in `text`.
pub fn detect_grade_levels(text: &str) -> Vec<GradeBand> {
    let lower = text.to_lowercase();
    GRADE_LEVEL_CATALOG
        .iter()
        .filter(|(_, indicators)| indicators.iter().any(|token| lower.contains(token)))
        .map(|(band, _)| *band)
        .collect()
}

/// Uppercase the first letter of every word, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extractors_are_total_on_empty_input() {
        assert!(extract_learning_objectives("").is_empty());
        assert_eq!(count_activities(""), 0);
        assert_eq!(count_activities("   "), 0);
        assert!(extract_assessment_methods("").is_empty());
        assert!(extract_resources("").is_empty());
        assert_eq!(extract_time_allocation(""), TimeAllocation::default());
        assert!(detect_grade_levels("").is_empty());
    }

    #[test]
    fn logical_lines_split_on_markers_and_sentences() {
        let lines = logical_lines("Objetivos: 1. Leer en voz alta. Escribir; 2) Dibujar - Pintar");
        assert_eq!(lines, vec!["1. Leer en voz alta.", "Escribir;", "2) Dibujar", "- Pintar"]);
    }

    #[test]
    fn numbered_objectives_drop_the_marker() {
        let objectives = extract_learning_objectives(
            "Objetivos: 1. Identificar las partes de una célula. 2. Describir la función del núcleo.",
        );
        assert_eq!(
            objectives,
            vec!["Identificar las partes de una célula.", "Describir la función del núcleo."]
        );
    }

    #[test]
    fn subject_and_verb_lines_follow_list_items() {
        let text = "Propósitos de la clase: Comprender el ciclo del agua. \
                    El estudiante reconocerá los estados de la materia. - Dibujar un diagrama completo";
        let objectives = extract_learning_objectives(text);
        assert_eq!(
            objectives,
            vec![
                "Dibujar un diagrama completo",
                "El estudiante reconocerá los estados de la materia.",
                "Comprender el ciclo del agua.",
            ]
        );
    }

    #[test]
    fn objectives_are_capped_and_short_ones_dropped() {
        let text = "Objetivos: 1. Corto. 2. Leer textos narrativos. 3. Escribir un cuento breve. \
                    4. Reconocer personajes principales. 5. Identificar el conflicto central. \
                    6. Comparar dos finales distintos. 7. Presentar el trabajo final.";
        let objectives = extract_learning_objectives(text);
        assert_eq!(objectives.len(), MAX_OBJECTIVES);
        assert_eq!(objectives[0], "Leer textos narrativos.");
        assert!(!objectives.iter().any(|o| o == "Corto."));
    }

    #[test]
    fn activities_sum_every_heuristic() {
        let text = "Actividades: Inicio: saludo. Desarrollo: lectura. Cierre: reflexión. \
                    Primera actividad en parejas. Paso 1 leer. Etapa 2 resumir. - Tarea de casa";
        assert_eq!(count_activities(text), 7);
    }

    #[test]
    fn unenumerable_activities_count_as_one() {
        assert_eq!(count_activities("Metodología basada en proyectos colaborativos"), 1);
    }

    #[test]
    fn assessment_methods_are_title_cased_in_keyword_order() {
        let methods = extract_assessment_methods("Evaluación: lista de cotejo, RÚBRICA y autoevaluación");
        assert_eq!(methods, vec!["Rúbrica", "Lista De Cotejo", "Autoevaluación"]);
    }

    #[test]
    fn resources_from_items_and_labels() {
        let text = "Recursos: - Pizarrón - Fichas - TV. Libro: Ciencias Naturales 5";
        let resources = extract_resources(text);
        // "TV." is too short to keep
        assert_eq!(resources, vec!["Pizarrón", "Fichas", "Ciencias Naturales 5"]);
    }

    #[test]
    fn heading_line_is_itself_a_labeled_resource() {
        let resources = extract_resources("Recursos: pizarrón, marcadores y libro de texto.");
        assert_eq!(resources, vec!["pizarrón, marcadores y libro de texto."]);

        let resources = extract_resources("Materiales de apoyo: regla, compás y escuadras de plástico.");
        assert_eq!(resources, vec!["regla, compás y escuadras de plástico."]);
    }

    #[test]
    fn time_converts_hours_to_minutes() {
        let time = extract_time_allocation("Introducción 15 min, práctica 1 hora, cierre 10 minutos. Tarea: 2 hrs");
        assert_eq!(time.total_minutes, 15 + 60 + 10 + 120);
        assert_eq!(time.activities_with_time, 4);
    }

    #[test]
    fn time_units_match_in_any_case() {
        let time = extract_time_allocation("Proyecto: 2 HORAS. Cierre: 5 Min");
        assert_eq!(time.total_minutes, 125);
        assert_eq!(time.activities_with_time, 2);
    }

    #[test]
    fn time_ignores_unrelated_numbers() {
        let time = extract_time_allocation("Grupo de 30 alumnos, 5 mindsets");
        assert_eq!(time, TimeAllocation::default());
    }

    #[test]
    fn grade_bands_detected_once_each() {
        let bands = detect_grade_levels("Planeación para cuarto y quinto de primaria, 4° grado");
        assert_eq!(bands, vec![GradeBand::LowerPrimary, GradeBand::UpperPrimary]);
    }
}
