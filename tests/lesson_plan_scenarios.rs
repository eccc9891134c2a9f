//! End-to-end checks of the structure analysis on small lesson plans.

use lesson_plan_analyzer::normalize::paginate;
use lesson_plan_analyzer::{render_summary, GradeBand, LessonPlanAnalyzer, SectionKind};

const CELL_LESSON: &str = "Objetivos: 1. Identificar las partes de una célula. \
    Actividades: Inicio: presentación (10 minutos). Desarrollo: trabajo en equipo (20 minutos).";

#[test]
fn numbered_objective_and_timed_stages() {
    let analysis = LessonPlanAnalyzer::analyze(CELL_LESSON);
    let structure = analysis.structure();

    assert!(!analysis.is_degraded());
    assert!(structure.sections_found.contains(&SectionKind::Objectives));
    assert!(structure.sections_found.contains(&SectionKind::Activities));
    assert_eq!(structure.learning_objectives, vec!["Identificar las partes de una célula."]);
    assert_eq!(structure.time_allocation.total_minutes, 30);
    assert_eq!(structure.time_allocation.activities_with_time, 2);
    assert_eq!(structure.activities_count, 2);
    assert_eq!(structure.completeness_score, 46);
}

#[test]
fn empty_input_gives_empty_structure() {
    let analysis = LessonPlanAnalyzer::analyze("");
    let structure = analysis.structure();

    assert_eq!(structure.total_words, 0);
    assert!(structure.sections_found.is_empty());
    assert_eq!(structure.completeness_score, 0);
}

#[test]
fn assessment_only_plan() {
    let analysis = LessonPlanAnalyzer::analyze("Evaluación: rúbrica y lista de cotejo");
    let structure = analysis.structure();

    assert_eq!(structure.sections_found, vec![SectionKind::Assessment]);
    assert_eq!(structure.assessment_methods, vec!["Rúbrica", "Lista De Cotejo"]);
    assert_eq!(structure.completeness_score, 10);
}

#[test]
fn resources_heading_line_lists_the_resources() {
    let analysis = LessonPlanAnalyzer::analyze("Recursos: pizarrón, marcadores y libro de texto.");
    let structure = analysis.structure();

    assert_eq!(structure.sections_found, vec![SectionKind::Resources]);
    assert_eq!(structure.resources_list, vec!["pizarrón, marcadores y libro de texto."]);
}

#[test]
fn assessment_span_starts_at_the_first_evaluation_heading() {
    let analysis = LessonPlanAnalyzer::analyze(
        "Evaluación: rúbrica de desempeño y examen escrito al final de la unidad. \
         Criterios de evaluación: participación activa.",
    );
    let structure = analysis.structure();

    assert_eq!(structure.sections_found, vec![SectionKind::Assessment]);
    assert!(structure.sections_content[&SectionKind::Assessment].starts_with("Evaluación:"));
    assert_eq!(structure.assessment_methods, vec!["Rúbrica", "Examen"]);
}

#[test]
fn heading_within_lookahead_does_not_truncate_span() {
    let text = "Objetivos: comprender la célula viva. Contenidos: la célula, sus organelos \
                y las funciones vitales de cada parte del organismo.";
    let contents_at = text.find("Contenidos").unwrap();
    assert!(contents_at < 50);

    let analysis = LessonPlanAnalyzer::analyze(text);
    let sections = &analysis.structure().sections_content;

    let objectives = &sections[&SectionKind::Objectives];
    assert!(objectives.len() > contents_at);
    assert!(objectives.contains("Contenidos: la célula"));
    assert!(sections[&SectionKind::Content].starts_with("Contenidos"));
}

#[test]
fn repeated_runs_serialize_identically() {
    let first = serde_json::to_string(&LessonPlanAnalyzer::analyze(CELL_LESSON)).unwrap();
    let second = serde_json::to_string(&LessonPlanAnalyzer::analyze(CELL_LESSON)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn full_plan_across_pages() {
    let raw = paginate(vec![
        (
            1,
            "PLANEACIÓN DE CIENCIAS NATURALES - Quinto grado\n\
             Objetivos de aprendizaje:\n\
             1. Identificar los estados del agua en la vida cotidiana.\n\
             2. Explicar los cambios de estado con ejemplos del entorno.\n\
             Contenidos temáticos:\n\
             Estados sólido, líquido y gaseoso; fusión, evaporación y condensación.",
        ),
        (
            2,
            "Actividades de aprendizaje:\n\
             Inicio: pregunta detonadora sobre el hielo que se derrite (10 minutos).\n\
             Desarrollo: experimento guiado por equipos con agua y hielo (30 minutos).\n\
             Cierre: puesta en común de resultados (10 minutos).\n\
             Evaluación formativa:\n\
             Lista de cotejo del experimento y autoevaluación del equipo de trabajo.\n\
             Recursos didácticos:\n\
             - Vasos de plástico transparentes\n\
             - Hielo y agua tibia\n\
             Tiempo estimado: 50 minutos para la sesión completa de la clase.",
        ),
    ]);

    let analysis = LessonPlanAnalyzer::analyze(&raw);
    let structure = analysis.structure();

    assert_eq!(structure.total_pages, 2);
    assert_eq!(structure.sections_found, SectionKind::ALL.to_vec());
    assert_eq!(structure.completeness_score, 100);
    assert_eq!(
        structure.learning_objectives,
        vec![
            "Identificar los estados del agua en la vida cotidiana.",
            "Explicar los cambios de estado con ejemplos del entorno.",
        ]
    );
    assert_eq!(structure.activities_count, 3);
    assert_eq!(structure.assessment_methods, vec!["Lista De Cotejo", "Autoevaluación"]);
    assert_eq!(
        structure.resources_list,
        vec!["Vasos de plástico transparentes", "Hielo y agua tibia"]
    );
    assert_eq!(structure.time_allocation.total_minutes, 100);
    assert_eq!(structure.time_allocation.activities_with_time, 4);
    assert!(structure.grade_level_indicators.contains(&GradeBand::UpperPrimary));

    let digest = render_summary(structure);
    assert!(digest.contains("Puntuación de completitud: 100/100"));
    assert!(digest.contains("Actividades planificadas: 3"));
    assert!(digest.contains("Tiempo total estimado: 100 minutos"));
}

#[test]
fn analysis_round_trips_through_json() {
    let analysis = LessonPlanAnalyzer::analyze(CELL_LESSON);
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["status"], "complete");
    assert_eq!(json["sections_found"][0], "objectives");
    assert!(json["sections_content"]["activities"].as_str().unwrap().starts_with("Actividades"));

    let back: lesson_plan_analyzer::Analysis = serde_json::from_value(json).unwrap();
    assert_eq!(back, analysis);
}
