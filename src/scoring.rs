use crate::catalog::SectionKind;
use crate::sections::SectionMap;

const ESSENTIAL_WEIGHT: usize = 70;
const RECOMMENDED_WEIGHT: usize = 30;

/// Weighted 0-100 completeness of a lesson plan.
///
/// Essential sections share 70 points and recommended ones 30. Only presence
/// counts, never content quality. The floor of `e/3*70 + r/3*30` is computed
/// in integers so the result is exact.
pub fn completeness_score(sections: &SectionMap) -> u8 {
    let present = |kinds: &[SectionKind]| {
        kinds
            .iter()
            .filter(|kind| sections.get(*kind).map_or(false, |span| !span.trim().is_empty()))
            .count()
    };

    let essential = present(&SectionKind::ESSENTIAL);
    let recommended = present(&SectionKind::RECOMMENDED);

    let score = (essential * ESSENTIAL_WEIGHT + recommended * RECOMMENDED_WEIGHT) / SectionKind::ESSENTIAL.len();
    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(kinds: &[SectionKind]) -> SectionMap {
        kinds.iter().map(|kind| (*kind, format!("{} texto", kind))).collect()
    }

    #[test]
    fn empty_plan_scores_zero() {
        assert_eq!(completeness_score(&SectionMap::new()), 0);
    }

    #[test]
    fn full_plan_scores_hundred() {
        assert_eq!(completeness_score(&sections(&SectionKind::ALL)), 100);
    }

    #[test]
    fn partial_plans_floor_the_weighted_sum() {
        assert_eq!(completeness_score(&sections(&[SectionKind::Assessment])), 10);
        assert_eq!(completeness_score(&sections(&[SectionKind::Objectives])), 23);
        assert_eq!(
            completeness_score(&sections(&[SectionKind::Objectives, SectionKind::Content, SectionKind::Time])),
            56
        );
        assert_eq!(completeness_score(&sections(&SectionKind::ESSENTIAL)), 70);
    }

    #[test]
    fn blank_spans_do_not_count() {
        let mut map = sections(&[SectionKind::Objectives]);
        map.insert(SectionKind::Content, "   ".to_string());
        assert_eq!(completeness_score(&map), 23);
    }
}
