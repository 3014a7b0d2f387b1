//! Suggested phase order based on the canonical appraisal lifecycle.
//!
//! Advisory only: nothing calls this automatically, and the caller decides
//! whether to renumber and persist the result.

use crate::phase::Phase;

/// Return a copy of `phases` sorted by canonical lifecycle rank.
///
/// The sort is stable, so phases sharing a type keep their relative input
/// order and `Custom` phases trail in the order they were given. Display
/// orders are untouched; see [`crate::reorder::renumber_display_order`].
pub fn get_suggested_phase_order(phases: &[Phase]) -> Vec<Phase> {
    let mut ordered = phases.to_vec();
    ordered.sort_by_key(|p| p.phase_type.canonical_rank());
    ordered
}

/// Whether `phases` already follow the canonical lifecycle order.
pub fn is_in_suggested_order(phases: &[Phase]) -> bool {
    phases
        .windows(2)
        .all(|pair| pair[0].phase_type.canonical_rank() <= pair[1].phase_type.canonical_rank())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase_type::PhaseType;

    fn typed(phase_type: PhaseType, order: i32) -> Phase {
        Phase::new(phase_type, phase_type.label(), order, 0, 7)
    }

    fn types(phases: &[Phase]) -> Vec<PhaseType> {
        phases.iter().map(|p| p.phase_type).collect()
    }

    #[test]
    fn sorts_into_lifecycle_order() {
        let phases = vec![
            typed(PhaseType::Acknowledgment, 1),
            typed(PhaseType::Calibration, 2),
            typed(PhaseType::GoalSetting, 3),
            typed(PhaseType::ManagerReview, 4),
            typed(PhaseType::SelfAssessment, 5),
            typed(PhaseType::Finalization, 6),
        ];
        let result = get_suggested_phase_order(&phases);
        assert_eq!(
            types(&result),
            vec![
                PhaseType::GoalSetting,
                PhaseType::SelfAssessment,
                PhaseType::ManagerReview,
                PhaseType::Calibration,
                PhaseType::Finalization,
                PhaseType::Acknowledgment,
            ]
        );
    }

    #[test]
    fn display_orders_are_left_alone() {
        let phases = vec![
            typed(PhaseType::Finalization, 1),
            typed(PhaseType::GoalSetting, 2),
        ];
        let result = get_suggested_phase_order(&phases);
        assert_eq!(result[0].display_order, 2);
        assert_eq!(result[1].display_order, 1);
    }

    #[test]
    fn ties_keep_input_order() {
        let first = typed(PhaseType::ManagerReview, 1);
        let second = typed(PhaseType::ManagerReview, 2);
        let goal = typed(PhaseType::GoalSetting, 3);
        let result = get_suggested_phase_order(&[first.clone(), second.clone(), goal.clone()]);
        assert_eq!(result[0].id, goal.id);
        assert_eq!(result[1].id, first.id);
        assert_eq!(result[2].id, second.id);
    }

    #[test]
    fn custom_phases_sort_last() {
        let custom = typed(PhaseType::Custom, 1);
        let ack = typed(PhaseType::Acknowledgment, 2);
        let result = get_suggested_phase_order(&[custom.clone(), ack.clone()]);
        assert_eq!(result[0].id, ack.id);
        assert_eq!(result[1].id, custom.id);
    }

    #[test]
    fn applying_twice_is_stable() {
        let phases = vec![
            typed(PhaseType::HrReview, 1),
            typed(PhaseType::Custom, 2),
            typed(PhaseType::FeedbackCollection, 3),
            typed(PhaseType::Custom, 4),
            typed(PhaseType::GoalSetting, 5),
        ];
        let once = get_suggested_phase_order(&phases);
        let twice = get_suggested_phase_order(&once);
        assert_eq!(once, twice);
        assert!(is_in_suggested_order(&once));
    }

    #[test]
    fn empty_input() {
        assert!(get_suggested_phase_order(&[]).is_empty());
        assert!(is_in_suggested_order(&[]));
    }

    #[test]
    fn detects_out_of_order() {
        let phases = vec![
            typed(PhaseType::Calibration, 1),
            typed(PhaseType::GoalSetting, 2),
        ];
        assert!(!is_in_suggested_order(&phases));
    }
}
