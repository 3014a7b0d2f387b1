//! Canned phase lists per appraisal cycle type.
//!
//! Presets are the bulk alternative to adding phases one at a time. The
//! generated phases are ordinary [`Phase`] records and go through the same
//! calculator and validator as hand-built timelines.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::phase::Phase;
use crate::phase_type::PhaseType;
use crate::reorder::renumber_display_order;
use crate::types::DayOffset;

// ---------------------------------------------------------------------------
// Cycle type
// ---------------------------------------------------------------------------

/// How often an appraisal cycle recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleType {
    Annual,
    SemiAnnual,
    Quarterly,
    Probation,
}

impl CycleType {
    pub const ALL: [CycleType; 4] = [
        Self::Annual,
        Self::SemiAnnual,
        Self::Quarterly,
        Self::Probation,
    ];

    /// Look up a cycle type by its slug (e.g. from a URL path).
    pub fn from_slug(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::NotFound {
                entity: "CycleType",
                key: s.to_string(),
            })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::SemiAnnual => "semi_annual",
            Self::Quarterly => "quarterly",
            Self::Probation => "probation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Annual => "Annual Review",
            Self::SemiAnnual => "Semi-Annual Review",
            Self::Quarterly => "Quarterly Check-in",
            Self::Probation => "Probation Review",
        }
    }
}

// ---------------------------------------------------------------------------
// Preset tables
// ---------------------------------------------------------------------------

/// One row of a preset: where a phase of a given type sits in the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetEntry {
    pub phase_type: PhaseType,
    pub start_offset_days: u32,
    pub duration_days: u32,
    pub is_mandatory: bool,
    pub allow_parallel: bool,
}

const fn entry(
    phase_type: PhaseType,
    start_offset_days: u32,
    duration_days: u32,
    is_mandatory: bool,
    allow_parallel: bool,
) -> PresetEntry {
    PresetEntry {
        phase_type,
        start_offset_days,
        duration_days,
        is_mandatory,
        allow_parallel,
    }
}

const ANNUAL: &[PresetEntry] = &[
    entry(PhaseType::GoalSetting, 0, 14, true, false),
    entry(PhaseType::SelfAssessment, 300, 14, true, false),
    entry(PhaseType::FeedbackCollection, 300, 21, false, true),
    entry(PhaseType::ManagerReview, 321, 14, true, false),
    entry(PhaseType::Calibration, 335, 10, true, false),
    entry(PhaseType::HrReview, 345, 7, false, false),
    entry(PhaseType::Finalization, 352, 7, true, false),
    entry(PhaseType::Acknowledgment, 359, 6, true, false),
];

const SEMI_ANNUAL: &[PresetEntry] = &[
    entry(PhaseType::GoalSetting, 0, 7, true, false),
    entry(PhaseType::SelfAssessment, 150, 10, true, false),
    entry(PhaseType::FeedbackCollection, 150, 14, false, true),
    entry(PhaseType::ManagerReview, 164, 7, true, false),
    entry(PhaseType::Calibration, 171, 5, false, false),
    entry(PhaseType::Finalization, 176, 4, true, false),
    entry(PhaseType::Acknowledgment, 180, 3, true, false),
];

const QUARTERLY: &[PresetEntry] = &[
    entry(PhaseType::GoalSetting, 0, 5, true, false),
    entry(PhaseType::SelfAssessment, 75, 5, false, false),
    entry(PhaseType::ManagerReview, 80, 7, true, false),
    entry(PhaseType::Finalization, 87, 2, true, false),
    entry(PhaseType::Acknowledgment, 89, 2, false, false),
];

const PROBATION: &[PresetEntry] = &[
    entry(PhaseType::GoalSetting, 0, 7, true, false),
    entry(PhaseType::FeedbackCollection, 60, 14, false, true),
    entry(PhaseType::ManagerReview, 74, 7, true, false),
    entry(PhaseType::HrReview, 81, 5, true, false),
    entry(PhaseType::Acknowledgment, 86, 4, true, false),
];

/// The preset rows for a cycle type, in display order.
pub fn preset_entries(cycle_type: CycleType) -> &'static [PresetEntry] {
    match cycle_type {
        CycleType::Annual => ANNUAL,
        CycleType::SemiAnnual => SEMI_ANNUAL,
        CycleType::Quarterly => QUARTERLY,
        CycleType::Probation => PROBATION,
    }
}

/// Build fresh phases for a cycle type.
///
/// Each phase gets a new id, its type's label as display name, and a
/// contiguous display order.
pub fn generate_preset_phases(cycle_type: CycleType) -> Vec<Phase> {
    let mut phases: Vec<Phase> = preset_entries(cycle_type)
        .iter()
        .map(|e| {
            Phase::new(
                e.phase_type,
                e.phase_type.label(),
                0,
                e.start_offset_days,
                e.duration_days,
            )
            .mandatory(e.is_mandatory)
            .parallel(e.allow_parallel)
        })
        .collect();
    renumber_display_order(&mut phases);
    phases
}

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

/// Listing row for a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetSummary {
    pub cycle_type: CycleType,
    pub label: &'static str,
    pub phase_count: usize,
    /// End of the last phase in offset-day space.
    pub total_days: DayOffset,
}

impl From<CycleType> for PresetSummary {
    fn from(cycle_type: CycleType) -> Self {
        let entries = preset_entries(cycle_type);
        Self {
            cycle_type,
            label: cycle_type.label(),
            phase_count: entries.len(),
            total_days: entries
                .iter()
                .map(|e| DayOffset::from(e.start_offset_days) + DayOffset::from(e.duration_days))
                .max()
                .unwrap_or(0),
        }
    }
}

pub fn preset_summaries() -> Vec<PresetSummary> {
    CycleType::ALL.into_iter().map(PresetSummary::from).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::validate_timeline_phases;
    use crate::suggested_order::is_in_suggested_order;
    use crate::timeline_validation::validate_phase_timeline;
    use assert_matches::assert_matches;

    #[test]
    fn from_slug_round_trips() {
        for c in CycleType::ALL {
            assert_eq!(CycleType::from_slug(c.as_str()).unwrap(), c);
        }
    }

    #[test]
    fn from_slug_unknown_is_not_found() {
        assert_matches!(
            CycleType::from_slug("monthly"),
            Err(CoreError::NotFound { entity: "CycleType", ref key }) if key == "monthly"
        );
    }

    #[test]
    fn every_preset_has_no_overlap_issues() {
        for c in CycleType::ALL {
            let result = validate_phase_timeline(&generate_preset_phases(c));
            assert!(result.valid, "{c:?} preset has issues: {:?}", result.issues);
        }
    }

    #[test]
    fn every_preset_passes_field_validation() {
        for c in CycleType::ALL {
            assert!(validate_timeline_phases(&generate_preset_phases(c)).is_ok());
        }
    }

    #[test]
    fn every_preset_follows_lifecycle_order() {
        for c in CycleType::ALL {
            assert!(is_in_suggested_order(&generate_preset_phases(c)), "{c:?}");
        }
    }

    #[test]
    fn generated_phases_are_numbered_and_labelled() {
        let phases = generate_preset_phases(CycleType::Quarterly);
        let orders: Vec<_> = phases.iter().map(|p| p.display_order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5]);
        assert_eq!(phases[0].display_name, "Goal Setting");
        assert!(phases[0].is_mandatory);
    }

    #[test]
    fn generation_assigns_fresh_ids() {
        let a = generate_preset_phases(CycleType::Annual);
        let b = generate_preset_phases(CycleType::Annual);
        assert!(a.iter().zip(&b).all(|(x, y)| x.id != y.id));
    }

    #[test]
    fn annual_spans_a_year() {
        let summary = PresetSummary::from(CycleType::Annual);
        assert_eq!(summary.total_days, 365);
        assert_eq!(summary.phase_count, 8);
    }

    #[test]
    fn summaries_cover_every_cycle_type() {
        assert_eq!(preset_summaries().len(), CycleType::ALL.len());
    }
}
