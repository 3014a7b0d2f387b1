//! The phase record and its field-level invariants.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::phase_type::PhaseType;
use crate::types::{DayOffset, PhaseId};

/// One stage of an appraisal cycle, positioned in offset-day space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Phase {
    pub id: PhaseId,
    pub phase_type: PhaseType,
    #[validate(length(
        min = 1,
        max = 200,
        message = "display name must be between 1 and 200 characters"
    ))]
    pub display_name: String,
    pub display_order: i32,
    pub start_offset_days: u32,
    #[validate(range(min = 1, message = "duration must be at least one day"))]
    pub duration_days: u32,
    #[serde(default)]
    pub is_mandatory: bool,
    #[serde(default)]
    pub allow_parallel: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Phase {
    /// Create a new active phase with a fresh identifier.
    pub fn new(
        phase_type: PhaseType,
        display_name: impl Into<String>,
        display_order: i32,
        start_offset_days: u32,
        duration_days: u32,
    ) -> Self {
        Self {
            id: PhaseId::now_v7(),
            phase_type,
            display_name: display_name.into(),
            display_order,
            start_offset_days,
            duration_days,
            is_mandatory: false,
            allow_parallel: false,
            is_active: true,
        }
    }

    pub fn mandatory(mut self, is_mandatory: bool) -> Self {
        self.is_mandatory = is_mandatory;
        self
    }

    pub fn parallel(mut self, allow_parallel: bool) -> Self {
        self.allow_parallel = allow_parallel;
        self
    }

    pub fn start_offset(&self) -> DayOffset {
        DayOffset::from(self.start_offset_days)
    }

    /// Exclusive end of the phase in offset-day space.
    pub fn end_offset(&self) -> DayOffset {
        self.start_offset() + DayOffset::from(self.duration_days)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate the field invariants of a single phase.
pub fn validate_phase(phase: &Phase) -> Result<(), CoreError> {
    phase.validate().map_err(|e| {
        CoreError::Validation(format!("Phase '{}' is invalid: {e}", phase.display_name))
    })
}

/// Check that no two active phases share a display order.
pub fn validate_display_orders(phases: &[Phase]) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for phase in phases.iter().filter(|p| p.is_active) {
        if !seen.insert(phase.display_order) {
            return Err(CoreError::Validation(format!(
                "Display order {} is used by more than one active phase",
                phase.display_order
            )));
        }
    }
    Ok(())
}

/// Check that no identifier appears twice in a timeline.
pub fn validate_unique_ids(phases: &[Phase]) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for phase in phases {
        if !seen.insert(phase.id) {
            return Err(CoreError::Validation(format!(
                "Phase id {} appears more than once",
                phase.id
            )));
        }
    }
    Ok(())
}

/// Validate every phase plus the timeline-wide uniqueness constraints.
///
/// The calculator and validator never call this; it is for callers that
/// accept phases from outside (request bodies, imports).
pub fn validate_timeline_phases(phases: &[Phase]) -> Result<(), CoreError> {
    for phase in phases {
        validate_phase(phase)?;
    }
    validate_unique_ids(phases)?;
    validate_display_orders(phases)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn phase(order: i32, offset: u32, duration: u32) -> Phase {
        Phase::new(PhaseType::Custom, format!("Phase {order}"), order, offset, duration)
    }

    #[test]
    fn new_assigns_distinct_ids() {
        let a = phase(1, 0, 10);
        let b = phase(2, 10, 10);
        assert_ne!(a.id, b.id);
        assert!(a.is_active);
        assert!(!a.is_mandatory);
        assert!(!a.allow_parallel);
    }

    #[test]
    fn end_offset_does_not_overflow() {
        let p = phase(1, u32::MAX, u32::MAX);
        assert_eq!(p.end_offset(), u64::from(u32::MAX) * 2);
    }

    // -- validate_phase --

    #[test]
    fn valid_phase_passes() {
        assert!(validate_phase(&phase(1, 0, 1)).is_ok());
    }

    #[test]
    fn zero_duration_rejected() {
        let err = validate_phase(&phase(1, 0, 0)).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg.contains("duration"));
    }

    #[test]
    fn empty_name_rejected() {
        let mut p = phase(1, 0, 5);
        p.display_name = String::new();
        assert_matches!(validate_phase(&p), Err(CoreError::Validation(_)));
    }

    #[test]
    fn overlong_name_rejected() {
        let mut p = phase(1, 0, 5);
        p.display_name = "x".repeat(201);
        assert_matches!(validate_phase(&p), Err(CoreError::Validation(_)));
    }

    // -- validate_display_orders --

    #[test]
    fn duplicate_display_order_rejected() {
        let phases = vec![phase(1, 0, 5), phase(1, 5, 5)];
        let err = validate_display_orders(&phases).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg.contains("Display order 1"));
    }

    #[test]
    fn inactive_phase_may_share_display_order() {
        let mut retired = phase(1, 5, 5);
        retired.is_active = false;
        let phases = vec![phase(1, 0, 5), retired];
        assert!(validate_display_orders(&phases).is_ok());
    }

    // -- validate_timeline_phases --

    #[test]
    fn duplicate_id_rejected() {
        let a = phase(1, 0, 5);
        let mut b = phase(2, 5, 5);
        b.id = a.id;
        assert_matches!(
            validate_timeline_phases(&[a, b]),
            Err(CoreError::Validation(ref msg)) if msg.contains("more than once")
        );
    }

    #[test]
    fn empty_timeline_is_valid() {
        assert!(validate_timeline_phases(&[]).is_ok());
    }

    // -- serde --

    #[test]
    fn deserialize_defaults_flags() {
        let json = serde_json::json!({
            "id": "0192f0c1-5a3e-7d2a-9b4f-1c2d3e4f5a6b",
            "phase_type": "goal_setting",
            "display_name": "Goals",
            "display_order": 1,
            "start_offset_days": 0,
            "duration_days": 14
        });
        let p: Phase = serde_json::from_value(json).unwrap();
        assert!(p.is_active);
        assert!(!p.is_mandatory);
        assert!(!p.allow_parallel);
    }

    #[test]
    fn deserialize_rejects_negative_offset() {
        let json = serde_json::json!({
            "id": "0192f0c1-5a3e-7d2a-9b4f-1c2d3e4f5a6b",
            "phase_type": "goal_setting",
            "display_name": "Goals",
            "display_order": 1,
            "start_offset_days": -3,
            "duration_days": 14
        });
        assert!(serde_json::from_value::<Phase>(json).is_err());
    }
}
