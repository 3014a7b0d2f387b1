//! Phase type enumeration and its metadata table.
//!
//! The phase type only drives display defaults (label, icon, default
//! duration) and the canonical lifecycle rank used by the suggested-order
//! heuristic. It carries no scheduling behavior of its own.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Phase type
// ---------------------------------------------------------------------------

/// The stages an appraisal cycle can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseType {
    GoalSetting,
    SelfAssessment,
    ManagerReview,
    FeedbackCollection,
    Calibration,
    HrReview,
    Finalization,
    Acknowledgment,
    /// User-defined phase with no canonical lifecycle position.
    Custom,
}

/// Rank given to phase types outside the canonical lifecycle.
///
/// Sorts after every ranked type.
pub const TERMINAL_RANK: u8 = u8::MAX;

impl PhaseType {
    /// Every phase type, in canonical lifecycle order.
    pub const ALL: [PhaseType; 9] = [
        Self::GoalSetting,
        Self::SelfAssessment,
        Self::FeedbackCollection,
        Self::ManagerReview,
        Self::Calibration,
        Self::HrReview,
        Self::Finalization,
        Self::Acknowledgment,
        Self::Custom,
    ];

    /// Parse a phase type string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid phase type '{s}'. Must be one of: {}",
                    valid.join(", ")
                ))
            })
    }

    /// Convert to a database-compatible string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalSetting => "goal_setting",
            Self::SelfAssessment => "self_assessment",
            Self::ManagerReview => "manager_review",
            Self::FeedbackCollection => "feedback_collection",
            Self::Calibration => "calibration",
            Self::HrReview => "hr_review",
            Self::Finalization => "finalization",
            Self::Acknowledgment => "acknowledgment",
            Self::Custom => "custom",
        }
    }

    /// Human-readable label, used as the default display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::GoalSetting => "Goal Setting",
            Self::SelfAssessment => "Self Assessment",
            Self::ManagerReview => "Manager Review",
            Self::FeedbackCollection => "Feedback Collection",
            Self::Calibration => "Calibration",
            Self::HrReview => "HR Review",
            Self::Finalization => "Finalization",
            Self::Acknowledgment => "Acknowledgment",
            Self::Custom => "Custom Phase",
        }
    }

    /// Icon name rendered next to the phase in timeline views.
    pub fn icon(self) -> &'static str {
        match self {
            Self::GoalSetting => "target",
            Self::SelfAssessment => "user-check",
            Self::ManagerReview => "clipboard-check",
            Self::FeedbackCollection => "message-square",
            Self::Calibration => "scale",
            Self::HrReview => "shield-check",
            Self::Finalization => "flag",
            Self::Acknowledgment => "check-circle",
            Self::Custom => "circle",
        }
    }

    /// Duration offered when a phase of this type is added manually.
    pub fn default_duration_days(self) -> u32 {
        match self {
            Self::GoalSetting
            | Self::SelfAssessment
            | Self::ManagerReview
            | Self::FeedbackCollection => 14,
            Self::Calibration
            | Self::HrReview
            | Self::Finalization
            | Self::Acknowledgment
            | Self::Custom => 7,
        }
    }

    /// Position in the canonical lifecycle (lower sorts earlier).
    pub fn canonical_rank(self) -> u8 {
        match self {
            Self::GoalSetting => 1,
            Self::SelfAssessment => 2,
            Self::FeedbackCollection => 3,
            Self::ManagerReview => 4,
            Self::Calibration => 5,
            Self::HrReview => 6,
            Self::Finalization => 7,
            Self::Acknowledgment => 8,
            Self::Custom => TERMINAL_RANK,
        }
    }
}

// ---------------------------------------------------------------------------
// Metadata table
// ---------------------------------------------------------------------------

/// Display metadata for one phase type, as served to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseTypeInfo {
    pub phase_type: PhaseType,
    pub label: &'static str,
    pub icon: &'static str,
    pub default_duration_days: u32,
    pub canonical_rank: u8,
}

impl From<PhaseType> for PhaseTypeInfo {
    fn from(phase_type: PhaseType) -> Self {
        Self {
            phase_type,
            label: phase_type.label(),
            icon: phase_type.icon(),
            default_duration_days: phase_type.default_duration_days(),
            canonical_rank: phase_type.canonical_rank(),
        }
    }
}

/// The full metadata table in canonical lifecycle order.
pub fn all_phase_type_info() -> Vec<PhaseTypeInfo> {
    PhaseType::ALL.into_iter().map(PhaseTypeInfo::from).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
