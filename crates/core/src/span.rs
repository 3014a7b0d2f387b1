//! Gantt-style layout of a timeline.
//!
//! Positions every phase as a bar whose offset and width are fractions of
//! the whole timeline, so a renderer only has to scale to its own width.

use serde::Serialize;

use crate::phase::Phase;
use crate::types::{DayOffset, PhaseId};

/// One phase's bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseBar {
    pub phase_id: PhaseId,
    pub display_name: String,
    pub start_offset_days: DayOffset,
    pub end_offset_days: DayOffset,
    /// Start as a fraction of `total_days`, in `[0, 1]`.
    pub offset_fraction: f64,
    /// Length as a fraction of `total_days`, in `[0, 1]`.
    pub width_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSpan {
    /// Latest phase end in offset-day space; 0 for an empty timeline.
    pub total_days: DayOffset,
    pub bars: Vec<PhaseBar>,
}

/// Lay out `phases` (input order preserved) against their combined extent.
pub fn timeline_span(phases: &[Phase]) -> TimelineSpan {
    let total_days = phases.iter().map(Phase::end_offset).max().unwrap_or(0);

    let fraction = |days: DayOffset| {
        if total_days == 0 {
            0.0
        } else {
            days as f64 / total_days as f64
        }
    };

    let bars = phases
        .iter()
        .map(|p| PhaseBar {
            phase_id: p.id,
            display_name: p.display_name.clone(),
            start_offset_days: p.start_offset(),
            end_offset_days: p.end_offset(),
            offset_fraction: fraction(p.start_offset()),
            width_fraction: fraction(DayOffset::from(p.duration_days)),
        })
        .collect();

    TimelineSpan { total_days, bars }
}
