//! Resolve phase offsets into calendar dates.
//!
//! Date-only arithmetic on [`NaiveDate`]: no timezone, no wall clock. The
//! only reference point is the caller-supplied cycle start date.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::phase::Phase;
use crate::types::DayOffset;

/// A phase annotated with its computed calendar window.
///
/// The end date is exclusive: a one-day phase starting on the 11th ends on
/// the 12th. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseWithDates {
    #[serde(flatten)]
    pub phase: Phase,
    pub calculated_start_date: NaiveDate,
    pub calculated_end_date: NaiveDate,
}

/// Add days to a date, clamping at [`NaiveDate::MAX`] instead of failing.
fn add_days_saturating(date: NaiveDate, days: DayOffset) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

/// Compute the calendar window of a single phase.
pub fn calculate_phase_dates(phase: &Phase, cycle_start_date: NaiveDate) -> PhaseWithDates {
    let start = add_days_saturating(cycle_start_date, phase.start_offset());
    let end = add_days_saturating(start, DayOffset::from(phase.duration_days));
    PhaseWithDates {
        phase: phase.clone(),
        calculated_start_date: start,
        calculated_end_date: end,
    }
}

/// Compute calendar windows for every phase, preserving input order.
pub fn calculate_all_phase_dates(
    phases: &[Phase],
    cycle_start_date: NaiveDate,
) -> Vec<PhaseWithDates> {
    phases
        .iter()
        .map(|phase| calculate_phase_dates(phase, cycle_start_date))
        .collect()
}
