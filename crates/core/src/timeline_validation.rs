//! Structural validation of a phase timeline.
//!
//! Reports problems without fixing them. Overlaps between phases that do not
//! allow parallel execution are blocking issues. Out-of-order starts and gaps
//! after the latest end reached so far are advisory warnings. Callers decide
//! whether either blocks a save.

use serde::Serialize;

use crate::phase::Phase;

/// Outcome of validating a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineValidation {
    /// `true` iff `issues` is empty. Warnings do not affect it.
    pub valid: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl TimelineValidation {
    fn from_findings(issues: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: issues.is_empty(),
            issues,
            warnings,
        }
    }
}

/// Whether two phases' `[start, end)` intervals intersect.
///
/// Touching intervals (one ends on the day the other starts) do not overlap.
pub fn phases_overlap(a: &Phase, b: &Phase) -> bool {
    !(a.end_offset() <= b.start_offset() || b.end_offset() <= a.start_offset())
}

/// Validate a timeline given in display order.
///
/// Every unordered pair is checked for overlap, which is quadratic in the
/// phase count; timelines are small.
pub fn validate_phase_timeline(phases: &[Phase]) -> TimelineValidation {
    let mut issues = Vec::new();

    for (i, a) in phases.iter().enumerate() {
        for b in &phases[i + 1..] {
            if a.allow_parallel || b.allow_parallel {
                continue;
            }
            if phases_overlap(a, b) {
                issues.push(format!(
                    "'{}' (days {}-{}) overlaps with '{}' (days {}-{})",
                    a.display_name,
                    a.start_offset(),
                    a.end_offset(),
                    b.display_name,
                    b.start_offset(),
                    b.end_offset(),
                ));
            }
        }
    }

    let mut warnings = Vec::new();

    // Latest end seen so far and the phase that set it. A gap only exists
    // once every earlier phase has finished.
    let mut coverage: Option<&Phase> = None;

    for (i, next) in phases.iter().enumerate() {
        if let Some(prev) = i.checked_sub(1).map(|j| &phases[j]) {
            if next.start_offset() < prev.start_offset() {
                warnings.push(format!(
                    "'{}' starts on day {} before the preceding phase '{}' (day {})",
                    next.display_name,
                    next.start_offset(),
                    prev.display_name,
                    prev.start_offset(),
                ));
            }
        }

        if let Some(latest) = coverage {
            if next.start_offset() > latest.end_offset() {
                warnings.push(format!(
                    "Gap of {} days between '{}' and '{}'",
                    next.start_offset() - latest.end_offset(),
                    latest.display_name,
                    next.display_name,
                ));
            }
        }

        if coverage.map_or(true, |latest| next.end_offset() > latest.end_offset()) {
            coverage = Some(next);
        }
    }

    TimelineValidation::from_findings(issues, warnings)
}
