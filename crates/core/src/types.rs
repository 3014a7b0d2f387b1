/// Phase identifiers are UUID v7, assigned once at creation.
pub type PhaseId = uuid::Uuid;

/// A position in offset-day space (day 0 is the cycle start date).
///
/// Phase ends are computed in `u64` so `start + duration` cannot overflow
/// for any pair of `u32` inputs.
pub type DayOffset = u64;
