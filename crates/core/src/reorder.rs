//! Display-order bookkeeping.
//!
//! Order is an explicit list of phase ids. Applying it yields the phases in
//! that sequence with contiguous display orders starting at 1.

use std::collections::{HashMap, HashSet};

use crate::error::CoreError;
use crate::phase::Phase;
use crate::types::PhaseId;

/// First display order assigned by [`renumber_display_order`].
pub const FIRST_DISPLAY_ORDER: i32 = 1;

/// Return a copy of `phases` sorted by `display_order` (stable).
pub fn sort_by_display_order(phases: &[Phase]) -> Vec<Phase> {
    let mut sorted = phases.to_vec();
    sorted.sort_by_key(|p| p.display_order);
    sorted
}

/// Assign display orders `1..=n` to `phases` in their current sequence.
pub fn renumber_display_order(phases: &mut [Phase]) {
    for (order, phase) in (FIRST_DISPLAY_ORDER..).zip(phases.iter_mut()) {
        phase.display_order = order;
    }
}

/// Rearrange `phases` to follow `order` and renumber them.
///
/// `order` must be a permutation of the phase ids: same length, every id
/// known, none repeated.
pub fn apply_order(phases: &[Phase], order: &[PhaseId]) -> Result<Vec<Phase>, CoreError> {
    if order.len() != phases.len() {
        return Err(CoreError::Validation(format!(
            "Order lists {} phases but the timeline has {}",
            order.len(),
            phases.len()
        )));
    }

    let by_id: HashMap<PhaseId, &Phase> = phases.iter().map(|p| (p.id, p)).collect();
    let mut seen = HashSet::with_capacity(order.len());
    let mut reordered = Vec::with_capacity(order.len());

    for id in order {
        if !seen.insert(*id) {
            return Err(CoreError::Validation(format!(
                "Phase id {id} appears more than once in the order"
            )));
        }
        let phase = by_id.get(id).ok_or_else(|| {
            CoreError::Validation(format!("Phase id {id} is not part of this timeline"))
        })?;
        reordered.push((*phase).clone());
    }

    renumber_display_order(&mut reordered);
    Ok(reordered)
}
