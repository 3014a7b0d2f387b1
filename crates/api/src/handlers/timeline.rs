//! Handlers for the `/timelines` resource.
//!
//! Stateless previews over a caller-supplied phase list: date calculation,
//! validation, suggested ordering, explicit reordering and gantt layout.
//! Incoming phases are field-validated before any core function runs, and
//! are processed in `display_order` sequence.

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use appraisal_core::calculator::{calculate_all_phase_dates, PhaseWithDates};
use appraisal_core::phase::{validate_timeline_phases, Phase};
use appraisal_core::reorder::{apply_order, renumber_display_order, sort_by_display_order};
use appraisal_core::span::{timeline_span, TimelineSpan};
use appraisal_core::suggested_order::{get_suggested_phase_order, is_in_suggested_order};
use appraisal_core::timeline_validation::{validate_phase_timeline, TimelineValidation};
use appraisal_core::types::PhaseId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ── Request / response bodies ────────────────────────────────────────

/// Request body carrying only a phase list.
#[derive(Debug, Deserialize)]
pub struct TimelineRequest {
    pub phases: Vec<Phase>,
}

/// Request body for the date calculation endpoint.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub cycle_start_date: NaiveDate,
    pub phases: Vec<Phase>,
}

/// Request body for the reorder endpoint.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub phases: Vec<Phase>,
    /// Every phase id exactly once, in the desired order.
    pub order: Vec<PhaseId>,
}

#[derive(Debug, Serialize)]
pub struct SuggestedOrderResponse {
    /// Whether the submitted order already matched the suggestion.
    pub already_in_suggested_order: bool,
    /// Phases in suggested order with display orders renumbered from 1.
    pub phases: Vec<Phase>,
}

// ── Helpers ──────────────────────────────────────────────────────────

/// Validate request phases and return them sorted by display order.
fn prepare_phases(state: &AppState, phases: &[Phase]) -> AppResult<Vec<Phase>> {
    let max = state.config.max_timeline_phases;
    if phases.len() > max {
        return Err(AppError::BadRequest(format!(
            "Timeline has {} phases; at most {max} are accepted",
            phases.len()
        )));
    }
    validate_timeline_phases(phases)?;
    Ok(sort_by_display_order(phases))
}

/// Like [`prepare_phases`] but drops soft-disabled phases.
fn prepare_active_phases(state: &AppState, phases: &[Phase]) -> AppResult<Vec<Phase>> {
    let mut prepared = prepare_phases(state, phases)?;
    prepared.retain(|p| p.is_active);
    Ok(prepared)
}

// ── Handlers ─────────────────────────────────────────────────────────

/// POST /api/v1/timelines/calculate
///
/// Resolve every phase against `cycle_start_date`. Inactive phases are
/// included so the UI can still show where they would fall.
pub async fn calculate_dates(
    State(state): State<AppState>,
    Json(body): Json<CalculateRequest>,
) -> AppResult<Json<DataResponse<Vec<PhaseWithDates>>>> {
    let phases = prepare_phases(&state, &body.phases)?;
    let dated = calculate_all_phase_dates(&phases, body.cycle_start_date);

    tracing::debug!(
        phase_count = dated.len(),
        cycle_start_date = %body.cycle_start_date,
        "Calculated phase dates"
    );

    Ok(Json(DataResponse { data: dated }))
}

/// POST /api/v1/timelines/validate
///
/// Validate the active phases. Always 200 for well-formed input; blocking
/// problems are reported through `valid` and `issues`.
pub async fn validate_timeline(
    State(state): State<AppState>,
    Json(body): Json<TimelineRequest>,
) -> AppResult<Json<DataResponse<TimelineValidation>>> {
    let phases = prepare_active_phases(&state, &body.phases)?;
    let result = validate_phase_timeline(&phases);

    tracing::debug!(
        phase_count = phases.len(),
        issue_count = result.issues.len(),
        warning_count = result.warnings.len(),
        valid = result.valid,
        "Validated timeline"
    );

    Ok(Json(DataResponse { data: result }))
}

/// POST /api/v1/timelines/suggested-order
///
/// Propose the canonical lifecycle order. Nothing is persisted; the caller
/// decides whether to keep the result.
pub async fn suggested_order(
    State(state): State<AppState>,
    Json(body): Json<TimelineRequest>,
) -> AppResult<Json<DataResponse<SuggestedOrderResponse>>> {
    let phases = prepare_phases(&state, &body.phases)?;
    let already_in_suggested_order = is_in_suggested_order(&phases);

    let mut suggested = get_suggested_phase_order(&phases);
    renumber_display_order(&mut suggested);

    tracing::debug!(
        phase_count = suggested.len(),
        already_in_suggested_order,
        "Computed suggested phase order"
    );

    Ok(Json(DataResponse {
        data: SuggestedOrderResponse {
            already_in_suggested_order,
            phases: suggested,
        },
    }))
}

/// POST /api/v1/timelines/reorder
///
/// Apply an explicit id permutation (e.g. from drag-and-drop) and return
/// the phases with contiguous display orders.
pub async fn reorder(
    State(state): State<AppState>,
    Json(body): Json<ReorderRequest>,
) -> AppResult<Json<DataResponse<Vec<Phase>>>> {
    let phases = prepare_phases(&state, &body.phases)?;
    let reordered = apply_order(&phases, &body.order)?;

    tracing::debug!(phase_count = reordered.len(), "Applied phase order");

    Ok(Json(DataResponse { data: reordered }))
}

/// POST /api/v1/timelines/span
///
/// Gantt layout of the active phases.
pub async fn span(
    State(state): State<AppState>,
    Json(body): Json<TimelineRequest>,
) -> AppResult<Json<DataResponse<TimelineSpan>>> {
    let phases = prepare_active_phases(&state, &body.phases)?;
    let span = timeline_span(&phases);

    tracing::debug!(
        phase_count = span.bars.len(),
        total_days = span.total_days,
        "Computed timeline span"
    );

    Ok(Json(DataResponse { data: span }))
}
