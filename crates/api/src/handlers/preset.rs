//! Handlers for the `/presets` resource.

use axum::extract::{Path, Query};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use appraisal_core::calculator::{calculate_all_phase_dates, PhaseWithDates};
use appraisal_core::phase::Phase;
use appraisal_core::preset::{generate_preset_phases, preset_summaries, CycleType, PresetSummary};
use appraisal_core::timeline_validation::{validate_phase_timeline, TimelineValidation};

use crate::error::AppResult;
use crate::response::DataResponse;

/// Query parameters for preset generation.
#[derive(Debug, Deserialize)]
pub struct GeneratePresetParams {
    /// When present, the response also carries calculated dates.
    pub cycle_start_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct GeneratedPreset {
    pub cycle_type: CycleType,
    pub phases: Vec<Phase>,
    pub validation: TimelineValidation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<PhaseWithDates>>,
}

/// GET /api/v1/presets
pub async fn list_presets() -> Json<DataResponse<Vec<PresetSummary>>> {
    Json(DataResponse {
        data: preset_summaries(),
    })
}

/// POST /api/v1/presets/{cycle_type}/generate?cycle_start_date=YYYY-MM-DD
///
/// Generate fresh phases for a cycle type. Returns 404 for an unknown
/// cycle type.
pub async fn generate_preset(
    Path(cycle_type): Path<String>,
    Query(params): Query<GeneratePresetParams>,
) -> AppResult<Json<DataResponse<GeneratedPreset>>> {
    let cycle_type = CycleType::from_slug(&cycle_type)?;
    let phases = generate_preset_phases(cycle_type);
    let validation = validate_phase_timeline(&phases);
    let dates = params
        .cycle_start_date
        .map(|start| calculate_all_phase_dates(&phases, start));

    tracing::info!(
        cycle_type = cycle_type.as_str(),
        phase_count = phases.len(),
        "Generated preset phases"
    );

    Ok(Json(DataResponse {
        data: GeneratedPreset {
            cycle_type,
            phases,
            validation,
            dates,
        },
    }))
}
