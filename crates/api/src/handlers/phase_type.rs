use axum::Json;

use appraisal_core::phase_type::{all_phase_type_info, PhaseTypeInfo};

use crate::response::DataResponse;

/// GET /api/v1/phase-types
///
/// The phase type metadata table in canonical lifecycle order.
pub async fn list_phase_types() -> Json<DataResponse<Vec<PhaseTypeInfo>>> {
    Json(DataResponse {
        data: all_phase_type_info(),
    })
}
