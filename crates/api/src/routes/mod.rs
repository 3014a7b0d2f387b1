pub mod health;
pub mod preset;
pub mod timeline;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /phase-types                                     phase type metadata (GET)
///
/// /presets                                         list cycle presets (GET)
/// /presets/{cycle_type}/generate                   generate preset phases (POST)
///
/// /timelines/calculate                             calculate phase dates (POST)
/// /timelines/validate                              validate timeline (POST)
/// /timelines/suggested-order                       suggested lifecycle order (POST)
/// /timelines/reorder                               apply explicit order (POST)
/// /timelines/span                                  gantt layout (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/phase-types", get(handlers::phase_type::list_phase_types))
        .nest("/presets", preset::router())
        .nest("/timelines", timeline::router())
}
