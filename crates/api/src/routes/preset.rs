//! Route definitions for cycle presets.
//!
//! Mounted at `/presets` by `api_routes()`.
//!
//! ```text
//! GET    /                              list_presets
//! POST   /{cycle_type}/generate         generate_preset (?cycle_start_date)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::preset;
use crate::state::AppState;

/// Preset routes, mounted at `/presets`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(preset::list_presets))
        .route("/{cycle_type}/generate", post(preset::generate_preset))
}
