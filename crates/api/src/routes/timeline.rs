//! Route definitions for timeline previews.
//!
//! Mounted at `/timelines` by `api_routes()`. Every endpoint is stateless
//! and takes the phase list in the request body.
//!
//! ```text
//! POST   /calculate                     calculate_dates
//! POST   /validate                      validate_timeline
//! POST   /suggested-order               suggested_order
//! POST   /reorder                       reorder
//! POST   /span                          span
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::timeline;
use crate::state::AppState;

/// Timeline routes, mounted at `/timelines`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(timeline::calculate_dates))
        .route("/validate", post(timeline::validate_timeline))
        .route("/suggested-order", post(timeline::suggested_order))
        .route("/reorder", post(timeline::reorder))
        .route("/span", post(timeline::span))
}
