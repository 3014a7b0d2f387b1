#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use appraisal_api::config::ServerConfig;
use appraisal_api::router::build_app_router;
use appraisal_api::state::AppState;
use appraisal_core::phase::Phase;
use appraisal_core::phase_type::PhaseType;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and a small phase cap so the limit is easy
/// to exceed.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_timeline_phases: 20,
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A custom phase with the given name and position.
pub fn phase(name: &str, order: i32, offset: u32, duration: u32) -> Phase {
    Phase::new(PhaseType::Custom, name, order, offset, duration)
}

pub fn typed(phase_type: PhaseType, order: i32, offset: u32, duration: u32) -> Phase {
    Phase::new(phase_type, phase_type.label(), order, offset, duration)
}

pub fn phases_json(phases: &[Phase]) -> serde_json::Value {
    serde_json::to_value(phases).unwrap()
}
