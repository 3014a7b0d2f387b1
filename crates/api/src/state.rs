use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. The service holds no persistence; every request
/// carries the phases it operates on.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}
