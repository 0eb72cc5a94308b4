//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// False until the first successful model load.
    pub model_loaded: bool,
    pub classes: usize,
}

/// Handler for GET /api/health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model_loaded: state.models.is_loaded(),
        classes: leafscan_core::CLASS_COUNT,
    })
}
