//! JSON endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use leafscan_core::{ClassLabel, LabelSet, PredictionResult};
use serde::Serialize;
use tracing::info;

use crate::error::WebError;
use crate::state::AppState;
use crate::upload::Upload;

/// Handler for POST /api/predict
pub async fn predict_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<PredictionResult>, WebError> {
    let upload = Upload::from_multipart(multipart).await?;
    let size = upload.bytes.len();
    let result = state.predict(upload.bytes).await?;
    info!(
        class_index = result.class_index,
        class_name = result.class_name,
        bytes = size,
        "api prediction"
    );
    Ok(Json(result))
}

#[derive(Debug, Serialize)]
pub struct LabelEntry {
    pub index: usize,
    #[serde(flatten)]
    pub label: ClassLabel,
}

/// Handler for GET /api/labels
pub async fn labels_handler() -> Json<Vec<LabelEntry>> {
    let labels = LabelSet::plant_village();
    let entries = (0..labels.len())
        .filter_map(|index| labels.label(index).map(|label| LabelEntry { index, label }))
        .collect();
    Json(entries)
}
