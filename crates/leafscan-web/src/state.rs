use std::sync::Arc;

use axum::body::Bytes;
use leafscan_ai::{InferenceError, ModelCache, Prediction, decode_image};
use leafscan_core::PredictionResult;

/// Shared application state.
pub struct AppState {
    /// The classifier, loaded on first use and shared read-only afterwards.
    pub models: ModelCache,
    /// Maximum accepted request body, in bytes.
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(models: ModelCache, max_upload_bytes: usize) -> Arc<Self> {
        Arc::new(Self {
            models,
            max_upload_bytes,
        })
    }

    /// Decode `bytes`, run the classifier, and resolve the winning class.
    ///
    /// The image is decoded before the model is touched, so a bad upload is
    /// reported as such even when the artifact is unavailable.
    pub async fn predict(&self, bytes: Bytes) -> Result<PredictionResult, InferenceError> {
        let image = tokio::task::spawn_blocking(move || decode_image(&bytes))
            .await
            .map_err(|e| InferenceError::Runtime(format!("decode task: {e}")))??;

        let predictor = self.models.get().await?;

        tokio::task::spawn_blocking(move || predictor.predict_image(&image))
            .await
            .map_err(|e| InferenceError::Runtime(format!("inference task: {e}")))?
            .map(Prediction::into_result)
    }
}
