//! Image → class index, plus the process-wide model cache.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use image::DynamicImage;
use leafscan_core::{CLASS_COUNT, PredictionResult};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::error::InferenceError;
use crate::model::{ScoreModel, argmax};
use crate::preprocess::{decode_image, to_input_tensor};

/// Winning class of a single forward pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub index: usize,
    pub score: f32,
}

impl Prediction {
    /// Resolve the index into a name and advisory text.
    pub fn into_result(self) -> PredictionResult {
        PredictionResult::from_index(self.index as i64, self.score)
    }
}

/// Runs preprocessing, one forward pass, and argmax.
pub struct Predictor {
    model: Arc<dyn ScoreModel>,
    class_count: usize,
}

impl Predictor {
    pub fn new(model: Arc<dyn ScoreModel>) -> Self {
        Self {
            model,
            class_count: CLASS_COUNT,
        }
    }

    pub fn class_count(&self) -> usize {
        self.class_count
    }

    pub fn predict_image(&self, image: &DynamicImage) -> Result<Prediction, InferenceError> {
        let start = Instant::now();
        let input = to_input_tensor(image);
        let scores = self.model.scores(&input)?;

        if scores.len() != self.class_count {
            return Err(InferenceError::ArtifactIncompatible(format!(
                "model returned {} scores, expected {}",
                scores.len(),
                self.class_count
            )));
        }

        let (index, score) = argmax(&scores).ok_or(InferenceError::EmptyOutput)?;
        debug!(
            index,
            score,
            width = image.width(),
            height = image.height(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "prediction"
        );
        Ok(Prediction { index, score })
    }

    pub fn predict_bytes(&self, bytes: &[u8]) -> Result<Prediction, InferenceError> {
        let image = decode_image(bytes)?;
        self.predict_image(&image)
    }

    pub fn predict_path(&self, path: &Path) -> Result<Prediction, InferenceError> {
        let bytes = std::fs::read(path)
            .map_err(|e| InferenceError::Decode(format!("read {}: {e}", path.display())))?;
        self.predict_bytes(&bytes)
    }
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictor")
            .field("model", &self.model.describe())
            .field("class_count", &self.class_count)
            .finish()
    }
}

/// Builds the model on first use.
pub type ModelLoader = Arc<dyn Fn() -> Result<Arc<dyn ScoreModel>, InferenceError> + Send + Sync>;

/// Lazily loaded, process-wide [`Predictor`].
///
/// The first successful load is kept for the life of the process. A failed
/// load is returned to the caller and retried on the next call.
pub struct ModelCache {
    loader: ModelLoader,
    predictor: OnceCell<Arc<Predictor>>,
}

impl ModelCache {
    pub fn new(loader: ModelLoader) -> Self {
        Self {
            loader,
            predictor: OnceCell::new(),
        }
    }

    /// A cache that is already populated.
    pub fn ready(predictor: Arc<Predictor>) -> Self {
        let loader: ModelLoader = {
            let predictor = Arc::clone(&predictor);
            Arc::new(move || -> Result<Arc<dyn ScoreModel>, InferenceError> {
                Ok(Arc::clone(&predictor.model))
            })
        };
        Self {
            loader,
            predictor: OnceCell::new_with(Some(predictor)),
        }
    }

    /// Cache backed by an ONNX artifact at `path`.
    #[cfg(feature = "onnx")]
    pub fn onnx(path: std::path::PathBuf) -> Self {
        Self::new(Arc::new(move || -> Result<Arc<dyn ScoreModel>, InferenceError> {
            let model = crate::onnx::OnnxModel::load(&path)?;
            Ok(Arc::new(model) as Arc<dyn ScoreModel>)
        }))
    }

    pub fn is_loaded(&self) -> bool {
        self.predictor.initialized()
    }

    /// The shared predictor, loading the model if this is the first call.
    pub async fn get(&self) -> Result<Arc<Predictor>, InferenceError> {
        self.predictor
            .get_or_try_init(|| async {
                let loader = Arc::clone(&self.loader);
                let start = Instant::now();
                let model = tokio::task::spawn_blocking(move || (*loader)())
                    .await
                    .map_err(|e| InferenceError::Runtime(format!("model load task: {e}")))?
                    .inspect_err(|e| warn!(error = %e, "model load failed"))?;
                info!(
                    model = %model.describe(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "model loaded"
                );
                Ok::<_, InferenceError>(Arc::new(Predictor::new(model)))
            })
            .await
            .cloned()
    }
}
