//! Local browser UI and JSON API for leaf disease recognition.
//!
//! ## Pages
//!
//! - `GET /` - Home
//! - `GET /about` - Dataset and class list
//! - `GET /recognize` - Upload form
//! - `POST /recognize` - Multipart upload (field `image`), renders the prediction
//!
//! ## API
//!
//! - `POST /api/predict` - Multipart upload (field `image`), returns a `PredictionResult`
//! - `GET /api/labels` - The 38 class labels
//! - `GET /api/health` - Liveness and model status
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use leafscan_ai::{ModelCache, ScoreModel, InferenceError};
//! use leafscan_web::{AppState, create_router};
//!
//! let models = ModelCache::new(Arc::new(|| -> Result<Arc<dyn ScoreModel>, InferenceError> {
//!     Err(InferenceError::ArtifactMissing("model.onnx".into()))
//! }));
//! let router = create_router(AppState::new(models, 10 * 1024 * 1024));
//! ```

mod error;
mod markup;
mod routes;
mod state;
mod upload;
mod views;

pub use error::WebError;
pub use markup::inline_markdown;
pub use routes::create_router;
pub use state::AppState;
pub use upload::IMAGE_FIELD;
