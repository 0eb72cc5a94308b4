//! Inference layer: image preprocessing, the model seam, and ONNX Runtime classification.

mod error;
pub mod model;
pub mod predictor;
pub mod preprocess;

#[cfg(feature = "onnx")]
mod onnx;
#[cfg(feature = "onnx")]
pub use onnx::OnnxModel;

pub use error::InferenceError;
pub use model::{ScoreModel, argmax};
pub use predictor::{ModelCache, ModelLoader, Prediction, Predictor};
pub use preprocess::{CHANNELS, INPUT_SIZE, InputTensor, decode_image, to_input_tensor};
