//! ONNX Runtime backend for the leaf classifier.
//!
//! Expects an export of the trained Keras model: input `[N, 128, 128, 3]` f32
//! (NHWC, raw pixel values), output `[N, 38]` f32.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use leafscan_core::CLASS_COUNT;
use ort::session::Session;
use ort::value::{Tensor, ValueType};
use tracing::info;

use crate::error::InferenceError;
use crate::model::ScoreModel;
use crate::preprocess::{CHANNELS, INPUT_SIZE, InputTensor};

/// Leaf classifier session.
///
/// `Session::run` needs `&mut self`, so the session sits behind a mutex; the
/// model itself is loaded once and never reloaded.
pub struct OnnxModel {
    session: Mutex<Session>,
    path: PathBuf,
}

impl OnnxModel {
    /// Load and validate the artifact at `path`.
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        if !path.is_file() {
            return Err(InferenceError::ArtifactMissing(path.to_path_buf()));
        }

        let session = build_session(path).map_err(|e| {
            InferenceError::ArtifactIncompatible(format!("{}: {e}", path.display()))
        })?;

        if let Some(shape) = session.inputs().first().and_then(|i| tensor_shape(i.dtype())) {
            check_input_shape(&shape)?;
        }
        if let Some(shape) = session.outputs().first().and_then(|o| tensor_shape(o.dtype())) {
            check_output_shape(&shape)?;
        }

        info!(model = %path.display(), "loaded leaf classifier");
        Ok(Self {
            session: Mutex::new(session),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Debug for OnnxModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnnxModel").field("path", &self.path).finish()
    }
}

impl ScoreModel for OnnxModel {
    fn scores(&self, input: &InputTensor) -> Result<Vec<f32>, InferenceError> {
        let shape = input.shape().map(|d| d as i64);
        let tensor = Tensor::from_array((shape, input.as_slice().to_vec().into_boxed_slice()))
            .map_err(|e| InferenceError::Runtime(format!("build input tensor: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| InferenceError::Runtime("session lock poisoned".into()))?;

        let outputs = session
            .run(ort::inputs![tensor])
            .map_err(|e| InferenceError::Runtime(e.to_string()))?;

        // Output: [1, classes].
        let (_, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Runtime(format!("extract scores: {e}")))?;

        Ok(data.to_vec())
    }

    fn describe(&self) -> String {
        format!("onnx:{}", self.path.display())
    }
}

fn build_session(path: &Path) -> Result<Session, String> {
    Session::builder()
        .map_err(|e| e.to_string())?
        .commit_from_file(path)
        .map_err(|e| e.to_string())
}

/// Input must be `[N, 128, 128, 3]`; dynamic (negative) axes match anything.
fn check_input_shape(shape: &[i64]) -> Result<(), InferenceError> {
    let expected = [INPUT_SIZE as i64, INPUT_SIZE as i64, CHANNELS as i64];
    let ok = shape.len() == 4
        && shape[1..]
            .iter()
            .zip(expected)
            .all(|(&got, want)| got < 0 || got == want);
    if ok {
        Ok(())
    } else {
        Err(InferenceError::ArtifactIncompatible(format!(
            "input shape {shape:?}, expected [N, 128, 128, 3]"
        )))
    }
}

/// The last output axis must hold one score per class.
fn check_output_shape(shape: &[i64]) -> Result<(), InferenceError> {
    match shape.last() {
        Some(&classes) if classes > 0 && classes as usize != CLASS_COUNT => {
            Err(InferenceError::ArtifactIncompatible(format!(
                "model has {classes} output classes, expected {CLASS_COUNT}"
            )))
        }
        _ => Ok(()),
    }
}

/// Declared dimensions of a tensor input/output; `-1` marks a dynamic axis.
fn tensor_shape(value_type: &ValueType) -> Option<Vec<i64>> {
    match value_type {
        ValueType::Tensor { shape, .. } => Some(shape.iter().copied().collect()),
        _ => None,
    }
}
