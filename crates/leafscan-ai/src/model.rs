//! The seam between preprocessing and an inference runtime.

use crate::error::InferenceError;
use crate::preprocess::InputTensor;

/// A classifier that maps a preprocessed batch of one to per-class scores.
///
/// Implementations are loaded once and shared read-only across requests.
pub trait ScoreModel: Send + Sync {
    /// Scores for the single image in `input`, one per class.
    fn scores(&self, input: &InputTensor) -> Result<Vec<f32>, InferenceError>;

    /// Short description for logs.
    fn describe(&self) -> String {
        "score model".to_string()
    }
}

/// Index and value of the maximum score.
///
/// Ties resolve to the lowest index. NaN entries are skipped, so the result is
/// `None` only for an empty or all-NaN slice.
pub fn argmax(scores: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in scores.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best
}
