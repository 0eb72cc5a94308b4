pub mod advisory;
pub mod labels;
pub mod prediction;

pub use advisory::{AdvisoryTable, FALLBACK_ADVISORY};
pub use labels::{ClassLabel, LabelError, LabelSet, CLASS_COUNT};
pub use prediction::{PredictionResult, Resolution, UNKNOWN_CLASS, resolve, resolve_in};
