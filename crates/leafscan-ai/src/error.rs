use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("could not decode image: {0}")]
    Decode(String),

    #[error("model artifact not found: {0}")]
    ArtifactMissing(PathBuf),

    #[error("model artifact is incompatible: {0}")]
    ArtifactIncompatible(String),

    #[error("inference failed: {0}")]
    Runtime(String),

    #[error("model produced no usable scores")]
    EmptyOutput,
}

impl InferenceError {
    /// Stable tag for API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Decode(_) => "decode",
            Self::ArtifactMissing(_) => "artifact_missing",
            Self::ArtifactIncompatible(_) => "artifact_incompatible",
            Self::Runtime(_) => "runtime",
            Self::EmptyOutput => "empty_output",
        }
    }

    /// True when the model artifact, not the input, is at fault.
    pub fn is_artifact(&self) -> bool {
        matches!(self, Self::ArtifactMissing(_) | Self::ArtifactIncompatible(_))
    }
}

impl From<image::ImageError> for InferenceError {
    fn from(e: image::ImageError) -> Self {
        Self::Decode(e.to_string())
    }
}
