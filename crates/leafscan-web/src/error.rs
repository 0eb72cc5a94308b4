use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use leafscan_ai::InferenceError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Please upload an image.")]
    MissingImage,

    #[error("invalid upload: {message}")]
    Upload { status: StatusCode, message: String },

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl From<MultipartError> for WebError {
    fn from(e: MultipartError) -> Self {
        Self::Upload {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingImage => StatusCode::BAD_REQUEST,
            Self::Upload { status, .. } => *status,
            Self::Inference(e) => match e {
                InferenceError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
                InferenceError::ArtifactMissing(_) | InferenceError::ArtifactIncompatible(_) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                InferenceError::Runtime(_) | InferenceError::EmptyOutput => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingImage => "missing_image",
            Self::Upload { .. } => "upload",
            Self::Inference(e) => e.kind(),
            Self::Render(_) => "render",
        }
    }

    /// Message suitable for showing to the person who uploaded the image.
    pub fn user_message(&self) -> String {
        match self {
            Self::Inference(InferenceError::Decode(detail)) => format!(
                "The uploaded file could not be read as an image ({detail}). \
                 Please upload a JPEG, PNG, or WebP photo of a leaf."
            ),
            Self::Inference(e) if e.is_artifact() => format!(
                "The disease recognition model is not available right now: {e}"
            ),
            other => other.to_string(),
        }
    }

    pub(crate) fn log(&self) {
        if self.status().is_server_error() {
            error!(kind = self.kind(), error = %self, "request failed");
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        self.log();
        let body = json!({
            "error": {
                "kind": self.kind(),
                "message": self.user_message(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}
