use axum::body::Bytes;
use axum::extract::Multipart;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::WebError;

/// Multipart field carrying the uploaded photo.
pub const IMAGE_FIELD: &str = "image";

pub struct Upload {
    pub bytes: Bytes,
    pub file_name: Option<String>,
}

impl Upload {
    /// Pull the `image` field out of a multipart body.
    ///
    /// Browsers submit an empty part when no file was chosen; that is treated
    /// the same as a missing field.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, WebError> {
        while let Some(field) = multipart.next_field().await? {
            if field.name() != Some(IMAGE_FIELD) {
                continue;
            }
            let file_name = field
                .file_name()
                .filter(|n| !n.is_empty())
                .map(str::to_string);
            let bytes = field.bytes().await?;
            if bytes.is_empty() {
                return Err(WebError::MissingImage);
            }
            return Ok(Self { bytes, file_name });
        }
        Err(WebError::MissingImage)
    }

    /// `data:` URI for showing the upload back to the user, if the content is
    /// a recognised image format.
    pub fn data_uri(&self) -> Option<String> {
        let format = image::guess_format(&self.bytes).ok()?;
        Some(format!(
            "data:{};base64,{}",
            format.to_mime_type(),
            STANDARD.encode(&self.bytes)
        ))
    }
}
