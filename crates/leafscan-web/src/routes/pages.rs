//! HTML pages: Home, About, and Disease Recognition.

use std::sync::Arc;

use askama::Template;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use leafscan_ai::InferenceError;
use leafscan_core::LabelSet;
use tracing::{info, warn};

use crate::error::WebError;
use crate::state::AppState;
use crate::upload::Upload;
use crate::views::{AboutPage, HomePage, Outcome, RecognizePage};

type PageResult = Result<(StatusCode, Html<String>), WebError>;

fn render(status: StatusCode, page: &impl Template) -> PageResult {
    Ok((status, Html(page.render()?)))
}

/// Handler for GET /
pub async fn home_handler() -> PageResult {
    render(StatusCode::OK, &HomePage::new())
}

/// Handler for GET /about
pub async fn about_handler() -> PageResult {
    render(StatusCode::OK, &AboutPage::new(&LabelSet::plant_village()))
}

/// Handler for GET /recognize
pub async fn recognize_form_handler() -> PageResult {
    render(StatusCode::OK, &RecognizePage::empty())
}

/// Handler for POST /recognize
///
/// Failures are rendered on the same page with the matching status code; no
/// prediction is shown alongside an error.
pub async fn recognize_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> PageResult {
    let mut page = RecognizePage::empty();

    let upload = match Upload::from_multipart(multipart).await {
        Ok(upload) => upload,
        Err(e) => return render_failure(page, e),
    };

    page.file_name = upload.file_name.clone();
    let preview = upload.data_uri();

    match state.predict(upload.bytes).await {
        Ok(result) => {
            info!(
                class_index = result.class_index,
                class_name = result.class_name,
                "page prediction"
            );
            page.preview = preview;
            page.outcome = Some(Outcome::from(&result));
            render(StatusCode::OK, &page)
        }
        Err(e) => {
            if !matches!(e, InferenceError::Decode(_)) {
                page.preview = preview;
            }
            render_failure(page, WebError::from(e))
        }
    }
}

fn render_failure(mut page: RecognizePage, error: WebError) -> PageResult {
    warn!(kind = error.kind(), error = %error, "recognition failed");
    let status = error.status();
    page.error = Some(error.user_message());
    render(status, &page)
}
