//! Route handlers.

mod api;
mod health;
mod pages;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

/// Create the router with all pages and API endpoints.
pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        // Pages
        .route("/", get(pages::home_handler))
        .route("/about", get(pages::about_handler))
        .route(
            "/recognize",
            get(pages::recognize_form_handler).post(pages::recognize_handler),
        )
        // API
        .route("/api/predict", post(api::predict_handler))
        .route("/api/labels", get(api::labels_handler))
        .route("/api/health", get(health::health_handler))
        .layer(body_limit)
        // Request tracing (enable with RUST_LOG=tower_http=info or higher)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
