//! Router tests for the leafscan UI and API.
//!
//! A deterministic stand-in model keeps these independent of the ONNX artifact.
//!
//! Run with: `cargo test --package leafscan-web --test router`

use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use leafscan_ai::{InferenceError, InputTensor, ModelCache, Predictor, ScoreModel};
use leafscan_core::{AdvisoryTable, CLASS_COUNT};
use serde_json::{Value, json};
use tower::ServiceExt;

use leafscan_web::{AppState, create_router};

const BOUNDARY: &str = "leafscan-test-boundary";

/// Picks class `round(mean_red / 6)`; a uniform red of 18 selects index 3
/// (`Apple___healthy`).
struct RedBucketModel;

impl ScoreModel for RedBucketModel {
    fn scores(&self, input: &InputTensor) -> Result<Vec<f32>, InferenceError> {
        let data = input.as_slice();
        let red = data.iter().step_by(3).sum::<f32>() / (data.len() / 3) as f32;
        Ok((0..CLASS_COUNT)
            .map(|i| -(red - i as f32 * 6.0).abs())
            .collect())
    }
}

fn ready_router(max_upload_bytes: usize) -> Router {
    let predictor = Arc::new(Predictor::new(Arc::new(RedBucketModel)));
    create_router(AppState::new(ModelCache::ready(predictor), max_upload_bytes))
}

fn test_router() -> Router {
    ready_router(10 * 1024 * 1024)
}

/// Router whose model loader always reports a missing artifact.
fn missing_model_router(attempts: Arc<AtomicUsize>) -> Router {
    let cache = ModelCache::new(Arc::new(
        move || -> Result<Arc<dyn ScoreModel>, InferenceError> {
            attempts.fetch_add(1, Ordering::SeqCst);
            Err(InferenceError::ArtifactMissing(
                "models/trained_plant_disease_model.onnx".into(),
            ))
        },
    ));
    create_router(AppState::new(cache, 1024 * 1024))
}

fn leaf_png(red: u8) -> Vec<u8> {
    let img = RgbImage::from_pixel(64, 48, Rgb([red, 140, 60]));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn multipart_body(field: &str, file_name: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

/// Helper to make a GET request and read the body as text.
async fn get_text(router: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(router, request).await;
    (status, String::from_utf8(body).unwrap())
}

async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, text) = get_text(router, uri).await;
    (status, serde_json::from_str(&text).unwrap_or(json!(null)))
}

/// Helper to POST a multipart upload.
async fn upload(router: &Router, uri: &str, field: &str, bytes: &[u8]) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(field, "leaf.png", bytes)))
        .unwrap();
    let (status, body) = send(router, request).await;
    (status, String::from_utf8_lossy(&body).into_owned())
}

async fn upload_json(router: &Router, field: &str, bytes: &[u8]) -> (StatusCode, Value) {
    let (status, text) = upload(router, "/api/predict", field, bytes).await;
    (status, serde_json::from_str(&text).unwrap_or(json!(null)))
}

// ── Pages ──

#[tokio::test]
async fn home_page() {
    let (status, html) = get_text(&test_router(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Leaf Disease Detection"));
    assert!(html.contains(r#"href="/recognize""#));
}

#[tokio::test]
async fn about_page_lists_every_class() {
    let (status, html) = get_text(&test_router(), "/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("38 categories"));
    for name in leafscan_core::LabelSet::plant_village().iter() {
        assert!(html.contains(name), "about page is missing {name}");
    }
}

#[tokio::test]
async fn recognize_form() {
    let (status, html) = get_text(&test_router(), "/recognize").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"enctype="multipart/form-data""#));
    assert!(html.contains(r#"name="image""#));
    assert!(html.contains("Please upload an image."));
}

#[tokio::test]
async fn recognize_renders_prediction_and_advice() {
    let (status, html) = upload(&test_router(), "/recognize", "image", &leaf_png(18)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Model is predicting it's a <strong>Apple___healthy</strong>"));
    assert!(html.contains("<strong>Best Practices:</strong>"));
    assert!(html.contains("data:image/png;base64,"));
    assert!(!html.contains(r#"class="error""#));
}

#[tokio::test]
async fn recognize_bad_image_shows_error_only() {
    let bytes = b"%PDF-1.4 not a leaf";
    let (status, html) = upload(&test_router(), "/recognize", "image", bytes).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains(r#"class="error""#));
    assert!(html.contains("could not be read as an image"));
    assert!(!html.contains("Model is predicting"));
    assert!(!html.contains("data:image"));
}

#[tokio::test]
async fn recognize_without_file() {
    let (status, html) = upload(&test_router(), "/recognize", "image", b"").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("Please upload an image."));
}

// ── API ──

#[tokio::test]
async fn api_predict_healthy_apple() {
    let (status, json) = upload_json(&test_router(), "image", &leaf_png(18)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["class_index"], 3);
    assert_eq!(json["class_name"], "Apple___healthy");
    assert_eq!(json["known"], true);
    assert_eq!(
        json["advisory"],
        AdvisoryTable::global().get("Apple___healthy").unwrap()
    );
}

#[tokio::test]
async fn api_predict_is_deterministic() {
    let router = test_router();
    let bytes = leaf_png(150);
    let (_, a) = upload_json(&router, "image", &bytes).await;
    let (_, b) = upload_json(&router, "image", &bytes).await;
    assert_eq!(a, b);
    assert_eq!(a["class_index"], 25);
}

#[tokio::test]
async fn api_predict_decode_error() {
    let (status, json) = upload_json(&test_router(), "image", b"hello world").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["kind"], "decode");
    assert!(json.get("class_name").is_none());
}

#[tokio::test]
async fn api_predict_wrong_field() {
    let (status, json) = upload_json(&test_router(), "photo", &leaf_png(18)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["kind"], "missing_image");
}

#[tokio::test]
async fn api_predict_body_limit() {
    let router = ready_router(512);
    let (status, _) = upload(&router, "/api/predict", "image", &vec![0u8; 4096]).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn api_labels() {
    let (status, json) = get_json(&test_router(), "/api/labels").await;
    assert_eq!(status, StatusCode::OK);
    let labels = json.as_array().unwrap();
    assert_eq!(labels.len(), CLASS_COUNT);
    assert_eq!(labels[8]["name"], "Corn_(maize)___Common_rust_");
    assert_eq!(labels[8]["condition"], "Common rust");
    assert_eq!(labels[37]["healthy"], true);
}

#[tokio::test]
async fn health_reports_loaded_model() {
    let (status, json) = get_json(&test_router(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["model_loaded"], true);
    assert_eq!(json["classes"], 38);
}

// ── Missing artifact ──

#[tokio::test]
async fn missing_artifact_is_reported_not_fatal() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let router = missing_model_router(Arc::clone(&attempts));

    let (status, json) = upload_json(&router, "image", &leaf_png(18)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["kind"], "artifact_missing");

    let (status, html) = upload(&router, "/recognize", "image", &leaf_png(18)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(html.contains("model is not available"));
    assert!(!html.contains("Model is predicting"));

    // Each request retries the load; the process keeps serving.
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
    let (status, json) = get_json(&router, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["model_loaded"], false);
}

#[tokio::test]
async fn bad_image_reported_before_missing_artifact() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let router = missing_model_router(Arc::clone(&attempts));

    let (status, json) = upload_json(&router, "image", b"not an image").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["kind"], "decode");
    assert_eq!(attempts.load(Ordering::SeqCst), 0);
}
