#![allow(dead_code)]

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use base64::Engine as _;
use image::{DynamicImage, ImageFormat};
use tower::ServiceExt;

use ocr_gateway::api::{create_router, AppState};
use ocr_gateway::config::{Config, OcrConfig, ServerConfig};
use ocr_gateway::error::{GatewayError, Result};
use ocr_gateway::ocr::{ChannelOrder, DecodedImage, Detection, OcrEngine, OcrProvider};

/// What a [`FakeEngine`] saw for one call: dimensions and channel order.
pub type SeenImage = (u32, u32, ChannelOrder);

/// Engine stand-in that returns canned detections or a canned failure.
pub struct FakeEngine {
    lines: Vec<String>,
    failure: Option<String>,
    seen: Arc<Mutex<Vec<SeenImage>>>,
}

impl FakeEngine {
    pub fn with_lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            failure: None,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::with_lines(&[])
        }
    }

    pub fn seen(&self) -> Arc<Mutex<Vec<SeenImage>>> {
        Arc::clone(&self.seen)
    }
}

impl OcrEngine for FakeEngine {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn recognize(&mut self, image: &DecodedImage) -> Result<Vec<Detection>> {
        self.seen
            .lock()
            .unwrap()
            .push((image.width(), image.height(), image.order()));

        if let Some(message) = &self.failure {
            return Err(GatewayError::Ocr(message.clone()));
        }

        Ok(self
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| Detection::new(line.as_str()).with_confidence(90.0 - i as f32))
            .collect())
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            dev_mode: false,
            max_body_bytes: 1024 * 1024,
        },
        ocr: OcrConfig {
            engine: "fake".to_string(),
            languages: "eng".to_string(),
            data_path: None,
            timeout_secs: 5,
        },
    }
}

pub fn test_app_with(engine: FakeEngine, config: Config) -> Router {
    let ocr = OcrProvider::new(Box::new(engine), &config.ocr);
    create_router(AppState::new(config, ocr))
}

pub fn test_app(engine: FakeEngine) -> Router {
    test_app_with(engine, test_config())
}

/// Encode a solid-color image as base64 in the given container format.
pub fn image_base64(width: u32, height: u32, format: ImageFormat) -> String {
    let img = DynamicImage::new_rgb8(width, height);
    let mut output = Vec::new();
    img.write_to(&mut Cursor::new(&mut output), format)
        .expect("Failed to encode test image");
    base64::engine::general_purpose::STANDARD.encode(output)
}

pub fn png_base64(width: u32, height: u32) -> String {
    image_base64(width, height, ImageFormat::Png)
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send one request through the router and parse the JSON response body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("Response is not JSON ({e}): {body:?}"));
    (status, json)
}
