use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::info;

use crate::config::OcrConfig;
use crate::error::{GatewayError, Result};

use super::decode::{decode_image, ChannelOrder, DecodedImage};
use super::engine::{flatten_text, Detection, OcrEngine};
use super::tesseract::TesseractEngine;

/// Construct the engine named by `config.engine`.
///
/// Blocks while the model loads; call it before the server starts listening.
pub fn build_engine(config: &OcrConfig) -> Result<Box<dyn OcrEngine>> {
    match config.engine.to_lowercase().as_str() {
        "tesseract" | "local/tesseract" => Ok(Box::new(TesseractEngine::new(config)?)),
        other => Err(GatewayError::EngineInit(format!(
            "Unknown OCR engine '{other}'. Supported engines: tesseract"
        ))),
    }
}

/// Shared handle to the process-wide OCR engine.
///
/// Cloning is cheap; all clones drive the same engine, one call at a time.
#[derive(Clone)]
pub struct OcrProvider {
    engine: Arc<Mutex<Box<dyn OcrEngine>>>,
    name: &'static str,
    channel_order: ChannelOrder,
    timeout: Option<Duration>,
}

impl OcrProvider {
    pub fn new(engine: Box<dyn OcrEngine>, config: &OcrConfig) -> Self {
        let name = engine.name();
        let channel_order = engine.channel_order();
        let timeout = (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs));
        info!(engine = name, ?channel_order, ?timeout, "OCR provider ready");

        Self {
            engine: Arc::new(Mutex::new(engine)),
            name,
            channel_order,
            timeout,
        }
    }

    pub fn engine_name(&self) -> &'static str {
        self.name
    }

    /// Decode `payload`, run the engine on it and join the recognized lines.
    pub async fn recognize_text(&self, payload: &str) -> Result<String> {
        let image = decode_image(payload, self.channel_order)?;
        let detections = self.detect(image).await?;
        Ok(flatten_text(&detections))
    }

    async fn detect(&self, image: DecodedImage) -> Result<Vec<Detection>> {
        let Some(timeout) = self.timeout else {
            return self.detect_internal(image).await;
        };

        match tokio::time::timeout(timeout, self.detect_internal(image)).await {
            Ok(inner_result) => inner_result,
            Err(_) => Err(GatewayError::Ocr(format!(
                "OCR operation timed out after {} seconds",
                timeout.as_secs()
            ))),
        }
    }

    async fn detect_internal(&self, image: DecodedImage) -> Result<Vec<Detection>> {
        // Queue on the lock here, not on the blocking pool: a caller that gives
        // up while waiting must never reach the engine.
        let mut engine = Arc::clone(&self.engine).lock_owned().await;

        tokio::task::spawn_blocking(move || engine.recognize(&image))
            .await
            .map_err(|e| GatewayError::Ocr(format!("OCR task panicked: {e}")))?
    }
}
