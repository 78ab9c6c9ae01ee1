use image::{DynamicImage, ImageFormat};
use leptess::{capi, LepTess};
use tracing::{debug, info};

use crate::config::OcrConfig;
use crate::error::{GatewayError, Result};

use super::decode::{ChannelOrder, DecodedImage};
use super::engine::{Detection, OcrEngine};

/// Local Tesseract backend via leptess.
///
/// Text lines come from Tesseract's layout analysis; each line is then
/// recognized on its own so that per-line confidence is available.
pub struct TesseractEngine {
    lt: LepTess,
}

impl TesseractEngine {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let lt = LepTess::new(config.data_path.as_deref(), &config.languages)
            .map_err(|e| GatewayError::EngineInit(format!("Tesseract not available: {e}")))?;
        info!(languages = %config.languages, "Tesseract OCR initialized");

        Ok(Self { lt })
    }
}

fn encode_png(image: &DecodedImage) -> Result<Vec<u8>> {
    let rgb = image.clone().into_rgb()?;
    let mut output = Vec::new();
    DynamicImage::ImageRgb8(rgb)
        .write_to(&mut std::io::Cursor::new(&mut output), ImageFormat::Png)
        .map_err(|e| GatewayError::Ocr(format!("Failed to encode image: {e}")))?;

    Ok(output)
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn channel_order(&self) -> ChannelOrder {
        ChannelOrder::Rgb
    }

    fn recognize(&mut self, image: &DecodedImage) -> Result<Vec<Detection>> {
        let png = encode_png(image)?;
        self.lt
            .set_image_from_mem(&png)
            .map_err(|e| GatewayError::Ocr(format!("Failed to set image: {e}")))?;

        let Some(lines) = self
            .lt
            .get_component_boxes(capi::TessPageIteratorLevel_RIL_TEXTLINE, true)
        else {
            debug!("Tesseract found no text lines");
            return Ok(Vec::new());
        };

        let mut detections = Vec::new();
        for line in &lines {
            self.lt.set_rectangle_from_box(&line);
            let text = self
                .lt
                .get_utf8_text()
                .map_err(|e| GatewayError::Ocr(format!("Failed to extract text: {e}")))?;
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            let confidence = self.lt.mean_text_conf() as f32;
            detections.push(Detection::new(text).with_confidence(confidence));
        }

        Ok(detections)
    }
}
