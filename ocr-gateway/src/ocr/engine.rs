use crate::error::Result;

use super::decode::{ChannelOrder, DecodedImage};

/// Axis-aligned region an engine reported a detection in, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// One recognized text region.
///
/// Only `text` reaches HTTP clients today; geometry and confidence are kept
/// so engines can report them without a trait change.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub text: String,
    pub confidence: Option<f32>,
    pub bbox: Option<BoundingBox>,
}

impl Detection {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
            bbox: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }
}

/// A loaded OCR model.
///
/// Implementations are blocking and need not be reentrant: the
/// [`OcrProvider`](super::OcrProvider) owns the only instance, runs calls on
/// the blocking pool and never enters `recognize` twice at once.
pub trait OcrEngine: Send {
    /// Short identifier reported by `/health`, e.g. `"tesseract"`.
    fn name(&self) -> &'static str;

    /// Channel order `recognize` expects its input in.
    fn channel_order(&self) -> ChannelOrder {
        ChannelOrder::Bgr
    }

    /// Detect and recognize text lines, ordered as the engine reads them.
    fn recognize(&mut self, image: &DecodedImage) -> Result<Vec<Detection>>;
}

/// Join the recognized text of each detection, one line per detection.
pub fn flatten_text(detections: &[Detection]) -> String {
    detections
        .iter()
        .map(|d| d.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
