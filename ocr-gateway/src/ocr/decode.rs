use base64::Engine as _;
use image::ImageReader;

use crate::error::{GatewayError, Result};

/// Byte order of the three color channels in a [`DecodedImage`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    Rgb,
    /// What most OCR backends trained on OpenCV input expect.
    #[default]
    Bgr,
}

/// Three-channel, 8-bit pixel matrix handed to an OCR engine.
///
/// Pixels are stored row-major and interleaved, three bytes each, in the
/// order given by [`DecodedImage::order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    order: ChannelOrder,
    pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn from_rgb(rgb: image::RgbImage) -> Self {
        let (width, height) = rgb.dimensions();
        Self {
            width,
            height,
            order: ChannelOrder::Rgb,
            pixels: rgb.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Re-express the matrix in `order`. Dimensions never change.
    pub fn to_order(mut self, order: ChannelOrder) -> Self {
        if self.order != order {
            for px in self.pixels.chunks_exact_mut(3) {
                px.swap(0, 2);
            }
            self.order = order;
        }
        self
    }

    /// Back to an `image` buffer in RGB order, for engines that take
    /// encoded images rather than raw matrices.
    pub fn into_rgb(self) -> Result<image::RgbImage> {
        let (width, height) = (self.width, self.height);
        let rgb = self.to_order(ChannelOrder::Rgb);
        image::RgbImage::from_raw(width, height, rgb.pixels).ok_or_else(|| {
            GatewayError::Internal(format!(
                "Pixel buffer does not match {width}x{height} dimensions"
            ))
        })
    }
}

/// Strip an optional data-URL header (`data:image/png;base64,`).
///
/// Anything up to and including the first comma is discarded unchecked.
fn base64_body(payload: &str) -> &str {
    match payload.split_once(',') {
        Some((_, body)) => body,
        None => payload,
    }
}

/// Decode an image payload into a three-channel matrix in `order`.
pub fn decode_image(payload: &str, order: ChannelOrder) -> Result<DecodedImage> {
    if payload.is_empty() {
        return Err(GatewayError::MissingImage);
    }

    let body: String = base64_body(payload)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(body.as_bytes())
        .map_err(|e| GatewayError::Decode(format!("Invalid base64 payload: {e}")))?;

    let img = ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| GatewayError::Decode(format!("Failed to read image: {e}")))?
        .decode()
        .map_err(|e| GatewayError::Decode(format!("Failed to decode image: {e}")))?;

    Ok(DecodedImage::from_rgb(img.to_rgb8()).to_order(order))
}
