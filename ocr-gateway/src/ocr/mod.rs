//! OCR (Optical Character Recognition) Module
//!
//! Turns an image payload from the HTTP layer into recognized text.
//!
//! # Architecture
//!
//! - `decode` turns a base64 (optionally data-URL prefixed) payload into a
//!   three-channel pixel matrix
//! - `OcrEngine` trait is the contract every recognition backend implements
//! - `TesseractEngine` implements local OCR via leptess
//! - `OcrProvider` owns the single engine instance and serializes calls to it
//!
//! # Configuration
//!
//! OCR behavior is controlled via `OcrConfig` (see `config.rs`):
//! - `engine`: Backend selection (currently only "tesseract")
//! - `languages`: Tesseract language codes, `+`-separated (default "tur")
//! - `data_path`: Custom tessdata directory
//! - `timeout_secs`: Upper bound for a single recognition call
//!
//! # Usage
//!
//! ```rust,ignore
//! let engine = build_engine(&config.ocr)?;
//! let ocr = OcrProvider::new(engine, &config.ocr);
//! let text = ocr.recognize_text(payload).await?;
//! ```

mod decode;
mod engine;
mod provider;
mod tesseract;

pub use decode::{decode_image, ChannelOrder, DecodedImage};
pub use engine::{flatten_text, BoundingBox, Detection, OcrEngine};
pub use provider::{build_engine, OcrProvider};
pub use tesseract::TesseractEngine;
