//! HTTP gateway that recognizes text in base64-encoded images.
//!
//! `POST /ocr` decodes the image, runs it through the configured OCR engine
//! and returns the recognized lines; `GET /config` tells browser clients
//! which endpoints to use.

pub mod api;
pub mod config;
pub mod error;
pub mod ocr;
