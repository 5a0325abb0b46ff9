//! OCR (Optical Character Recognition) Module
//!
//! Image text extraction for the Lipika translation tool. Two operating
//! modes share one orchestrator:
//!
//! - **Auto** runs a local Tesseract engine over a preprocessed (upscaled,
//!   binarized) bitmap, streaming progress percentages to the caller and
//!   cleaning the output to the supported scripts.
//! - **Printed/Handwritten** upload the original file to the remote OCR
//!   endpoints and trust the service's text as-is.
//!
//! # Architecture
//!
//! - `preprocessing` upscales and binarizes the input bitmap
//! - `engine` defines the per-pass recognition engine and its scoped teardown
//! - `api` talks to the remote `/ocr/printed` and `/ocr/handwritten` endpoints
//! - `provider` orchestrates both modes and owns the failure-string boundary

mod api;
mod engine;
mod preprocessing;
mod provider;

pub use api::{RemoteOcrClient, RemoteOcrMode, NO_TEXT_DETECTED};
pub use engine::{
    EngineEvent, EngineFactory, EngineGuard, EnginePhase, RecognitionEngine, TesseractFactory,
};
pub use preprocessing::{preprocess_image, PreprocessedBitmap};
pub use provider::{OcrProvider, AUTO_EXTRACT_FAILED, REMOTE_EXTRACT_FAILED};
