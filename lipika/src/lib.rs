//! Lipika — Nepali/Sinhala to English translation and OCR toolkit.
//!
//! The crate packages the client-side core of a multilingual translation
//! tool: image preprocessing and OCR orchestration ([`ocr`]), a translation
//! client ([`translate`]), platform text-to-speech ([`speech`]), and the
//! persisted interface-language preference ([`prefs`]). The translation and
//! remote-OCR backends are external HTTP collaborators configured through
//! [`config`].

pub mod config;
pub mod error;
pub mod language;
pub mod locale;
pub mod media;
pub mod ocr;
pub mod prefs;
pub mod speech;
pub mod text;
pub mod translate;
