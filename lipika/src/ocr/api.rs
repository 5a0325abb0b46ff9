use std::str::FromStr;

use reqwest::{multipart, Client};
use serde::Deserialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{LipikaError, Result};
use crate::media::SourceDocument;

/// Returned verbatim when the remote service reports no recognizable text.
pub const NO_TEXT_DETECTED: &str = "No text detected";

/// Which remote recognizer handles the upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOcrMode {
    Printed,
    Handwritten,
}

impl RemoteOcrMode {
    fn endpoint(&self) -> &'static str {
        match self {
            RemoteOcrMode::Printed => "/ocr/printed",
            RemoteOcrMode::Handwritten => "/ocr/handwritten",
        }
    }
}

impl FromStr for RemoteOcrMode {
    type Err = LipikaError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "printed" => Ok(RemoteOcrMode::Printed),
            "handwritten" => Ok(RemoteOcrMode::Handwritten),
            other => Err(LipikaError::Validation(format!(
                "Unsupported OCR mode: {other} (expected printed or handwritten)"
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OcrResponse {
    extracted_text: Option<String>,
}

/// Client for the remote OCR endpoints.
///
/// The original, unprocessed file is uploaded as the multipart `file` field;
/// the remote service is trusted to return clean text, so no post-pass is
/// applied here. Requests are not retried and carry no client-side timeout.
#[derive(Debug, Clone)]
pub struct RemoteOcrClient {
    client: Client,
    base_url: String,
}

impl RemoteOcrClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| LipikaError::Ocr(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Submit a document for remote recognition and return the extracted
    /// text, defaulting to [`NO_TEXT_DETECTED`] when the response carries no
    /// `extracted_text` field.
    pub async fn extract(&self, document: &SourceDocument, mode: RemoteOcrMode) -> Result<String> {
        let file_part = multipart::Part::bytes(document.bytes().to_vec())
            .file_name(document.file_name().to_string())
            .mime_str(document.media_type())
            .map_err(|e| LipikaError::Ocr(format!("Invalid MIME type: {e}")))?;
        let form = multipart::Form::new().part("file", file_part);

        let url = format!("{}{}", self.base_url, mode.endpoint());
        debug!("Sending OCR request to {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| LipikaError::Ocr(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LipikaError::Ocr(format!("OCR API error ({status}): {body}")));
        }

        let parsed: OcrResponse = response
            .json()
            .await
            .map_err(|e| LipikaError::Ocr(format!("Failed to parse OCR response: {e}")))?;

        Ok(parsed
            .extracted_text
            .unwrap_or_else(|| NO_TEXT_DETECTED.to_string()))
    }
}
