use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{LipikaError, Result};
use crate::language::Language;

/// Shown when the translation backend cannot be reached or errors out.
pub const TRANSLATION_FAILED: &str = "Translation failed. Please try again.";

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    src_lang: &'static str,
    tgt_lang: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translated_text: String,
}

/// Client for the remote translation endpoint.
#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: Client,
    base_url: String,
}

impl TranslationClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| LipikaError::Translation(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Translate `text` from `source` to `target`.
    ///
    /// Whitespace-only input is a no-op: `Ok(None)` comes back without a
    /// request being issued.
    pub async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<Option<String>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let url = format!("{}/translate", self.base_url);
        debug!("Sending translation request to {}", url);

        let request = TranslateRequest {
            text,
            src_lang: source.mbart_code(),
            tgt_lang: target.mbart_code(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| LipikaError::Translation(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LipikaError::Translation(format!(
                "Translation API error ({status}): {body}"
            )));
        }

        let parsed: TranslateResponse = response.json().await.map_err(|e| {
            LipikaError::Translation(format!("Failed to parse translation response: {e}"))
        })?;

        Ok(Some(parsed.translated_text))
    }
}
