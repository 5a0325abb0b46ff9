use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use crate::config::Config;
use crate::error::{LipikaError, Result};
use crate::media::SourceDocument;
use crate::text::clean_recognized_text;

use super::api::{RemoteOcrClient, RemoteOcrMode};
use super::engine::{EngineFactory, EngineGuard, EnginePhase, TesseractFactory};
use super::preprocessing::preprocess_image;

/// Failure string for local auto-extraction (Mode A).
pub const AUTO_EXTRACT_FAILED: &str =
    "OCR extraction failed. Please try again with a clearer image.";

/// Failure string for remote extraction (Mode B).
pub const REMOTE_EXTRACT_FAILED: &str = "OCR extraction failed. Please try again.";

/// Drives one recognition pass end to end.
///
/// Mode A preprocesses the document and runs a local engine over the
/// binarized bitmap; Mode B uploads the original file to a remote endpoint.
/// Both public entry points catch every internal error and flatten it to a
/// fixed user-facing string, so callers never see transport or engine
/// details. Each Mode-A pass acquires its own engine instance and tears it
/// down on every exit path.
pub struct OcrProvider {
    engines: Arc<dyn EngineFactory>,
    remote: RemoteOcrClient,
}

impl OcrProvider {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            engines: Arc::new(TesseractFactory::new(&config.ocr)),
            remote: RemoteOcrClient::new(&config.api)?,
        })
    }

    /// Build a provider with an injected engine factory.
    pub fn with_engine_factory(engines: Arc<dyn EngineFactory>, remote: RemoteOcrClient) -> Self {
        Self { engines, remote }
    }

    /// Local auto-extraction (Mode A).
    ///
    /// `on_progress` receives whole percentages in 0..=100, monotonically
    /// non-decreasing, starting from 0 at the beginning of the pass. Only
    /// recognition-phase engine events are forwarded; initialization chatter
    /// is dropped. Progress is advisory and carries no cancellation
    /// authority.
    pub async fn extract_auto(
        &self,
        document: &SourceDocument,
        mut on_progress: impl FnMut(u8),
    ) -> String {
        match self.try_extract_auto(document, &mut on_progress).await {
            Ok(text) => text,
            Err(e) => {
                warn!("OCR extraction failed: {e}");
                AUTO_EXTRACT_FAILED.to_string()
            }
        }
    }

    async fn try_extract_auto(
        &self,
        document: &SourceDocument,
        on_progress: &mut dyn FnMut(u8),
    ) -> Result<String> {
        on_progress(0);

        let bitmap = preprocess_image(document.bytes())?;
        let engine = self.engines.acquire()?;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let png = bitmap.png_bytes().to_vec();
        let pass = tokio::task::spawn_blocking(move || {
            // The guard tears the engine down when this task ends, whether
            // recognition returned text or an error.
            let mut guard = EngineGuard::new(engine);
            guard.recognize(&png, &mut |event| {
                let _ = tx.send(event);
            })
        });

        // The sender drops with the blocking task, closing the channel.
        let mut last_pct = 0u8;
        while let Some(event) = rx.recv().await {
            if event.phase == EnginePhase::Recognizing {
                let pct = (event.fraction.clamp(0.0, 1.0) * 100.0).round() as u8;
                if pct > last_pct {
                    last_pct = pct;
                    on_progress(pct);
                }
            }
        }

        let raw = pass
            .await
            .map_err(|e| LipikaError::Ocr(format!("Recognition task panicked: {e}")))??;

        Ok(clean_recognized_text(&raw))
    }

    /// Remote extraction (Mode B). The original file goes up unmodified and
    /// the response text is returned without a cleaning pass.
    pub async fn extract_remote(&self, document: &SourceDocument, mode: RemoteOcrMode) -> String {
        match self.remote.extract(document, mode).await {
            Ok(text) => text,
            Err(e) => {
                warn!("OCR extraction failed: {e}");
                REMOTE_EXTRACT_FAILED.to_string()
            }
        }
    }
}
