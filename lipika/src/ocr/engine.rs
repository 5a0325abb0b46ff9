use leptess::{LepTess, Variable};

use crate::config::OcrConfig;
use crate::error::{LipikaError, Result};

/// Single-block page segmentation: the caller expects one contiguous
/// paragraph of text, not a multi-column layout.
const PAGESEG_SINGLE_BLOCK: &str = "6";

/// Phase tag attached to engine status events. Only recognition-phase
/// events are surfaced to callers as progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    Initializing,
    Recognizing,
}

/// A status+fraction event emitted by a recognition engine during a pass.
#[derive(Debug, Clone, Copy)]
pub struct EngineEvent {
    pub phase: EnginePhase,
    pub fraction: f32,
}

impl EngineEvent {
    pub fn initializing(fraction: f32) -> Self {
        Self {
            phase: EnginePhase::Initializing,
            fraction,
        }
    }

    pub fn recognizing(fraction: f32) -> Self {
        Self {
            phase: EnginePhase::Recognizing,
            fraction,
        }
    }
}

/// A single-use text recognition engine.
///
/// One instance serves exactly one recognition pass; the orchestrator wraps
/// it in an [`EngineGuard`] so teardown runs on every exit path.
pub trait RecognitionEngine: Send {
    /// Run recognition over a PNG-encoded bitmap, reporting status events
    /// through `on_event`.
    fn recognize(
        &mut self,
        image_png: &[u8],
        on_event: &mut dyn FnMut(EngineEvent),
    ) -> Result<String>;

    /// Release engine resources. Called exactly once per pass by the guard.
    fn terminate(&mut self) {}
}

/// Produces a fresh engine instance for each recognition pass.
pub trait EngineFactory: Send + Sync {
    fn acquire(&self) -> Result<Box<dyn RecognitionEngine>>;
}

/// Scoped ownership of an engine for one pass: `terminate` runs exactly
/// once when the guard is dropped, whether recognition succeeded or failed.
pub struct EngineGuard {
    engine: Box<dyn RecognitionEngine>,
}

impl EngineGuard {
    pub fn new(engine: Box<dyn RecognitionEngine>) -> Self {
        Self { engine }
    }

    pub fn recognize(
        &mut self,
        image_png: &[u8],
        on_event: &mut dyn FnMut(EngineEvent),
    ) -> Result<String> {
        self.engine.recognize(image_png, on_event)
    }
}

impl Drop for EngineGuard {
    fn drop(&mut self) {
        self.engine.terminate();
    }
}

/// Tesseract-backed engine configured for the fixed Nepali+Sinhala+English
/// language set and single-block segmentation.
pub struct TesseractEngine {
    inner: LepTess,
}

impl TesseractEngine {
    fn new(languages: &str) -> Result<Self> {
        let mut inner = LepTess::new(None, languages)
            .map_err(|e| LipikaError::Ocr(format!("Failed to initialize Tesseract: {e}")))?;
        inner
            .set_variable(Variable::TesseditPagesegMode, PAGESEG_SINGLE_BLOCK)
            .map_err(|e| LipikaError::Ocr(format!("Failed to set page segmentation mode: {e}")))?;
        Ok(Self { inner })
    }
}

impl RecognitionEngine for TesseractEngine {
    fn recognize(
        &mut self,
        image_png: &[u8],
        on_event: &mut dyn FnMut(EngineEvent),
    ) -> Result<String> {
        // leptess does not surface tesseract's progress monitor, so the
        // local engine reports recognition start and completion only.
        on_event(EngineEvent::recognizing(0.0));
        self.inner
            .set_image_from_mem(image_png)
            .map_err(|e| LipikaError::Ocr(format!("Failed to set image: {e}")))?;
        let text = self
            .inner
            .get_utf8_text()
            .map_err(|e| LipikaError::Ocr(format!("Failed to extract text: {e}")))?;
        on_event(EngineEvent::recognizing(1.0));
        Ok(text)
    }

    // terminate: the default no-op suffices; leptess frees the underlying
    // API handle when the engine is dropped with the guard.
}

/// Factory producing one leptess instance per pass.
pub struct TesseractFactory {
    config: OcrConfig,
}

impl TesseractFactory {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl EngineFactory for TesseractFactory {
    fn acquire(&self) -> Result<Box<dyn RecognitionEngine>> {
        Ok(Box::new(TesseractEngine::new(&self.config.languages)?))
    }
}
