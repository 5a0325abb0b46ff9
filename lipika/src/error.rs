use thiserror::Error;

#[derive(Error, Debug)]
pub enum LipikaError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Preprocessing error: {0}")]
    Preprocess(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("Preferences error: {0}")]
    Preferences(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LipikaError>;
