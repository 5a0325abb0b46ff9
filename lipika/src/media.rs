use std::path::Path;

use crate::error::{LipikaError, Result};

/// An uploaded document: raw bytes plus the declared media type.
///
/// Only `image/*` and `application/pdf` pass the gate, mirroring what the
/// extraction flow accepts. Immutable once constructed; dropped after the
/// recognition pass that consumed it.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    bytes: Vec<u8>,
    media_type: String,
    file_name: String,
}

impl SourceDocument {
    pub fn new(
        bytes: Vec<u8>,
        media_type: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Result<Self> {
        let media_type = media_type.into();
        if !(media_type.starts_with("image/") || media_type == "application/pdf") {
            return Err(LipikaError::Validation(format!(
                "Unsupported media type: {media_type} (expected image/* or application/pdf)"
            )));
        }
        Ok(Self {
            bytes,
            media_type,
            file_name: file_name.into(),
        })
    }

    /// Load a document from disk, sniffing the media type from the content
    /// and falling back to the file extension when sniffing fails.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let media_type = infer::get(&bytes)
            .map(|kind| kind.mime_type().to_string())
            .unwrap_or_else(|| {
                mime_guess::from_path(path)
                    .first_or_octet_stream()
                    .essence_str()
                    .to_string()
            });
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();
        Self::new(bytes, media_type, file_name)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
