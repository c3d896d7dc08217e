//! Text-extraction collaborator seam
//!
//! The core never inspects document bytes itself; extraction is delegated
//! to an implementation of `TextExtractor`. Extraction fails exactly when
//! no non-whitespace text is recoverable, and that failure is fatal to the
//! whole comparison run.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// No non-whitespace text is recoverable from the document
    #[error("no extractable text in document")]
    NoText,

    #[error("extraction timed out after {0}ms")]
    Timeout(u64),

    #[error("extraction failed: {0}")]
    Failed(String),
}

/// Byte-to-text extraction collaborator
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Extractor for documents that are already plain text
///
/// Decodes bytes as UTF-8 (lossily) and errors when nothing but whitespace
/// comes out, e.g. a scanned image with no text layer.
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let text = String::from_utf8_lossy(bytes).to_string();
        if text.trim().is_empty() {
            return Err(ExtractionError::NoText);
        }
        Ok(text)
    }
}
