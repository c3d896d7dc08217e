//! Run-level error taxonomy
//!
//! Only two failures abort a comparison run: unextractable text and text
//! with no detectable headings. Everything else degrades per clause and is
//! absorbed by the orchestrator.

use thiserror::Error;

use crate::extract::ExtractionError;

/// Which input document a run-level failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSide {
    Client,
    Vendor,
}

impl std::fmt::Display for DocumentSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentSide::Client => write!(f, "client"),
            DocumentSide::Vendor => write!(f, "vendor"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ComparisonError {
    /// Text extraction failed or timed out; fatal to the run
    #[error("text extraction failed for {side} document: {source}")]
    Extraction {
        side: DocumentSide,
        #[source]
        source: ExtractionError,
    },

    /// The extracted text contains no detectable section heading
    #[error("no sections found in {side} document")]
    NoSections { side: DocumentSide },
}
