//! Comparison Core - orchestration for contract clause comparison
//!
//! This crate provides:
//! - Collaborator traits for text extraction and per-pair analysis
//! - Run configuration (thresholds, timeouts)
//! - The comparison orchestrator and run-level error taxonomy
//! - Headline cross-document reporting

pub mod analyst;
pub mod config;
pub mod error;
pub mod extract;
pub mod headline;
pub mod orchestrator;

// Re-export commonly used types
pub use analyst::{
    fallback_analysis, ClauseAnalyst, FALLBACK_RECOMMENDATION, FALLBACK_RISK, FALLBACK_SUMMARY,
};
pub use config::ComparisonConfig;
pub use error::{ComparisonError, DocumentSide};
pub use extract::{ExtractionError, PlainTextExtractor, TextExtractor};
pub use orchestrator::ContractComparer;
