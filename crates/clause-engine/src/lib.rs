pub mod classifier;
pub mod keywords;
pub mod matcher;
pub mod obligations;
pub mod segmenter;
pub mod similarity;
pub mod status;

use shared_types::Clause;

pub use matcher::DocumentMatcher;
pub use segmenter::SegmentationError;
pub use similarity::OverlapScorer;
pub use status::{StatusResolver, ALIGNED_THRESHOLD, PARTIAL_THRESHOLD};

/// ClauseEngine entry point
pub struct ClauseEngine;

impl ClauseEngine {
    pub fn new() -> Self {
        Self
    }

    /// Turn raw document text into classified clauses with obligations
    ///
    /// Fails when the text contains no detectable section heading.
    pub fn extract_clauses(&self, text: &str) -> Result<Vec<Clause>, SegmentationError> {
        let sections = segmenter::segment(text)?;

        Ok(sections
            .into_iter()
            .map(|section| {
                let clause_type =
                    classifier::classify(&format!("{} {}", section.title, section.content));
                let obligations = obligations::split_obligations(&section.content);
                Clause {
                    section,
                    clause_type,
                    obligations,
                }
            })
            .collect())
    }
}

impl Default for ClauseEngine {
    fn default() -> Self {
        Self::new()
    }
}
