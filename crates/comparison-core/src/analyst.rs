//! Analysis collaborator seam
//!
//! A `ClauseAnalyst` produces qualitative commentary for one matched clause
//! pair. Implementations are expected to convert their own internal
//! failures into the fallback triple rather than raising; the orchestrator
//! additionally applies a timeout and degrades a pair to the same fallback
//! triple when the call does not come back in time. One pair's failure
//! never aborts the run.

use async_trait::async_trait;
use shared_types::{ClauseAnalysis, ClauseType};

pub const FALLBACK_SUMMARY: &str = "Unable to generate summary.";
pub const FALLBACK_RISK: &str = "UNKNOWN";
pub const FALLBACK_RECOMMENDATION: &str = "Unable to generate recommendation.";

/// Per-pair qualitative analysis collaborator
///
/// `risk` in the returned analysis is expected to begin with "HIGH",
/// "MEDIUM" or "LOW" optionally followed by free-text explanation, or to
/// be empty.
#[async_trait]
pub trait ClauseAnalyst: Send + Sync {
    async fn analyze(
        &self,
        clause_type: ClauseType,
        client_text: &str,
        vendor_text: &str,
    ) -> ClauseAnalysis;
}

/// The fixed triple substituted when analysis fails or times out
pub fn fallback_analysis() -> ClauseAnalysis {
    ClauseAnalysis {
        summary: FALLBACK_SUMMARY.to_string(),
        risk: FALLBACK_RISK.to_string(),
        recommendation: FALLBACK_RECOMMENDATION.to_string(),
    }
}

/// True when the analysis is the failure fallback rather than real output
pub fn is_fallback(analysis: &ClauseAnalysis) -> bool {
    analysis.risk == FALLBACK_RISK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_triple_contents() {
        let fallback = fallback_analysis();
        assert_eq!(fallback.summary, "Unable to generate summary.");
        assert_eq!(fallback.risk, "UNKNOWN");
        assert_eq!(fallback.recommendation, "Unable to generate recommendation.");
    }

    #[test]
    fn test_fallback_detection() {
        assert!(is_fallback(&fallback_analysis()));
        assert!(!is_fallback(&ClauseAnalysis {
            summary: "Terms align closely.".to_string(),
            risk: "LOW - minor wording differences".to_string(),
            recommendation: "No change needed.".to_string(),
        }));
    }
}
