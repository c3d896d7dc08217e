//! Alignment status and risk resolution
//!
//! Maps a similarity score, plus optional qualitative analysis text, onto
//! an alignment status and risk level, and produces the templated
//! suggested-fix strings for results that need one.

use shared_types::{AlignmentStatus, ClauseType, RiskLevel};

/// Score at or above which a matched pair counts as aligned
pub const ALIGNED_THRESHOLD: f64 = 0.85;

/// Score at or above which a matched pair counts as partially aligned
pub const PARTIAL_THRESHOLD: f64 = 0.65;

/// Analysis-text terms that escalate partial alignment to high risk
const HIGH_RISK_TERMS: &[&str] = &["critical", "significant", "major", "severe"];

/// Analysis-text terms that escalate partial alignment to medium risk
const MEDIUM_RISK_TERMS: &[&str] = &["risk", "concern", "issue"];

/// Threshold configuration, constructed once and shared read-only
#[derive(Debug, Clone)]
pub struct StatusResolver {
    aligned_threshold: f64,
    partial_threshold: f64,
}

impl StatusResolver {
    pub fn new() -> Self {
        Self {
            aligned_threshold: ALIGNED_THRESHOLD,
            partial_threshold: PARTIAL_THRESHOLD,
        }
    }

    pub fn with_thresholds(aligned_threshold: f64, partial_threshold: f64) -> Self {
        Self {
            aligned_threshold,
            partial_threshold,
        }
    }

    /// Resolve status and risk for one candidate
    ///
    /// `score` is absent when the vendor document has no clause of the
    /// client clause's type. `analysis_text` is whatever qualitative text
    /// the analysis collaborator produced; only partial alignment is
    /// escalated by its contents.
    pub fn resolve(
        &self,
        score: Option<f64>,
        analysis_text: Option<&str>,
    ) -> (AlignmentStatus, RiskLevel) {
        let score = match score {
            Some(score) => score,
            None => return (AlignmentStatus::Missing, RiskLevel::High),
        };

        if score >= self.aligned_threshold {
            (AlignmentStatus::Aligned, RiskLevel::Low)
        } else if score >= self.partial_threshold {
            (AlignmentStatus::Partial, escalate_partial(analysis_text))
        } else {
            (AlignmentStatus::NonCompliant, RiskLevel::High)
        }
    }

    /// Templated remediation text; None for aligned results
    pub fn suggested_fix(
        &self,
        status: AlignmentStatus,
        clause_type: ClauseType,
        title: &str,
    ) -> Option<String> {
        match status {
            AlignmentStatus::Missing => Some(format!(
                "Add {} clause for '{}'",
                clause_type.name(),
                title
            )),
            AlignmentStatus::Partial | AlignmentStatus::NonCompliant => {
                Some(review_recommendation(clause_type, title))
            }
            AlignmentStatus::Aligned => None,
        }
    }
}

impl Default for StatusResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Template used both as suggested fix and as the recommendation fallback
/// when no analysis collaborator is configured
pub fn review_recommendation(clause_type: ClauseType, title: &str) -> String {
    format!(
        "Review and align {} clause '{}' with client requirements",
        clause_type.name(),
        title
    )
}

fn escalate_partial(analysis_text: Option<&str>) -> RiskLevel {
    let text_lower = match analysis_text {
        Some(text) => text.to_lowercase(),
        None => return RiskLevel::Low,
    };

    if HIGH_RISK_TERMS.iter().any(|term| text_lower.contains(term)) {
        RiskLevel::High
    } else if MEDIUM_RISK_TERMS
        .iter()
        .any(|term| text_lower.contains(term))
    {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
