//! Result and report types for a comparison run

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::ReportCategory;

/// Alignment outcome for one client clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignmentStatus {
    #[serde(rename = "Aligned")]
    Aligned,
    #[serde(rename = "Partial")]
    Partial,
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
    #[serde(rename = "Missing")]
    Missing,
}

impl AlignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignmentStatus::Aligned => "Aligned",
            AlignmentStatus::Partial => "Partial",
            AlignmentStatus::NonCompliant => "Non-Compliant",
            AlignmentStatus::Missing => "Missing",
        }
    }
}

impl std::fmt::Display for AlignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity label attached to a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
    /// Analysis collaborator failed for this pair
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of the external analysis collaborator for one matched pair
///
/// `risk` is expected to begin with "HIGH", "MEDIUM" or "LOW" optionally
/// followed by free-text explanation, or to be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseAnalysis {
    pub summary: String,
    pub risk: String,
    pub recommendation: String,
}

/// One entry of the final result list; exactly one per client clause
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub title: String,
    pub client_text: String,
    pub vendor_text: String,
    pub status: AlignmentStatus,
    pub risk: RiskLevel,
    pub score: Option<f64>,
    pub summary: Option<String>,
    pub recommendation: Option<String>,
    pub suggested_fix: Option<String>,
}

/// Headline presence summary for one reporting category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlineEntry {
    pub category: ReportCategory,
    pub client_count: usize,
    pub vendor_count: usize,
    pub worst_risk: RiskLevel,
}

/// Run-level artifact assembled by the orchestrator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub id: String,
    pub results: Vec<ComparisonResult>,
    pub headline: Vec<HeadlineEntry>,
    pub compared_at: u64,
}

impl ComparisonReport {
    /// Stamp a fresh report with a v4 id and the current Unix time
    pub fn new(results: Vec<ComparisonResult>, headline: Vec<HeadlineEntry>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            results,
            headline,
            compared_at: Utc::now().timestamp() as u64,
        }
    }
}
