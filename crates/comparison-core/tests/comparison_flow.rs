//! End-to-end tests for the comparison orchestrator
//!
//! Runs whole comparisons through `ContractComparer` with the plain-text
//! extractor and mock analysts.
//!
//! Test categories:
//! - Alignment scenarios (partial, missing, aligned)
//! - Fatal extraction and segmentation failures
//! - Result ordering and per-clause degradation
//! - Analysis timeouts and risk escalation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use comparison_core::{
    ClauseAnalyst, ComparisonConfig, ComparisonError, ContractComparer, PlainTextExtractor,
    FALLBACK_RECOMMENDATION, FALLBACK_SUMMARY,
};
use shared_types::{AlignmentStatus, ClauseAnalysis, ClauseType, RiskLevel};

fn comparer() -> ContractComparer {
    ContractComparer::new(
        Arc::new(ComparisonConfig::default()),
        Arc::new(PlainTextExtractor),
    )
}

/// Analyst returning a fixed triple for every pair
struct CannedAnalyst {
    risk: &'static str,
}

#[async_trait]
impl ClauseAnalyst for CannedAnalyst {
    async fn analyze(
        &self,
        clause_type: ClauseType,
        _client_text: &str,
        _vendor_text: &str,
    ) -> ClauseAnalysis {
        ClauseAnalysis {
            summary: format!("{} terms diverge on duration.", clause_type.name()),
            risk: self.risk.to_string(),
            recommendation: "Negotiate the shorter period.".to_string(),
        }
    }
}

/// Analyst that fails (returns the fallback triple) for one clause type only
struct FlakyAnalyst {
    failing_type: ClauseType,
}

#[async_trait]
impl ClauseAnalyst for FlakyAnalyst {
    async fn analyze(
        &self,
        clause_type: ClauseType,
        _client_text: &str,
        _vendor_text: &str,
    ) -> ClauseAnalysis {
        if clause_type == self.failing_type {
            return comparison_core::fallback_analysis();
        }
        ClauseAnalysis {
            summary: "Terms are close.".to_string(),
            risk: "LOW".to_string(),
            recommendation: "No change needed.".to_string(),
        }
    }
}

/// Analyst that never answers inside any reasonable budget
struct StalledAnalyst;

#[async_trait]
impl ClauseAnalyst for StalledAnalyst {
    async fn analyze(
        &self,
        _clause_type: ClauseType,
        _client_text: &str,
        _vendor_text: &str,
    ) -> ClauseAnalysis {
        tokio::time::sleep(Duration::from_secs(60)).await;
        unreachable!("the orchestrator times out first")
    }
}

#[tokio::test]
async fn test_diverging_payment_terms_report_partial() -> anyhow::Result<()> {
    let report = comparer()
        .compare(
            b"1. Payment Terms\nPayment due within 30 days of invoice date.",
            b"1. Payment Terms\nPayment due within 45 days of invoice date.",
        )
        .await?;

    assert_eq!(report.results.len(), 1);
    let result = &report.results[0];
    assert_eq!(result.status, AlignmentStatus::Partial);
    assert!(result.risk >= RiskLevel::Low);
    assert!(result.score.unwrap() < 0.85);
    assert!(result.suggested_fix.as_ref().unwrap().contains("Payment Terms"));
    Ok(())
}

#[tokio::test]
async fn test_missing_vendor_clause_reports_missing() -> anyhow::Result<()> {
    let report = comparer()
        .compare(
            b"1. Payment Terms\nPayment due on receipt of invoice.\n\
              2. Intellectual Property\nAll copyright in the work product vests in the customer.",
            b"1. Payment Terms\nPayment due on receipt of invoice.",
        )
        .await?;

    let ip_result = &report.results[1];
    assert_eq!(ip_result.status, AlignmentStatus::Missing);
    assert_eq!(ip_result.risk, RiskLevel::High);
    assert_eq!(ip_result.vendor_text, "");
    assert_eq!(ip_result.score, None);
    assert_eq!(
        ip_result.suggested_fix.as_deref(),
        Some("Add Intellectual Property clause for 'Intellectual Property'")
    );
    Ok(())
}

#[tokio::test]
async fn test_identical_clauses_align_with_no_fix() -> anyhow::Result<()> {
    let text = b"1. Confidentiality\nEach party shall keep the other's information confidential.";
    let report = comparer().compare(text, text).await?;

    let result = &report.results[0];
    assert_eq!(result.status, AlignmentStatus::Aligned);
    assert!((result.score.unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(result.suggested_fix, None);
    Ok(())
}

#[tokio::test]
async fn test_empty_client_document_is_fatal() {
    let error = comparer()
        .compare(b"", b"1. Scope\nVendor provides services.")
        .await
        .unwrap_err();

    assert!(matches!(error, ComparisonError::Extraction { .. }));
    assert!(error.to_string().contains("client"));
}

#[tokio::test]
async fn test_unsegmentable_vendor_document_is_fatal() {
    let error = comparer()
        .compare(
            b"1. Scope\nClient requires consulting services.",
            b"flat prose with no numbering anywhere in the document",
        )
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "no sections found in vendor document");
}

#[tokio::test]
async fn test_one_result_per_client_clause_in_document_order() {
    let report = comparer()
        .compare(
            b"1. Payment Terms\nPayment due within 30 days of invoice.\n\
              2. Termination\nEither party may terminate on notice.\n\
              3. Governing Law\nThis agreement is governed by Florida law.",
            b"1. Governing Law\nThis agreement is governed by Delaware law.\n\
              2. Payment Terms\nPayment due within 30 days of invoice.",
        )
        .await
        .unwrap();

    let titles: Vec<&str> = report.results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Payment Terms", "Termination", "Governing Law"]);
}

#[tokio::test]
async fn test_analyst_failure_degrades_only_its_own_pair() {
    let report = comparer()
        .with_analyst(Arc::new(FlakyAnalyst {
            failing_type: ClauseType::Termination,
        }))
        .compare(
            b"1. Payment Terms\nPayment due within 30 days of invoice.\n\
              2. Termination\nEither party may terminate on 30 days notice.",
            b"1. Payment Terms\nPayment due within 30 days of invoice.\n\
              2. Termination\nVendor may terminate at any time without notice.",
        )
        .await
        .unwrap();

    let payment = &report.results[0];
    assert_eq!(payment.summary.as_deref(), Some("Terms are close."));
    assert_ne!(payment.risk, RiskLevel::Unknown);

    let termination = &report.results[1];
    assert_eq!(termination.summary.as_deref(), Some(FALLBACK_SUMMARY));
    assert_eq!(
        termination.recommendation.as_deref(),
        Some(FALLBACK_RECOMMENDATION)
    );
    assert_eq!(termination.risk, RiskLevel::Unknown);
}

#[tokio::test]
async fn test_analyst_timeout_degrades_pair_and_run_completes() {
    let config = ComparisonConfig {
        analysis_timeout_ms: 50,
        ..ComparisonConfig::default()
    };
    let report = ContractComparer::new(Arc::new(config), Arc::new(PlainTextExtractor))
        .with_analyst(Arc::new(StalledAnalyst))
        .compare(
            b"1. Payment Terms\nPayment due within 30 days of invoice.",
            b"1. Payment Terms\nPayment due within 45 days of invoice.",
        )
        .await
        .unwrap();

    let result = &report.results[0];
    assert_eq!(result.summary.as_deref(), Some(FALLBACK_SUMMARY));
    assert_eq!(result.risk, RiskLevel::Unknown);
    // The status still comes from the lexical score
    assert_eq!(result.status, AlignmentStatus::Partial);
}

#[tokio::test]
async fn test_analysis_text_escalates_partial_risk() {
    let report = comparer()
        .with_analyst(Arc::new(CannedAnalyst {
            risk: "HIGH - critical divergence in payment windows",
        }))
        .compare(
            b"1. Payment Terms\nPayment due within 30 days of invoice date.",
            b"1. Payment Terms\nPayment due within 45 days of invoice date.",
        )
        .await
        .unwrap();

    let result = &report.results[0];
    assert_eq!(result.status, AlignmentStatus::Partial);
    assert_eq!(result.risk, RiskLevel::High);
}

#[tokio::test]
async fn test_report_carries_id_timestamp_and_headline() {
    let report = comparer()
        .compare(
            b"1. Payment Terms\nPayment due within 30 days of invoice.",
            b"1. Payment Terms\nPayment due within 45 days of invoice.",
        )
        .await
        .unwrap();

    assert!(uuid::Uuid::parse_str(&report.id).is_ok());
    assert!(report.compared_at > 0);
    assert_eq!(report.headline.len(), 1);
    assert_eq!(report.headline[0].client_count, 1);
    assert_eq!(report.headline[0].vendor_count, 1);
}
