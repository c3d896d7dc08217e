//! Comparison orchestration
//!
//! Sequences extraction, clause extraction, matching, per-pair analysis and
//! result assembly. Extraction and segmentation failures are fatal to the
//! run; one analysis failure degrades exactly one pair and the run
//! continues. Output order always equals client-document order.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, info, warn};

use clause_engine::status::review_recommendation;
use clause_engine::{ClauseEngine, DocumentMatcher, StatusResolver};
use shared_types::{
    AlignmentStatus, ClauseAnalysis, ComparisonReport, ComparisonResult, MatchCandidate, RiskLevel,
};

use crate::analyst::{fallback_analysis, is_fallback, ClauseAnalyst};
use crate::config::ComparisonConfig;
use crate::error::{ComparisonError, DocumentSide};
use crate::extract::{ExtractionError, TextExtractor};
use crate::headline;

/// Orchestrates one comparison run end to end
///
/// Holds only read-only configuration and collaborator handles, so a single
/// instance is safe to share across concurrent runs.
pub struct ContractComparer {
    config: Arc<ComparisonConfig>,
    engine: ClauseEngine,
    resolver: StatusResolver,
    extractor: Arc<dyn TextExtractor>,
    analyst: Option<Arc<dyn ClauseAnalyst>>,
}

impl ContractComparer {
    pub fn new(config: Arc<ComparisonConfig>, extractor: Arc<dyn TextExtractor>) -> Self {
        let resolver = config.resolver();
        Self {
            config,
            engine: ClauseEngine::new(),
            resolver,
            extractor,
            analyst: None,
        }
    }

    /// Attach the analysis collaborator
    pub fn with_analyst(mut self, analyst: Arc<dyn ClauseAnalyst>) -> Self {
        self.analyst = Some(analyst);
        self
    }

    /// Compare two documents given as raw bytes
    pub async fn compare(
        &self,
        client_bytes: &[u8],
        vendor_bytes: &[u8],
    ) -> Result<ComparisonReport, ComparisonError> {
        let client_text = self
            .extract_side(DocumentSide::Client, client_bytes)
            .await?;
        let vendor_text = self
            .extract_side(DocumentSide::Vendor, vendor_bytes)
            .await?;
        self.compare_text(&client_text, &vendor_text).await
    }

    /// Compare two documents whose text is already extracted
    pub async fn compare_text(
        &self,
        client_text: &str,
        vendor_text: &str,
    ) -> Result<ComparisonReport, ComparisonError> {
        let client_clauses = self.engine.extract_clauses(client_text).map_err(|_| {
            ComparisonError::NoSections {
                side: DocumentSide::Client,
            }
        })?;
        let vendor_clauses = self.engine.extract_clauses(vendor_text).map_err(|_| {
            ComparisonError::NoSections {
                side: DocumentSide::Vendor,
            }
        })?;
        info!(
            "extracted {} client and {} vendor clauses",
            client_clauses.len(),
            vendor_clauses.len()
        );

        let candidates = DocumentMatcher::match_clauses(&client_clauses, &vendor_clauses);
        debug!("built {} match candidates", candidates.len());

        let analyses = self.analyze_pairs(&candidates).await;

        let results: Vec<ComparisonResult> = candidates
            .iter()
            .zip(analyses)
            .map(|(candidate, analysis)| self.assemble(candidate, analysis))
            .collect();

        let headline = headline::build_headline(&client_clauses, &results, &vendor_clauses);

        Ok(ComparisonReport::new(results, headline))
    }

    async fn extract_side(
        &self,
        side: DocumentSide,
        bytes: &[u8],
    ) -> Result<String, ComparisonError> {
        let budget = Duration::from_millis(self.config.extraction_timeout_ms);
        match tokio::time::timeout(budget, self.extractor.extract(bytes)).await {
            Ok(Ok(text)) => {
                debug!("extracted {} chars from {} document", text.len(), side);
                Ok(text)
            }
            Ok(Err(source)) => Err(ComparisonError::Extraction { side, source }),
            Err(_) => Err(ComparisonError::Extraction {
                side,
                source: ExtractionError::Timeout(self.config.extraction_timeout_ms),
            }),
        }
    }

    /// One analysis future per matched pair, joined before assembly
    ///
    /// The futures are mutually independent and run concurrently; result
    /// order comes from the candidate sequence, never completion order. A
    /// timeout degrades its own pair to the fallback triple.
    async fn analyze_pairs(&self, candidates: &[MatchCandidate]) -> Vec<Option<ClauseAnalysis>> {
        let analyst = match &self.analyst {
            Some(analyst) => Arc::clone(analyst),
            None => return vec![None; candidates.len()],
        };
        let budget = Duration::from_millis(self.config.analysis_timeout_ms);

        let calls = candidates.iter().map(|candidate| {
            let analyst = Arc::clone(&analyst);
            async move {
                let vendor = match &candidate.vendor {
                    Some(vendor) => vendor,
                    None => return None,
                };
                let client_text = candidate.client.full_text();
                let vendor_text = vendor.full_text();
                let call = analyst.analyze(
                    candidate.client.clause_type,
                    &client_text,
                    &vendor_text,
                );
                match tokio::time::timeout(budget, call).await {
                    Ok(analysis) => Some(analysis),
                    Err(_) => {
                        warn!(
                            "analysis timed out for clause '{}'",
                            candidate.client.section.title
                        );
                        Some(fallback_analysis())
                    }
                }
            }
        });

        join_all(calls).await
    }

    fn assemble(
        &self,
        candidate: &MatchCandidate,
        analysis: Option<ClauseAnalysis>,
    ) -> ComparisonResult {
        let clause_type = candidate.client.clause_type;
        let title = candidate.client.section.title.clone();

        let degraded = analysis.as_ref().map(is_fallback).unwrap_or(false);
        let analysis_text = analysis
            .as_ref()
            .map(|a| format!("{} {}", a.risk, a.summary));
        let (status, mut risk) = self
            .resolver
            .resolve(candidate.score, analysis_text.as_deref());
        if degraded {
            risk = RiskLevel::Unknown;
        }

        let suggested_fix = self.resolver.suggested_fix(status, clause_type, &title);

        let (summary, recommendation) = match analysis {
            Some(analysis) => (Some(analysis.summary), Some(analysis.recommendation)),
            None if candidate.vendor.is_some() => {
                // No analyst configured; templated stand-ins
                let summary = candidate.score.map(|score| {
                    format!(
                        "{} clauses show {:.0}% lexical overlap.",
                        clause_type.name(),
                        score * 100.0
                    )
                });
                let recommendation = if status == AlignmentStatus::Aligned {
                    None
                } else {
                    Some(review_recommendation(clause_type, &title))
                };
                (summary, recommendation)
            }
            None => (None, None),
        };

        ComparisonResult {
            title,
            client_text: candidate.client.section.content.clone(),
            vendor_text: candidate
                .vendor
                .as_ref()
                .map(|vendor| vendor.section.content.clone())
                .unwrap_or_default(),
            status,
            risk,
            score: candidate.score,
            summary,
            recommendation,
            suggested_fix,
        }
    }
}
