//! Run configuration
//!
//! Thresholds and timeouts are built once, shared read-only across
//! concurrent comparison runs, and never mutated after construction.

use clause_engine::{StatusResolver, ALIGNED_THRESHOLD, PARTIAL_THRESHOLD};

/// Immutable configuration for comparison runs
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    /// Score at or above which a matched pair is Aligned
    pub aligned_threshold: f64,
    /// Score at or above which a matched pair is Partial
    pub partial_threshold: f64,
    /// Budget for one text-extraction call; overrun is fatal to the run
    pub extraction_timeout_ms: u64,
    /// Budget for one analysis call; overrun degrades only that pair
    pub analysis_timeout_ms: u64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            aligned_threshold: ALIGNED_THRESHOLD,
            partial_threshold: PARTIAL_THRESHOLD,
            extraction_timeout_ms: 10_000,
            analysis_timeout_ms: 30_000,
        }
    }
}

impl ComparisonConfig {
    /// Load timeout overrides from environment variables
    ///
    /// Expected variables (all optional):
    /// - COMPARE_EXTRACTION_TIMEOUT_MS
    /// - COMPARE_ANALYSIS_TIMEOUT_MS
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = env_ms("COMPARE_EXTRACTION_TIMEOUT_MS") {
            config.extraction_timeout_ms = ms;
        }
        if let Some(ms) = env_ms("COMPARE_ANALYSIS_TIMEOUT_MS") {
            config.analysis_timeout_ms = ms;
        }
        config
    }

    /// Build the status resolver for these thresholds
    pub fn resolver(&self) -> StatusResolver {
        StatusResolver::with_thresholds(self.aligned_threshold, self.partial_threshold)
    }
}

fn env_ms(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
