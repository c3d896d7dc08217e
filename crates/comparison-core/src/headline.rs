//! Headline cross-document reporting
//!
//! Collapses both clause lists onto the 5-member reporting taxonomy for a
//! category-level overview. Clauses matching no category are excluded here
//! while remaining in the full result list.

use clause_engine::classifier;
use shared_types::{Clause, ComparisonResult, HeadlineEntry, ReportCategory, RiskLevel};

/// Build per-category headline entries
///
/// `results` is index-aligned with `client`, one result per client clause,
/// which lets each category carry the worst risk observed among its client
/// clauses. Categories with no presence on either side are omitted.
pub fn build_headline(
    client: &[Clause],
    results: &[ComparisonResult],
    vendor: &[Clause],
) -> Vec<HeadlineEntry> {
    ReportCategory::all()
        .iter()
        .filter_map(|category| {
            let client_indexes: Vec<usize> = client
                .iter()
                .enumerate()
                .filter(|(_, clause)| categorize(clause) == Some(*category))
                .map(|(index, _)| index)
                .collect();
            let vendor_count = vendor
                .iter()
                .filter(|clause| categorize(clause) == Some(*category))
                .count();

            if client_indexes.is_empty() && vendor_count == 0 {
                return None;
            }

            let worst_risk = client_indexes
                .iter()
                .filter_map(|&index| results.get(index))
                .map(|result| result.risk)
                .max()
                .unwrap_or(RiskLevel::Low);

            Some(HeadlineEntry {
                category: *category,
                client_count: client_indexes.len(),
                vendor_count,
                worst_risk,
            })
        })
        .collect()
}

fn categorize(clause: &Clause) -> Option<ReportCategory> {
    classifier::report_category(clause.clause_type, &clause.section.content)
}
