pub mod report;
pub mod types;

pub use report::{
    AlignmentStatus, ClauseAnalysis, ComparisonReport, ComparisonResult, HeadlineEntry, RiskLevel,
};
pub use types::{Clause, ClauseType, ContractDocument, MatchCandidate, ReportCategory, Section};
