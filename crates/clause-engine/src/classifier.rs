//! Clause classification against the keyword tables

use shared_types::{ClauseType, ReportCategory};

use crate::keywords::{CLAUSE_KEYWORDS, REPORT_KEYWORDS};

/// Classify section text (title plus content) into a clause type
///
/// Walks the priority-ordered table and returns the first type whose
/// keyword set has a case-insensitive substring hit anywhere in the text.
/// Text matching no keyword set classifies as General Terms.
pub fn classify(text: &str) -> ClauseType {
    let text_lower = text.to_lowercase();
    for (clause_type, keyword_set) in CLAUSE_KEYWORDS {
        if keyword_set
            .iter()
            .any(|keyword| text_lower.contains(keyword))
        {
            return *clause_type;
        }
    }
    ClauseType::GeneralTerms
}

/// Map a classified clause onto the 5-member headline taxonomy
///
/// Matches the clause type's display name together with the content against
/// the reporting table; clauses hitting no row return None and are excluded
/// from the headline path while remaining in the full clause list.
pub fn report_category(clause_type: ClauseType, content: &str) -> Option<ReportCategory> {
    let text_lower = format!("{} {}", clause_type.name(), content).to_lowercase();
    for (category, keyword_set) in REPORT_KEYWORDS {
        if keyword_set
            .iter()
            .any(|keyword| text_lower.contains(keyword))
        {
            return Some(*category);
        }
    }
    None
}
