use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractDocument {
    pub id: String,
    pub filename: String,
    pub pages: u32,
    pub text_content: Vec<String>, // Per-page text
    pub created_at: u64,
}

impl ContractDocument {
    /// Combined text of all pages, joined with newlines
    pub fn full_text(&self) -> String {
        self.text_content.join("\n")
    }
}

/// A numbered section produced by heading-based segmentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading marker with trailing punctuation stripped (e.g. "3.1", "A", "iv")
    pub number: String,
    pub title: String,
    pub content: String,
    /// Zero-based position in the source document
    pub order: usize,
}

/// Legal subject-matter taxonomy for classified clauses
///
/// Variant order mirrors the classifier's priority table; the first keyword
/// hit in that order wins. `GeneralTerms` is the fallback for content that
/// matches no keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClauseType {
    #[serde(rename = "Payment Terms")]
    PaymentTerms,
    #[serde(rename = "Delivery Terms")]
    DeliveryTerms,
    #[serde(rename = "Risk and Liability")]
    RiskAndLiability,
    #[serde(rename = "Acceptance")]
    Acceptance,
    #[serde(rename = "Termination")]
    Termination,
    #[serde(rename = "Confidentiality")]
    Confidentiality,
    #[serde(rename = "Intellectual Property")]
    IntellectualProperty,
    #[serde(rename = "Service Level")]
    ServiceLevel,
    #[serde(rename = "Data Protection")]
    DataProtection,
    #[serde(rename = "Force Majeure")]
    ForceMajeure,
    #[serde(rename = "Governing Law")]
    GoverningLaw,
    #[serde(rename = "General Terms")]
    GeneralTerms,
}

impl ClauseType {
    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            ClauseType::PaymentTerms => "Payment Terms",
            ClauseType::DeliveryTerms => "Delivery Terms",
            ClauseType::RiskAndLiability => "Risk and Liability",
            ClauseType::Acceptance => "Acceptance",
            ClauseType::Termination => "Termination",
            ClauseType::Confidentiality => "Confidentiality",
            ClauseType::IntellectualProperty => "Intellectual Property",
            ClauseType::ServiceLevel => "Service Level",
            ClauseType::DataProtection => "Data Protection",
            ClauseType::ForceMajeure => "Force Majeure",
            ClauseType::GoverningLaw => "Governing Law",
            ClauseType::GeneralTerms => "General Terms",
        }
    }
}

impl std::fmt::Display for ClauseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Narrow taxonomy for headline cross-document reporting
///
/// Clauses matching none of the five categories are excluded from the
/// headline path; they remain in the full clause list used elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportCategory {
    #[serde(rename = "Termination")]
    Termination,
    #[serde(rename = "Delivery Terms")]
    DeliveryTerms,
    #[serde(rename = "Payment Terms")]
    PaymentTerms,
    #[serde(rename = "Confidentiality and IP")]
    ConfidentialityAndIp,
    #[serde(rename = "Limitation of Liability")]
    LimitationOfLiability,
}

impl ReportCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ReportCategory::Termination => "Termination",
            ReportCategory::DeliveryTerms => "Delivery Terms",
            ReportCategory::PaymentTerms => "Payment Terms",
            ReportCategory::ConfidentialityAndIp => "Confidentiality and IP",
            ReportCategory::LimitationOfLiability => "Limitation of Liability",
        }
    }

    pub fn all() -> [ReportCategory; 5] {
        [
            ReportCategory::Termination,
            ReportCategory::DeliveryTerms,
            ReportCategory::PaymentTerms,
            ReportCategory::ConfidentialityAndIp,
            ReportCategory::LimitationOfLiability,
        ]
    }
}

impl std::fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A classified section with its decomposed obligations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub section: Section,
    pub clause_type: ClauseType,
    pub obligations: Vec<String>,
}

impl Clause {
    /// Title plus content, the text block used for scoring and analysis
    pub fn full_text(&self) -> String {
        if self.section.content.is_empty() {
            self.section.title.clone()
        } else {
            format!("{}\n{}", self.section.title, self.section.content)
        }
    }
}

/// A client clause paired with its best same-type vendor counterpart
///
/// `vendor` is absent exactly when the vendor document has no clause of the
/// client clause's type; `score` is present exactly when `vendor` is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub client: Clause,
    pub vendor: Option<Clause>,
    pub score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_type_names() {
        assert_eq!(ClauseType::PaymentTerms.name(), "Payment Terms");
        assert_eq!(ClauseType::GeneralTerms.name(), "General Terms");
        assert_eq!(ClauseType::GoverningLaw.to_string(), "Governing Law");
    }

    #[test]
    fn test_clause_type_serialization_uses_display_names() {
        let json = serde_json::to_string(&ClauseType::IntellectualProperty).unwrap();
        assert_eq!(json, "\"Intellectual Property\"");
    }

    #[test]
    fn test_report_category_all_has_five_members() {
        assert_eq!(ReportCategory::all().len(), 5);
    }

    #[test]
    fn test_clause_full_text_skips_empty_content() {
        let clause = Clause {
            section: Section {
                number: "1".to_string(),
                title: "Termination".to_string(),
                content: String::new(),
                order: 0,
            },
            clause_type: ClauseType::Termination,
            obligations: vec![],
        };
        assert_eq!(clause.full_text(), "Termination");
    }

    #[test]
    fn test_document_full_text_joins_pages() {
        let doc = ContractDocument {
            id: "doc-1".to_string(),
            filename: "client.pdf".to_string(),
            pages: 2,
            text_content: vec!["page one".to_string(), "page two".to_string()],
            created_at: 0,
        };
        assert_eq!(doc.full_text(), "page one\npage two");
    }
}
