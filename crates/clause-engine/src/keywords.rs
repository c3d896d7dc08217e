//! Keyword tables for clause classification
//!
//! Both tables are priority-ordered: classification walks each table top to
//! bottom and the first row with a case-insensitive substring hit wins.

use shared_types::{ClauseType, ReportCategory};

/// Full classification table, one row per clause type
///
/// Row order is the tie-breaker: text matching several keyword sets
/// classifies as the earliest-listed type. No hit falls back to
/// `ClauseType::GeneralTerms`, which is why that type has no row here.
pub const CLAUSE_KEYWORDS: &[(ClauseType, &[&str])] = &[
    (
        ClauseType::PaymentTerms,
        &[
            "payment",
            "invoice",
            "fees",
            "compensation",
            "remuneration",
            "late charge",
        ],
    ),
    (
        ClauseType::DeliveryTerms,
        &["delivery", "deliver", "shipment", "shipping", "lead time"],
    ),
    (
        ClauseType::RiskAndLiability,
        &[
            "liability",
            "liable",
            "indemnif",
            "damages",
            "risk of loss",
        ],
    ),
    (
        ClauseType::Acceptance,
        &["acceptance", "accepted", "inspection", "rejection"],
    ),
    (
        ClauseType::Termination,
        &[
            "termination",
            "terminate",
            "expiration",
            "expiry",
            "cancellation",
        ],
    ),
    (
        ClauseType::Confidentiality,
        &[
            "confidential",
            "non-disclosure",
            "nondisclosure",
            "secrecy",
        ],
    ),
    (
        ClauseType::IntellectualProperty,
        &[
            "intellectual property",
            "copyright",
            "patent",
            "trademark",
            "license",
            "licence",
        ],
    ),
    (
        ClauseType::ServiceLevel,
        &[
            "service level",
            "sla",
            "uptime",
            "availability",
            "response time",
        ],
    ),
    (
        ClauseType::DataProtection,
        &[
            "data protection",
            "personal data",
            "gdpr",
            "privacy",
            "data processing",
        ],
    ),
    (
        ClauseType::ForceMajeure,
        &["force majeure", "act of god", "beyond reasonable control"],
    ),
    (
        ClauseType::GoverningLaw,
        &["governing law", "governed by", "jurisdiction", "venue"],
    ),
];

/// Headline reporting table, deliberately overlapping with the full table
///
/// Used only for cross-document headline reporting; clauses matching no row
/// are excluded from that path.
pub const REPORT_KEYWORDS: &[(ReportCategory, &[&str])] = &[
    (
        ReportCategory::Termination,
        &["termination", "terminate", "notice period"],
    ),
    (
        ReportCategory::DeliveryTerms,
        &["delivery", "deliver", "shipment", "lead time"],
    ),
    (
        ReportCategory::PaymentTerms,
        &["payment", "invoice", "fees"],
    ),
    (
        ReportCategory::ConfidentialityAndIp,
        &[
            "confidential",
            "non-disclosure",
            "intellectual property",
            "copyright",
            "patent",
        ],
    ),
    (
        ReportCategory::LimitationOfLiability,
        &["limitation of liability", "liability", "liable", "damages"],
    ),
];
