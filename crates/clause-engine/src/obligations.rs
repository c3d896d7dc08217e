//! Obligation decomposition
//!
//! Breaks a section's content into atomic obligation fragments by running a
//! fixed chain of delimiter passes, each refining the previous pass's
//! output. The `regex` crate has no lookahead, so every boundary pattern
//! captures the first character of the following fragment and the splitter
//! cuts at that capture's start, keeping the delimiter with the preceding
//! fragment.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Delimiter chain, applied in this order
    static ref BOUNDARY_PATTERNS: Vec<Regex> = vec![
        // Period before a capitalized sentence
        Regex::new(r"\.\s+([A-Z])").unwrap(),
        // Semicolon before a capitalized continuation
        Regex::new(r";\s*([A-Z])").unwrap(),
        // Colon before a capitalized continuation
        Regex::new(r":\s*([A-Z])").unwrap(),
        // Period before a numbered item: ". 1." / ". 2)"
        Regex::new(r"\.\s*(\d+[.)]\s)").unwrap(),
        // Period before a lettered sub-item: ". (a)"
        Regex::new(r"\.\s*(\([a-z]\))").unwrap(),
    ];
}

const BULLET_MARKERS: [char; 3] = ['\u{2022}', '-', '*'];

/// Decompose section content into ordered obligation fragments
pub fn split_obligations(content: &str) -> Vec<String> {
    let mut fragments: Vec<String> = vec![content.to_string()];

    for pattern in BOUNDARY_PATTERNS.iter() {
        fragments = fragments
            .iter()
            .flat_map(|fragment| split_before(fragment, pattern))
            .filter(|fragment| !fragment.trim().is_empty())
            .collect();
    }

    fragments
        .iter()
        .flat_map(|fragment| split_bullets(fragment))
        .map(|fragment| fragment.trim().to_string())
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Split a fragment at the start of the pattern's first capture group
fn split_before(fragment: &str, pattern: &Regex) -> Vec<String> {
    let mut parts = Vec::new();
    let mut start = 0;

    for cap in pattern.captures_iter(fragment) {
        if let Some(boundary) = cap.get(1) {
            if boundary.start() > start {
                parts.push(fragment[start..boundary.start()].to_string());
                start = boundary.start();
            }
        }
    }
    parts.push(fragment[start..].to_string());
    parts
}

/// Split a bullet-led fragment on its own marker
fn split_bullets(fragment: &str) -> Vec<String> {
    let trimmed = fragment.trim_start();
    match trimmed.chars().next() {
        Some(first) if BULLET_MARKERS.contains(&first) => trimmed
            .split(first)
            .map(|part| part.to_string())
            .collect(),
        _ => vec![fragment.to_string()],
    }
}
