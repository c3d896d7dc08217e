//! Heading-based text segmentation
//!
//! Scans plain text line by line and cuts it into ordered sections. A line
//! starts a new section when it matches one of the priority-ordered marker
//! patterns below; everything up to the next marker is that section's body.
//! Lines before the first heading are discarded, and a document with no
//! detectable heading at all is a segmentation error.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::Section;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentationError {
    /// The extracted text contains no detectable heading
    #[error("no sections found in document text")]
    NoSectionsFound,
}

lazy_static! {
    /// Priority-ordered heading markers; the first pattern to match decides.
    ///
    /// Group 1 captures the marker, group 2 the remainder of the line. The
    /// decimal family is split across three rows so that a bare "30 days"
    /// content line cannot pass as a heading: a single-level number must
    /// carry punctuation or stand alone on its line.
    static ref HEADING_PATTERNS: Vec<Regex> = vec![
        // Multi-level decimal numbering: "1.1", "1.1.1."
        Regex::new(r"^(\d+(?:\.\d+)+)\.?(?:\s+(.*))?$").unwrap(),
        // Single-level decimal with punctuation: "1.", "2)"
        Regex::new(r"^(\d+)[.)](?:\s+(.*))?$").unwrap(),
        // Bare section number on its own line
        Regex::new(r"^(\d+)$").unwrap(),
        // Capital-letter marker: "A."
        Regex::new(r"^([A-Z])[.)](?:\s+(.*))?$").unwrap(),
        // Lettered subsection: "A.1"
        Regex::new(r"^([A-Z]\.\d+(?:\.\d+)*)\.?(?:\s+(.*))?$").unwrap(),
        // Parenthesized lower-case letter: "(a)"
        Regex::new(r"^\(([a-z])\)\s*(.*)$").unwrap(),
        // Parenthesized roman numeral: "(iv)"
        Regex::new(r"^\(([ivxlcdm]+)\)\s*(.*)$").unwrap(),
        // Capital roman numeral: "IV."
        Regex::new(r"^([IVXLCDM]+)[.)](?:\s+(.*))?$").unwrap(),
    ];
}

/// Split text into ordered sections on heading boundaries
pub fn segment(text: &str) -> Result<Vec<Section>, SegmentationError> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<OpenSection> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim_end();
        if let Some((marker, remainder)) = detect_heading(line) {
            if let Some(open) = current.take() {
                let order = sections.len();
                sections.push(open.close(order));
            }
            current = Some(OpenSection {
                number: marker,
                remainder,
                body: Vec::new(),
            });
        } else if let Some(open) = current.as_mut() {
            open.body.push(line.to_string());
        }
        // lines before the first heading are discarded
    }

    if let Some(open) = current.take() {
        let order = sections.len();
        sections.push(open.close(order));
    }

    if sections.is_empty() {
        return Err(SegmentationError::NoSectionsFound);
    }
    Ok(sections)
}

/// Match a line against the marker patterns, first hit wins
///
/// Returns the stripped marker and the rest of the heading line. Detection
/// is line-initial only; markers appearing mid-line never split.
fn detect_heading(line: &str) -> Option<(String, String)> {
    for pattern in HEADING_PATTERNS.iter() {
        if let Some(cap) = pattern.captures(line) {
            let marker = cap.get(1).map(|m| m.as_str().to_string())?;
            let remainder = cap
                .get(2)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            return Some((marker, remainder));
        }
    }
    None
}

/// Section being accumulated while scanning lines
struct OpenSection {
    number: String,
    remainder: String,
    body: Vec<String>,
}

impl OpenSection {
    fn close(self, order: usize) -> Section {
        let content = self.body.join("\n").trim().to_string();
        let title = select_title(&self.remainder, &self.body);
        Section {
            number: self.number,
            title,
            content,
            order,
        }
    }
}

/// Pick a section title from the heading remainder and body lines
///
/// Cascade: first line under 100 characters starting with an uppercase
/// letter, then any line with a recognizable casing shape (Title Case,
/// ALL CAPS, Sentence case), then the first non-empty line, then
/// "Untitled Section".
fn select_title(remainder: &str, body: &[String]) -> String {
    let mut candidates: Vec<&str> = vec![remainder];
    candidates.extend(body.iter().map(|l| l.as_str()));

    for candidate in &candidates {
        let trimmed = candidate.trim();
        if !trimmed.is_empty()
            && trimmed.chars().count() < 100
            && starts_uppercase(trimmed)
        {
            return trimmed.to_string();
        }
    }

    for candidate in &candidates {
        let trimmed = candidate.trim();
        if is_title_case(trimmed) || is_all_caps(trimmed) || is_sentence_case(trimmed) {
            return trimmed.to_string();
        }
    }

    for candidate in &candidates {
        let trimmed = candidate.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    "Untitled Section".to_string()
}

fn starts_uppercase(text: &str) -> bool {
    text.chars().next().map(char::is_uppercase).unwrap_or(false)
}

/// Every word beginning with a letter starts uppercase
fn is_title_case(text: &str) -> bool {
    let mut words = text.split_whitespace().peekable();
    if words.peek().is_none() {
        return false;
    }
    words
        .filter(|w| w.chars().next().map(char::is_alphabetic).unwrap_or(false))
        .all(|w| starts_uppercase(w))
}

fn is_all_caps(text: &str) -> bool {
    let mut has_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if !c.is_uppercase() {
                return false;
            }
        }
    }
    has_alpha
}

/// Uppercase start followed by at least one lowercase letter
fn is_sentence_case(text: &str) -> bool {
    starts_uppercase(text) && text.chars().any(char::is_lowercase)
}
