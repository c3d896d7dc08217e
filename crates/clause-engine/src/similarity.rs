//! Lexical overlap scoring between two text blocks
//!
//! Builds a small TF-IDF model treating the two blocks as the entire
//! corpus, then measures normalized overlap across the token union:
//! min(weightA, weightB) accumulates into the numerator and
//! max(weightA, weightB) into the denominator, with a missing side
//! weighing 0. Only terms with positive weight on both sides can feed the
//! numerator, while one-sided vocabulary inflates the denominator, so the
//! score is a symmetric value in [0, 1] that penalizes vocabulary present
//! on only one side. This is not cosine similarity.
//!
//! The idf is smoothed as ln((1 + N) / (1 + df)) + 1. With a two-document
//! corpus the raw ln(N / df) form would zero out every shared term and make
//! identical texts score 0, so the smoothed form is load-bearing here.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[a-z0-9_]+").unwrap();
}

/// Number of documents in the per-pair corpus
const CORPUS_SIZE: f64 = 2.0;

/// Stateless two-block overlap scorer
///
/// The per-pair corpus is built and discarded within a single call, so
/// repeated calls on the same inputs are deterministic and independent.
pub struct OverlapScorer;

impl OverlapScorer {
    /// Score lexical overlap between two text blocks, in [0, 1]
    pub fn score(a: &str, b: &str) -> f64 {
        let tf_a = term_frequencies(a);
        let tf_b = term_frequencies(b);

        // Sorted union so the summation order is canonical regardless of
        // argument order
        let mut terms: BTreeSet<&String> = tf_a.keys().collect();
        terms.extend(tf_b.keys());

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for term in terms {
            let freq_a = tf_a.get(term).copied().unwrap_or(0.0);
            let freq_b = tf_b.get(term).copied().unwrap_or(0.0);
            let document_frequency = if freq_a > 0.0 && freq_b > 0.0 { 2.0 } else { 1.0 };
            let idf = smoothed_idf(document_frequency);

            let weight_a = freq_a * idf;
            let weight_b = freq_b * idf;
            numerator += weight_a.min(weight_b);
            denominator += weight_a.max(weight_b);
        }

        if denominator == 0.0 {
            return 0.0;
        }
        numerator / denominator
    }
}

/// Normalized term frequencies for one block
///
/// Sorted map so summation order, and with it the floating-point result,
/// is identical across calls and argument orders.
fn term_frequencies(text: &str) -> BTreeMap<String, f64> {
    let lowered = text.to_lowercase();
    let mut counts: BTreeMap<String, f64> = BTreeMap::new();
    let mut total = 0.0;

    for token in WORD.find_iter(&lowered) {
        *counts.entry(token.as_str().to_string()).or_insert(0.0) += 1.0;
        total += 1.0;
    }

    if total > 0.0 {
        for value in counts.values_mut() {
            *value /= total;
        }
    }
    counts
}

/// Smoothed inverse document frequency over the two-block corpus
fn smoothed_idf(document_frequency: f64) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + document_frequency)).ln() + 1.0
}
