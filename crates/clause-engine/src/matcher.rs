//! Cross-document clause matching
//!
//! Pairs each client clause with the highest-scoring vendor clause of the
//! same type. Comparison cost is bounded to same-type pairs; clauses of
//! different types are never scored against each other.

use std::collections::HashMap;

use shared_types::{Clause, ClauseType, MatchCandidate};

use crate::similarity::OverlapScorer;

pub struct DocumentMatcher;

impl DocumentMatcher {
    /// Find the best vendor counterpart for every client clause
    ///
    /// Output order equals client-document order, one candidate per client
    /// clause. A clause type with no vendor representation yields a
    /// candidate with no vendor and no score. Score ties resolve to the
    /// earliest vendor clause in document order.
    pub fn match_clauses(client: &[Clause], vendor: &[Clause]) -> Vec<MatchCandidate> {
        let mut vendor_by_type: HashMap<ClauseType, Vec<&Clause>> = HashMap::new();
        for clause in vendor {
            vendor_by_type
                .entry(clause.clause_type)
                .or_default()
                .push(clause);
        }

        client
            .iter()
            .map(|client_clause| {
                match vendor_by_type.get(&client_clause.clause_type) {
                    Some(group) if !group.is_empty() => {
                        let client_text = client_clause.full_text();
                        let mut best = &group[0];
                        let mut best_score = OverlapScorer::score(&client_text, &group[0].full_text());
                        for candidate in &group[1..] {
                            let score =
                                OverlapScorer::score(&client_text, &candidate.full_text());
                            if score > best_score {
                                best = candidate;
                                best_score = score;
                            }
                        }
                        MatchCandidate {
                            client: client_clause.clone(),
                            vendor: Some((*best).clone()),
                            score: Some(best_score),
                        }
                    }
                    _ => MatchCandidate {
                        client: client_clause.clone(),
                        vendor: None,
                        score: None,
                    },
                }
            })
            .collect()
    }
}
