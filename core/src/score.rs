//! Corpus-wide aggregation and TF-IDF ranking.
//!
//! Weighting:
//!
//! ```text
//! idf(t)    = 1 + ln(N / (1 + df(t)))
//! tf(t, d)  = raw count of t in d
//! score(t)  = Σ_d tf(t, d) · idf(t)
//! ```
//!
//! `idf` stays positive for every `df <= N`, so a term present in every
//! document still carries weight. All maps are insertion ordered; ties in
//! both sorts resolve to first-seen order.

use crate::{DocumentRef, ScoredTerm, TokenizedDocument};
use indexmap::IndexMap;

/// Terms must appear in at least this many distinct documents.
pub const MIN_DOCUMENT_FREQUENCY: usize = 2;
/// Absolute occurrence floor for bigrams, independent of `min_occurrences`.
pub const MIN_BIGRAM_OCCURRENCES: u32 = 2;

#[derive(Default)]
struct TermOccurrence {
    // keyed by position in the input slice
    documents: IndexMap<usize, DocumentRef>,
    total: u32,
}

/// Smoothed inverse document frequency.
pub fn idf(num_docs: usize, doc_freq: usize) -> f64 {
    1.0 + (num_docs as f64 / (1.0 + doc_freq as f64)).ln()
}

fn count_terms(doc: &TokenizedDocument) -> IndexMap<&str, u32> {
    let mut counts: IndexMap<&str, u32> = IndexMap::new();
    for term in doc.unigrams.iter().chain(doc.bigrams.iter()) {
        *counts.entry(term.as_str()).or_insert(0) += 1;
    }
    counts
}

fn aggregate(documents: &[TokenizedDocument]) -> IndexMap<String, TermOccurrence> {
    let mut terms: IndexMap<String, TermOccurrence> = IndexMap::new();
    for (doc_idx, doc) in documents.iter().enumerate() {
        for (term, count) in count_terms(doc) {
            let occ = terms.entry(term.to_owned()).or_default();
            occ.total += count;
            occ.documents.insert(
                doc_idx,
                DocumentRef { id: doc.id.clone(), display_name: doc.display_name.clone(), count },
            );
        }
    }
    terms
}

fn qualifies(term: &str, occ: &TermOccurrence, min_occurrences: u32) -> bool {
    if occ.documents.len() < MIN_DOCUMENT_FREQUENCY || occ.total < min_occurrences {
        return false;
    }
    !(term.contains(' ') && occ.total < MIN_BIGRAM_OCCURRENCES)
}

/// Rank terms across `documents`, keeping at most `top_n`.
///
/// An empty corpus yields an empty list; deciding whether that is an
/// error is left to the caller.
pub fn score(documents: &[TokenizedDocument], min_occurrences: u32, top_n: usize) -> Vec<ScoredTerm> {
    if documents.is_empty() {
        return Vec::new();
    }
    let num_docs = documents.len();

    let mut scored: Vec<ScoredTerm> = aggregate(documents)
        .into_iter()
        .filter(|(term, occ)| qualifies(term, occ, min_occurrences))
        .map(|(term, occ)| {
            let weight = idf(num_docs, occ.documents.len());
            let score: f64 = occ.documents.values().map(|d| d.count as f64 * weight).sum();
            let mut refs: Vec<DocumentRef> = occ.documents.into_values().collect();
            refs.sort_by(|a, b| b.count.cmp(&a.count));
            ScoredTerm { term, score, total_occurrences: occ.total, documents: refs }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_n);
    scored
}
