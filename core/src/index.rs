use serde::{Deserialize, Serialize};

/// A source document as handed over by the caller. `id` must be unique within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: String,
    pub display_name: String,
    pub raw_text: String,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self { id: id.into(), display_name: display_name.into(), raw_text: raw_text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub id: String,
    pub display_name: String,
    /// Natural-language text with markup removed.
    pub clean_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedDocument {
    pub id: String,
    pub display_name: String,
    pub unigrams: Vec<String>,
    /// Adjacent pairs of `unigrams`, joined with a single space.
    pub bigrams: Vec<String>,
}

/// How often one document mentions a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: String,
    pub display_name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTerm {
    pub term: String,
    pub score: f64, // summed tf-idf weight, ranking only
    pub total_occurrences: u32,
    /// Sorted by count descending, ties in input document order.
    pub documents: Vec<DocumentRef>,
}
