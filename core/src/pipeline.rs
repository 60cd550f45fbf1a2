use crate::extract::extract_document;
use crate::render::render;
use crate::score::score;
use crate::tokenizer::tokenize_document;
use crate::{IndexError, RawDocument, ScoredTerm, TokenizedDocument};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexOptions {
    /// Maximum number of terms kept in the report.
    pub top_n: usize,
    /// Minimum corpus-wide occurrence count for a term to qualify.
    pub min_occurrences: u32,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self { top_n: 250, min_occurrences: 10 }
    }
}

impl IndexOptions {
    pub fn validate(&self) -> Result<(), IndexError> {
        if self.top_n == 0 {
            return Err(IndexError::InvalidOptions("top_n must be positive".into()));
        }
        if self.min_occurrences == 0 {
            return Err(IndexError::InvalidOptions("min_occurrences must be positive".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub text: String,
    pub term_count: usize,
    pub document_count: usize,
}

pub fn tokenize_corpus(docs: &[RawDocument]) -> Vec<TokenizedDocument> {
    docs.iter().map(extract_document).map(tokenize_document).collect()
}

/// Run extraction, tokenization and scoring, without rendering.
pub fn rank_terms(docs: &[RawDocument], options: &IndexOptions) -> Result<Vec<ScoredTerm>, IndexError> {
    options.validate()?;
    if docs.is_empty() {
        return Err(IndexError::EmptyInput);
    }

    let tokenized = tokenize_corpus(docs);
    let terms = score(&tokenized, options.min_occurrences, options.top_n);
    tracing::debug!(documents = docs.len(), terms = terms.len(), "scored corpus");
    if terms.is_empty() {
        return Err(IndexError::NoQualifyingTerms { min_occurrences: options.min_occurrences });
    }
    Ok(terms)
}

/// Produce the rendered index for `docs`. Never returns a partial report.
pub fn generate(
    docs: &[RawDocument],
    options: &IndexOptions,
    title: &str,
    generated_at: OffsetDateTime,
) -> Result<Report, IndexError> {
    let terms = rank_terms(docs, options)?;
    let text = render(&terms, title, generated_at);
    Ok(Report { text, term_count: terms.len(), document_count: docs.len() })
}
