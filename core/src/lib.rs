//! Markdown-to-term-index pipeline.
//!
//! Stages run strictly left to right: [`extract`] strips markup,
//! [`tokenizer`] produces unigrams and bigrams, [`score`] aggregates and
//! ranks terms across the corpus, and [`render`] formats the report.
//! [`pipeline::generate`] composes them behind a single entry point.

pub mod error;
pub mod extract;
pub mod index;
pub mod pipeline;
pub mod render;
pub mod score;
pub mod stopwords;
pub mod tokenizer;

pub use error::IndexError;
pub use index::{DocumentRef, ExtractedDocument, RawDocument, ScoredTerm, TokenizedDocument};
pub use pipeline::{generate, IndexOptions, Report};
