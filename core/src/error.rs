/// Failures surfaced by [`crate::pipeline::generate`].
///
/// Extraction and tokenization never fail; these are the only outcomes a
/// caller has to turn into a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// The document set was empty.
    #[error("No markdown files found in scope")]
    EmptyInput,

    /// Every candidate term was removed by the inclusion filters.
    #[error("No terms met the threshold (min {min_occurrences} occurrences across 2+ files)")]
    NoQualifyingTerms { min_occurrences: u32 },

    /// `top_n` or `min_occurrences` was zero.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}
