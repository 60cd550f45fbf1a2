//! Vault-facing side of termindex: note collection, settings and report output.

pub mod collect;
pub mod generate;
pub mod settings;

pub use generate::{generate_index, Generation, GenerationResult, WriteMode};
pub use settings::Settings;
