use crate::collect::{collect_documents, FOLDER_INDEX_FILE, VAULT_INDEX_FILE};
use crate::settings::Settings;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use termindex_core::generate;
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Write,
    DryRun,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub term_count: usize,
    pub file_count: usize,
    /// Vault-relative path of the report.
    pub output_path: String,
    pub written: bool,
}

#[derive(Debug, Clone)]
pub struct Generation {
    pub result: GenerationResult,
    pub markdown: String,
}

pub fn index_title(folder: Option<&str>) -> String {
    match folder {
        Some(f) => format!("Index: {f}"),
        None => "Vault Index".to_string(),
    }
}

pub fn output_path(folder: Option<&str>) -> String {
    match folder {
        Some(f) => format!("{f}/{FOLDER_INDEX_FILE}"),
        None => VAULT_INDEX_FILE.to_string(),
    }
}

/// Build the index for the whole vault, or for `folder` within it, and
/// write it unless `mode` is a dry run. An existing report is overwritten.
pub fn generate_index(
    vault: &Path,
    folder: Option<&str>,
    settings: &Settings,
    generated_at: OffsetDateTime,
    mode: WriteMode,
) -> Result<Generation> {
    let folder = folder.map(|f| f.trim_end_matches('/')).filter(|f| !f.is_empty());
    let docs = collect_documents(vault, folder, &settings.excluded_folders)?;
    tracing::info!(files = docs.len(), folder = folder.unwrap_or("/"), "indexing notes");

    let report = generate(&docs, &settings.index_options(), &index_title(folder), generated_at)?;

    let rel = output_path(folder);
    let written = mode == WriteMode::Write;
    if written {
        let target = vault.join(&rel);
        fs::write(&target, &report.text).with_context(|| format!("writing {}", target.display()))?;
        tracing::info!(output = %rel, terms = report.term_count, "index written");
    }

    Ok(Generation {
        result: GenerationResult {
            term_count: report.term_count,
            file_count: report.document_count,
            output_path: rel,
            written,
        },
        markdown: report.text,
    })
}
