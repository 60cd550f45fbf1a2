use anyhow::{bail, Result};
use std::fs;
use std::path::Path;
use termindex_core::RawDocument;
use walkdir::{DirEntry, WalkDir};

pub const VAULT_INDEX_FILE: &str = "vault-index.md";
pub const FOLDER_INDEX_FILE: &str = "folder-index.md";

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().map(|s| s.starts_with('.')).unwrap_or(false)
}

/// Vault-relative path with `/` separators.
fn relative_id(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<&str> = rel.components().map(|c| c.as_os_str().to_str()).collect::<Option<Vec<&str>>>()?;
    Some(parts.join("/"))
}

fn normalize_folder(folder: &str) -> String {
    let trimmed = folder.trim_end_matches('/');
    format!("{trimmed}/")
}

fn in_scope(id: &str, folder: Option<&str>) -> bool {
    match folder {
        None => true,
        Some(f) => {
            let f = f.trim_end_matches('/');
            id == f || id.starts_with(&format!("{f}/"))
        }
    }
}

/// Collect markdown notes under `root`, restricted to `folder` when given.
///
/// Hidden entries, excluded folders and previously generated index files
/// are skipped. Files that cannot be read are logged and left out.
pub fn collect_documents(root: &Path, folder: Option<&str>, excluded: &[String]) -> Result<Vec<RawDocument>> {
    if !root.is_dir() {
        bail!("vault {} is not a directory", root.display());
    }
    let exclusions: Vec<String> = excluded.iter().map(|f| normalize_folder(f)).collect();

    let mut docs = Vec::new();
    let walker = WalkDir::new(root).into_iter().filter_entry(|e| e.depth() == 0 || !is_hidden(e));
    for entry in walker.filter_map(|e| e.ok()) {
        let p = entry.path();
        if !entry.file_type().is_file() || p.extension().and_then(|s| s.to_str()) != Some("md") {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name == VAULT_INDEX_FILE || name == FOLDER_INDEX_FILE {
            continue;
        }
        let Some(id) = relative_id(root, p) else {
            tracing::warn!(path = %p.display(), "skipping non UTF-8 path");
            continue;
        };
        if !in_scope(&id, folder) || exclusions.iter().any(|ex| id.starts_with(ex.as_str())) {
            continue;
        }
        let display_name = p.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        match fs::read_to_string(p) {
            Ok(raw_text) => docs.push(RawDocument { id, display_name, raw_text }),
            Err(err) => tracing::warn!(path = %id, error = %err, "failed to read note"),
        }
    }

    docs.sort_by(|a, b| a.id.cmp(&b.id));
    tracing::debug!(count = docs.len(), "collected notes");
    Ok(docs)
}
