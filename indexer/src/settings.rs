//! Per-vault settings, persisted as JSON next to the notes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use termindex_core::IndexOptions;

pub const SETTINGS_FILE: &str = ".termindex.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub top_n: usize,
    pub min_occurrences: u32,
    pub excluded_folders: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let defaults = IndexOptions::default();
        Self { top_n: defaults.top_n, min_occurrences: defaults.min_occurrences, excluded_folders: Vec::new() }
    }
}

pub fn settings_path(vault: &Path) -> PathBuf { vault.join(SETTINGS_FILE) }

/// Split a comma-separated folder list, trimming blanks.
pub fn parse_excluded_folders(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

impl Settings {
    /// Load settings for `vault`; a missing file yields the defaults.
    pub fn load(vault: &Path) -> Result<Self> {
        let path = settings_path(vault);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let settings = serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }

    pub fn save(&self, vault: &Path) -> Result<()> {
        let path = settings_path(vault);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Returns false and keeps the current value when `n` is zero.
    pub fn set_top_n(&mut self, n: usize) -> bool {
        if n == 0 {
            return false;
        }
        self.top_n = n;
        true
    }

    /// Returns false and keeps the current value when `n` is zero.
    pub fn set_min_occurrences(&mut self, n: u32) -> bool {
        if n == 0 {
            return false;
        }
        self.min_occurrences = n;
        true
    }

    pub fn set_excluded_folders(&mut self, raw: &str) {
        self.excluded_folders = parse_excluded_folders(raw);
    }

    pub fn index_options(&self) -> IndexOptions {
        IndexOptions { top_n: self.top_n, min_occurrences: self.min_occurrences }
    }
}
