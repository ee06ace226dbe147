//! # Word Store
//!
//! Best-effort persistence for the word being spelled and the saved-word
//! list, kept in `words.json` under the platform data directory.
//!
//! The store is deliberately forgiving: a missing or corrupt file opens as
//! an empty store, and save failures surface as errors for the status line
//! rather than interrupting the session.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One saved word and when it was saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedWord {
    pub text: String,
    pub saved_at: DateTime<Utc>,
}

/// The persisted file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    /// The word loaded into the speller on next start.
    #[serde(default)]
    current_word: String,
    /// Saved words, oldest first.
    #[serde(default)]
    saved: Vec<SavedWord>,
}

/// The saved-word collection plus the word to restore on startup.
#[derive(Debug)]
pub struct WordStore {
    /// `None` keeps the store in memory only (no data directory, tests).
    path: Option<PathBuf>,
    data: StoreData,
}

impl WordStore {
    /// Open the store at the platform data directory, falling back to an
    /// in-memory store when no data directory can be resolved.
    pub fn open() -> Self {
        match store_path() {
            Ok(path) => Self::open_at(path),
            Err(_) => Self::in_memory(),
        }
    }

    /// Open a store backed by a specific file.
    pub fn open_at(path: PathBuf) -> Self {
        let data = if path.exists() {
            load_data(&path).unwrap_or_default()
        } else {
            StoreData::default()
        };
        Self {
            path: Some(path),
            data,
        }
    }

    /// A store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: StoreData::default(),
        }
    }

    pub fn current_word(&self) -> &str {
        &self.data.current_word
    }

    pub fn set_current_word(&mut self, word: &str) {
        self.data.current_word = word.to_string();
    }

    /// Add a word to the saved list. Returns `false` without modifying the
    /// list when the exact text is already saved.
    pub fn add(&mut self, text: &str) -> bool {
        if self.data.saved.iter().any(|w| w.text == text) {
            return false;
        }
        self.data.saved.push(SavedWord {
            text: text.to_string(),
            saved_at: Utc::now(),
        });
        true
    }

    /// Remove a saved word by exact text. Returns whether it was present.
    pub fn remove(&mut self, text: &str) -> bool {
        let before = self.data.saved.len();
        self.data.saved.retain(|w| w.text != text);
        self.data.saved.len() != before
    }

    /// Saved words, oldest first.
    pub fn saved(&self) -> &[SavedWord] {
        &self.data.saved
    }

    /// Persist to disk. A no-op `Ok` for an in-memory store.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory: {}", parent.display())
            })?;
        }
        let contents =
            serde_json::to_string_pretty(&self.data).context("Failed to serialize word store")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write word store: {}", path.display()))?;
        Ok(())
    }
}

fn store_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "alfazulu")
        .context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("words.json"))
}

fn load_data(path: &Path) -> Result<StoreData> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word store: {}", path.display()))?;
    let data = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse word store: {}", path.display()))?;
    Ok(data)
}
