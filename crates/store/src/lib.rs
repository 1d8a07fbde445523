//! Best-score stores
//!
//! Two [`ScoreStore`] implementations:
//!
//! - [`MemoryStore`]: a plain map, for tests and `--store` less runs
//! - [`JsonFileStore`]: a JSON file on disk, rewritten on every change
//!
//! The file store never fails the game. A missing or unreadable file loads as
//! empty, and a failed write is logged and retried on the next change.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use grid_puzzle_core::ScoreStore;

/// In-memory store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    scores: BTreeMap<String, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scores(&self) -> &BTreeMap<String, u32> {
        &self.scores
    }
}

impl ScoreStore for MemoryStore {
    fn best_score(&self, key: &str) -> u32 {
        self.scores.get(key).copied().unwrap_or(0)
    }

    fn set_best_score(&mut self, key: &str, score: u32) {
        self.scores.insert(key.to_string(), score);
    }
}

/// On-disk layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ScoreFile {
    #[serde(default)]
    best: BTreeMap<String, u32>,
}

/// Write-through JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    file: ScoreFile,
}

impl JsonFileStore {
    /// Open the store at `path`, loading whatever is already there
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = match Self::load(&path) {
            Ok(Some(file)) => {
                log::debug!("loaded {} scores from {}", file.best.len(), path.display());
                file
            }
            Ok(None) => ScoreFile::default(),
            Err(err) => {
                log::warn!("ignoring score file {}: {:#}", path.display(), err);
                ScoreFile::default()
            }
        };
        Self { path, file }
    }

    fn load(path: &Path) -> Result<Option<ScoreFile>> {
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let file = serde_json::from_slice(&bytes)
            .with_context(|| format!("failed to decode {}", path.display()))?;
        Ok(Some(file))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scores(&self) -> &BTreeMap<String, u32> {
        &self.file.best
    }

    /// Write the current scores to disk
    ///
    /// Writes a sibling `.tmp` file first and renames it over the target.
    pub fn flush(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let json = serde_json::to_vec_pretty(&self.file)?;
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);
        fs::write(&tmp_path, json)
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}

impl ScoreStore for JsonFileStore {
    fn best_score(&self, key: &str) -> u32 {
        self.file.best.get(key).copied().unwrap_or(0)
    }

    fn set_best_score(&mut self, key: &str, score: u32) {
        self.file.best.insert(key.to_string(), score);
        if let Err(err) = self.flush() {
            log::warn!("failed to persist best score: {:#}", err);
        }
    }
}
