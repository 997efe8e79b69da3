use crate::care::CareData;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// TOML snapshot of the pastoral record collections
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the snapshot, or an empty one if the file does not exist yet
    pub fn load(&self) -> Result<CareData> {
        if !self.file_path.exists() {
            tracing::info!(path = %self.file_path.display(), "data file not found, starting empty");
            return Ok(CareData::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let data: CareData = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        tracing::debug!(
            visits = data.visits.len(),
            counsels = data.counsels.len(),
            prayers = data.prayers.len(),
            memos = data.memos.len(),
            "loaded care data"
        );
        Ok(data)
    }

    pub fn save(&self, data: &CareData) -> Result<()> {
        let content = toml::to_string_pretty(data).context("Failed to serialize care data")?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        tracing::debug!(path = %self.file_path.display(), "saved care data");
        Ok(())
    }
}
