use crate::domain::ports::KeyValueStore;
use crate::utils::error::{BmiError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    values: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// JSON file backed store. The whole file is rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    contents: StoreFile,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let contents = if path.exists() {
            let data = fs::read_to_string(&path)?;
            if data.trim().is_empty() {
                StoreFile::default()
            } else {
                serde_json::from_str(&data).map_err(|e| BmiError::StorageError {
                    message: format!("Corrupt store file {}: {}", path.display(), e),
                })?
            }
        } else {
            tracing::debug!("Store file {} not found, starting empty", path.display());
            StoreFile::default()
        };

        Ok(Self { path, contents })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Time of the last successful write, if any.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.contents.updated_at
    }

    fn write_file(&self, contents: &StoreFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_string_pretty(contents)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.contents.values.get(key).cloned())
    }

    /// In-memory contents only change once the file write has succeeded.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.contents.clone();
        next.values.insert(key.to_string(), value.to_string());
        next.updated_at = Some(Utc::now());

        self.write_file(&next)?;
        self.contents = next;
        tracing::debug!("Wrote {} to {}", key, self.path.display());
        Ok(())
    }
}
