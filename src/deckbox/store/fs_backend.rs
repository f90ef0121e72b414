use super::backend::StorageBackend;
use crate::error::{DeckboxError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Filesystem slot: one `<key>.json` file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self, key: &str) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| write_error(key, e))?;
        }
        Ok(())
    }
}

fn read_error(key: &str, e: std::io::Error) -> DeckboxError {
    DeckboxError::PersistenceRead {
        key: key.to_string(),
        reason: e.to_string(),
    }
}

fn write_error(key: &str, e: std::io::Error) -> DeckboxError {
    DeckboxError::PersistenceWrite {
        key: key.to_string(),
        reason: e.to_string(),
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|e| read_error(key, e))?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir(key)?;

        let target = self.slot_path(key);
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(|e| write_error(key, e))?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(write_error(key, e));
        }

        log::debug!("Wrote {} bytes to {}", value.len(), target.display());
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        self.slot_path(key)
    }
}
