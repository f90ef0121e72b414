use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for the durable key-value slot.
///
/// A backend only moves opaque strings in and out under fixed keys. What the
/// strings mean (schema, validation, migration) is the stores' concern.
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing was ever written there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key` wholesale.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Where `key` lives. For FsBackend a real path, for MemBackend a virtual one.
    fn location(&self, key: &str) -> PathBuf;
}
