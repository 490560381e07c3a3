//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each entry
//! as one file under a base directory. It stands in for browser storage when the
//! client runs natively (desktop shells, integration tooling) and must retain
//! the device id and session across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── device_id          # file content is the stored value
//! ├── auth_token
//! ├── user_role
//! └── user_id
//! ```
//!
//! Keys must be plain file names. Keys containing path separators, `..`, or
//! nothing at all are refused and logged.

use std::path::{Path, PathBuf};

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn entry_path(&self, key: &str) -> Option<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\']);
        if !valid {
            tracing::warn!("Refusing storage key {:?}", key);
            return None;
        }
        Some(self.base.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)?).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(path) = self.entry_path(key) else {
            return;
        };
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(&path, value) {
            tracing::warn!("Failed to write {}: {}", path.display(), e);
        }
    }

    fn remove(&self, key: &str) {
        let Some(path) = self.entry_path(key) else {
            return;
        };
        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove {}: {}", path.display(), e),
        }
    }
}
