use std::env;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{create_file_parent, KeyValueStore};
use crate::errors::AppError;

/// File-backed storage: one `<key>.json` file per key under the storage
/// directory. The directory comes from `STORAGE_DIR`, defaulting to
/// `./.instance`.
pub struct JsonStorage {
    dir: PathBuf,
}

impl JsonStorage {
    pub fn new() -> Self {
        Self {
            dir: PathBuf::from(env::var("STORAGE_DIR").unwrap_or("./.instance".to_string())),
        }
    }

    pub fn at<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Default for JsonStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for JsonStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // An empty file reads the same as an absent one.
        if data.is_empty() {
            return Ok(None);
        }

        debug!(key, bytes = data.len(), "read storage key");
        Ok(Some(data))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.key_path(key);
        create_file_parent(&path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        file.write_all(value.as_bytes())?;

        debug!(key, bytes = value.len(), "wrote storage key");
        Ok(())
    }

    fn medium(&self) -> &str {
        "json"
    }
}
