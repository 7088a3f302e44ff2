use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::KeyValueStore;
use crate::errors::AppError;

/// In-memory storage. Clones share the same map, so a test can keep a
/// handle to the data it handed to a store.
#[derive(Clone, Default)]
pub struct MemStorage {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let data = self
            .data
            .read()
            .map_err(|_| AppError::Validation("storage lock poisoned".to_string()))?;

        Ok(data.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut data = self
            .data
            .write()
            .map_err(|_| AppError::Validation("storage lock poisoned".to_string()))?;

        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}
