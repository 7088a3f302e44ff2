pub mod json;
pub mod memory;

use std::fs;
use std::path::Path;

use dotenv::dotenv;

use crate::errors::AppError;

/// Storage key for the serialized contact list.
pub const CONTACTS_KEY: &str = "contacts";
/// Storage key for the serialized favourites set.
pub const FAVOURITES_KEY: &str = "favourites";

/// Key-value persistence adapter. Each key holds one JSON-serialized
/// array; the store reads on startup and writes whole values back on
/// every state change.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;

    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

pub fn parse_storage_type() -> Result<Box<dyn KeyValueStore>, AppError> {
    dotenv().ok();

    let choice = std::env::var("STORAGE_CHOICE").unwrap_or("json".to_string());
    match choice.to_lowercase().as_str() {
        "json" => Ok(Box::new(json::JsonStorage::new())),
        "mem" => Ok(Box::new(memory::MemStorage::new())),
        _ => Err(AppError::Validation(
            "Not a recognized storage medium".to_string(),
        )),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
