use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::StorageError;

/// Durable backend for the serialized wallet list. Injected into the
/// registry so tests can substitute an in-memory fake.
pub trait StorageBackend {
    /// Returns the stored contents, or `None` if nothing was ever written.
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, contents: &str) -> Result<(), StorageError>;
}

/// Wallet list persisted as a single JSON file.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage at the default location (`./wallets/addresses.json`).
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(crate::config::DEFAULT_STORAGE_PATH),
        }
    }

    /// Storage at a custom path (for testing).
    pub fn new_with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory backend for tests.
#[derive(Default)]
pub struct MemoryStorage {
    contents: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-seeded with contents, as if from a previous run.
    pub fn with_contents(contents: &str) -> Self {
        Self {
            contents: Mutex::new(Some(contents.to_string())),
        }
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents.lock().expect("storage mutex poisoned").clone())
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        *self.contents.lock().expect("storage mutex poisoned") = Some(contents.to_string());
        Ok(())
    }
}
