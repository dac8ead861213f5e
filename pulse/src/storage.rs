//! Durable key-value storage seam.
//!
//! Stands in for browser-local storage: string keys, string values, the
//! whole collection serialized on every change. There is no partial-write
//! or corruption recovery; a value that fails to parse on load is reported
//! as an error and the caller starts fresh.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use pulse_types::{RespondentId, Response};

/// Well-known storage keys.
pub mod keys {
    /// The wholesale-serialized response collection.
    pub const RESPONSES: &str = "survey-responses";

    /// The cached pseudo-respondent identifier.
    pub const RESPONDENT: &str = "survey-respondent-id";
}

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying I/O failure (file backend only).
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// A stored value failed to (de)serialize.
    #[error("Storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A persistent string key-value store.
///
/// Contract: `get` returns the stored value or `None`, `set` overwrites
/// wholesale. Both are synchronous.
pub trait KeyValueStore {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store; data lives only as long as the session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one file per key under a root directory.
///
/// Every `set` writes the full value synchronously.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Serialize the full response collection into the store.
///
/// Timestamps round-trip as ISO-8601 strings.
pub fn save_responses(
    store: &mut dyn KeyValueStore,
    responses: &[Response],
) -> Result<(), StorageError> {
    let json = serde_json::to_string(responses)?;
    store.set(keys::RESPONSES, &json)?;
    log::info!("Saved {} responses", responses.len());
    Ok(())
}

/// Load the response collection from the store, empty if never saved.
pub fn load_responses(store: &dyn KeyValueStore) -> Result<Vec<Response>, StorageError> {
    match store.get(keys::RESPONSES)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

/// Get the locally cached respondent id, minting and persisting a fresh one
/// on first use.
pub fn cached_respondent(store: &mut dyn KeyValueStore) -> Result<RespondentId, StorageError> {
    if let Some(id) = store.get(keys::RESPONDENT)? {
        return Ok(RespondentId::new(id));
    }
    let id = RespondentId::generate();
    store.set(keys::RESPONDENT, id.as_str())?;
    log::info!("Minted respondent id {id}");
    Ok(id)
}
