//! JSON-file persistence for todos and the password vault
//!
//! The whole store is one serde document on disk, rewritten atomically on
//! every mutation. Single-user scale; a tokio RwLock serializes access.
//! Missing fields default, so older store files keep loading.

pub mod passwords;
pub mod todos;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::{Result, ToolbenchError};

pub use passwords::{PasswordEntry, PasswordView};
pub use todos::Todo;

/// On-disk document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub passwords: Vec<PasswordEntry>,
    #[serde(default = "first_id")]
    pub next_todo_id: u64,
    #[serde(default = "first_id")]
    pub next_password_id: u64,
}

fn first_id() -> u64 {
    1
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            passwords: Vec::new(),
            next_todo_id: first_id(),
            next_password_id: first_id(),
        }
    }
}

impl StoreData {
    // Ids are never reused, matching autoincrement semantics.
    pub(crate) fn take_todo_id(&mut self) -> u64 {
        let id = self.next_todo_id;
        self.next_todo_id += 1;
        id
    }

    pub(crate) fn take_password_id(&mut self) -> u64 {
        let id = self.next_password_id;
        self.next_password_id += 1;
        id
    }
}

/// File-backed store shared across request handlers
pub struct Store {
    path: PathBuf,
    data: RwLock<StoreData>,
}

impl Store {
    /// Open the store file, starting from an empty document if absent.
    pub fn open(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| {
                ToolbenchError::Store(format!("corrupt store file {}: {}", path.display(), e))
            })?
        } else {
            StoreData::default()
        };
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// Run a read-only closure against the document.
    pub async fn read<T>(&self, f: impl FnOnce(&StoreData) -> T) -> T {
        f(&*self.data.read().await)
    }

    /// Mutate the document and persist it atomically.
    pub async fn write<T>(&self, f: impl FnOnce(&mut StoreData) -> T) -> Result<T> {
        let mut guard = self.data.write().await;
        let out = f(&mut guard);
        self.persist(&guard)?;
        Ok(out)
    }

    fn persist(&self, data: &StoreData) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, data)?;
        tmp.persist(&self.path)
            .map_err(|e| ToolbenchError::Store(format!("persist store: {}", e)))?;
        debug!("store written to {}", self.path.display());
        Ok(())
    }
}
