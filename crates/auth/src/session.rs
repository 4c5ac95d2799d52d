//! Session token persistence.
//!
//! A session store is a single string slot: the provider reads it once on
//! startup and overwrites or clears it on login, register and logout.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::{SessionToken, StoreError};

/// Well-known key the token is stored under.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Durable single-slot storage for the session token.
pub trait SessionStore {
    fn get(&self) -> Result<Option<SessionToken>, StoreError>;

    /// Replace the stored token (last writer wins).
    fn set(&self, token: &SessionToken) -> Result<(), StoreError>;

    /// Remove the stored token. Clearing an empty slot is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Process-local store, mainly for tests and embedding.
///
/// Clones share the same slot, so a test can keep a handle after moving one
/// into the provider.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    slot: Arc<Mutex<Option<SessionToken>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(SessionToken::new(token)))),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<SessionToken>>, StoreError> {
        self.slot
            .lock()
            .map_err(|_| StoreError::Unavailable("in-memory session slot poisoned".into()))
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self) -> Result<Option<SessionToken>, StoreError> {
        Ok(self.lock()?.clone())
    }

    fn set(&self, token: &SessionToken) -> Result<(), StoreError> {
        *self.lock()? = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.lock()? = None;
        Ok(())
    }
}

/// JSON key/value file on disk, the desktop analogue of browser local storage.
///
/// The file holds an object such as `{"accessToken": "..."}`; other keys are
/// preserved. A missing file reads as an empty store. Writes go through a
/// temporary file in the same directory and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
    key: String,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: ACCESS_TOKEN_KEY.to_string(),
        }
    }

    /// Store under the OS data directory (`<data_dir>/dashkit/session.json`).
    pub fn in_data_dir() -> Result<Self, StoreError> {
        Ok(Self::new(default_session_path()?))
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Entries to rewrite on `set`/`clear`, plus whether the file was corrupt.
    /// An unparsable file is treated as empty and overwritten.
    fn entries_for_update(&self) -> Result<(BTreeMap<String, String>, bool), StoreError> {
        match self.read_entries() {
            Ok(entries) => Ok((entries, false)),
            Err(StoreError::Format(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "session file is corrupt; overwriting"
                );
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            };
        }

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let raw = serde_json::to_string_pretty(entries)?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(raw.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<SessionToken>, StoreError> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(&self.key).map(SessionToken::new))
    }

    fn set(&self, token: &SessionToken) -> Result<(), StoreError> {
        let (mut entries, _) = self.entries_for_update()?;
        entries.insert(self.key.clone(), token.as_str().to_string());
        self.write_entries(&entries)?;
        tracing::debug!(path = %self.path.display(), "session token persisted");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let (mut entries, corrupt) = self.entries_for_update()?;
        if entries.remove(&self.key).is_some() || corrupt {
            self.write_entries(&entries)?;
            tracing::debug!(path = %self.path.display(), "session token removed");
        }
        Ok(())
    }
}

/// Default location of the durable session file.
pub fn default_session_path() -> Result<PathBuf, StoreError> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .ok_or_else(|| {
            StoreError::Unavailable(
                "failed to resolve OS data directory (tried data_dir and home_dir)".into(),
            )
        })?;

    let mut path = base;
    path.push("dashkit");
    path.push("session.json");
    Ok(path)
}
