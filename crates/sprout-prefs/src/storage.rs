//! Key-value storage backends.
//!
//! Keys are restricted to `[A-Za-z0-9._-]` so the file backend can map them
//! directly to file names.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use sprout_types::error::{PadError, Result};

/// Durable key-value storage for preference payloads.
pub trait PrefStorage {
    /// Read the raw value for `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw value for `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value for `key` (absent keys are not an error).
    fn remove(&mut self, key: &str) -> Result<()>;
}

fn check_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(PadError::Config(format!("invalid storage key: {key:?}")))
    }
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

/// Fully in-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly (tests simulating a previous session).
    pub fn seed(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PrefStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        check_key(key)?;
        self.entries.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// File backend
// ---------------------------------------------------------------------------

/// One `<key>.json` file per key under a data directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`. The directory is created lazily on the
    /// first write, so read-only sessions never touch the filesystem.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PrefStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PadError::Storage(format!("read {key}: {e}"))),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| PadError::Storage(format!("create {}: {e}", self.dir.display())))?;
        std::fs::write(self.path_for(key), value)
            .map_err(|e| PadError::Storage(format!("write {key}: {e}")))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        check_key(key)?;
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PadError::Storage(format!("remove {key}: {e}"))),
        }
    }
}
