//! Key-value slots that hold serialized snapshots.
//!
//! A slot stores one text payload per key. Two implementations:
//! - [`MemorySlot`]: process-local map, for tests and ephemeral stores
//! - [`FileSlot`]: one `<key>.json` file per key inside a directory

use std::fs::{self, File};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::PersistError;

/// Durable storage for snapshot payloads.
pub trait SnapshotSlot {
    /// Read the payload stored under `key`. `Ok(None)` if nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Replace the payload stored under `key`.
    fn write(&mut self, key: &str, payload: &str) -> Result<(), PersistError>;
}

/// In-memory slot.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    entries: FxHashMap<String, String>,
}

impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key (builder style).
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, payload: impl Into<String>) -> Self {
        self.entries.insert(key.into(), payload.into());
        self
    }

    /// Raw payload for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl SnapshotSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<(), PersistError> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

/// File-backed slot.
///
/// Writes go to a temporary file in the same directory, are synced, then
/// renamed over the target, so a reader never sees a half-written payload.
#[derive(Clone, Debug)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Slot rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{key}.json.tmp"))
    }
}

impl SnapshotSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<(), PersistError> {
        fs::create_dir_all(&self.dir)?;

        let tmp_path = self.temp_path_for(key);
        let result = write_synced(&tmp_path, payload)
            .and_then(|()| fs::rename(&tmp_path, self.path_for(key)));
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result.map_err(PersistError::from)
    }
}

fn write_synced(path: &Path, payload: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(payload.as_bytes())?;
    file.sync_all()
}

impl<S: SnapshotSlot + ?Sized> SnapshotSlot for &mut S {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<(), PersistError> {
        (**self).write(key, payload)
    }
}
