use crate::{KeyValueStore, StoreError, StoreResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

type Entries = BTreeMap<String, String>;

/// JSON-file backed key-value store.
///
/// The whole map is rewritten on every change using the temp-file, fsync,
/// rename sequence, so a crash mid-write leaves the previous contents intact.
/// A file that no longer parses is moved aside to
/// `<name>.corrupted.<timestamp>` and treated as empty.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Loads the map, returning an empty map for a missing or corrupted file.
    fn load(&self) -> StoreResult<Entries> {
        if !self.path.exists() {
            debug!("No store file at {:?}", self.path);
            return Ok(Entries::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::file_read(self.path.clone(), e))?;

        match serde_json::from_str::<Entries>(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Store file corrupted at {:?}: {e}", self.path);
                self.backup_corrupted()?;
                Ok(Entries::new())
            }
        }
    }

    /// Writes the map with the atomic write pattern.
    fn save(&self, entries: &Entries) -> StoreResult<()> {
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        fs::create_dir_all(&dir).map_err(|e| StoreError::dir_creation(dir.clone(), e))?;

        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("storage.json");
        let temp_path = dir.join(format!("{file_name}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        Ok(())
    }

    fn backup_corrupted(&self) -> StoreResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let mut backup_name = self.path.clone().into_os_string();
        backup_name.push(format!(".corrupted.{timestamp}"));
        let backup_path = PathBuf::from(backup_name);

        fs::rename(&self.path, &backup_path).map_err(StoreError::backup_failed)?;

        warn!("Backed up corrupted store to {backup_path:?}");
        Ok(backup_path)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let _guard = self.lock();
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let _guard = self.lock();
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)?;

        info!("Stored key '{key}' in {:?}", self.path);
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let _guard = self.lock();
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
            info!("Removed key '{key}' from {:?}", self.path);
        }
        Ok(())
    }
}
