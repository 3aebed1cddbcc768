use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::NamedTempFile;

use crate::domain::AppError;
use crate::ports::KeyValueStore;

/// Lock files older than this are left over from a killed process.
const STALE_LOCK_AFTER: Duration = Duration::from_secs(60);

/// Key-value store keeping one JSON document per key under a directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn key_path(&self, key: &str, extension: &str) -> Result<PathBuf, AppError> {
        let valid = !key.is_empty()
            && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::config_error(format!("Invalid store key '{}'", key)));
        }
        Ok(self.root.join(format!("{}.{}", key, extension)))
    }
}

/// Lock file under the store root, removed on drop.
#[derive(Debug)]
pub struct StoreLock {
    path: PathBuf,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            log::warn!("Failed to release lock {}: {}", self.path.display(), err);
        }
    }
}

fn is_stale(path: &Path) -> bool {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok())
        .is_some_and(|age| age > STALE_LOCK_AFTER)
}

impl KeyValueStore for FilesystemStore {
    type Lock = StoreLock;

    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.key_path(key, "json")?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                log::warn!("Ignoring non-UTF-8 store document {}", path.display());
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.key_path(key, "json")?;
        fs::create_dir_all(&self.root)?;
        // Each writer gets its own temp file; the rename replaces the document whole.
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(value.as_bytes())?;
        tmp.persist(&path).map_err(|err| err.error)?;
        log::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn try_lock(&self, name: &str) -> Result<Option<StoreLock>, AppError> {
        let path = self.key_path(name, "lock")?;
        fs::create_dir_all(&self.root)?;
        for _ in 0..2 {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => return Ok(Some(StoreLock { path })),
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                    if !is_stale(&path) {
                        return Ok(None);
                    }
                    log::warn!("Removing stale lock {}", path.display());
                    match fs::remove_file(&path) {
                        Ok(()) => {}
                        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                        Err(err) => return Err(err.into()),
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(None)
    }
}
