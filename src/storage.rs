// Storage module: reads the whole record store from a JSON file and writes
// it back in full. There is no incremental persistence; every save rewrites
// the file from the in-memory store.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;
use crate::model::RecordStore;

/// Default data file, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = "Enrollments.json";

/// Load every registration stored at `path`, in file order.
///
/// Returns `Ok(None)` when the file does not exist so the caller can tell
/// "nothing saved yet" apart from an empty array. A read failure, malformed
/// JSON or an entry missing one of its keys fails the whole load.
pub fn load(path: &Path) -> Result<Option<RecordStore>, PersistenceError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("Data file {:?} not found, starting empty", path);
            return Ok(None);
        }
        Err(source) => {
            log::warn!("Failed to read {:?}: {}", path, source);
            return Err(PersistenceError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let store: RecordStore =
        serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("Loaded {} registrations from {:?}", store.len(), path);
    Ok(Some(store))
}

/// Overwrite `path` with the full store as a JSON array. An empty store
/// writes `[]`.
///
/// The array is written to a sibling `.tmp` file first and renamed over
/// the target, so the previous file survives a failed write.
pub fn save(path: &Path, store: &RecordStore) -> Result<(), PersistenceError> {
    let bytes = serde_json::to_vec_pretty(store)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PersistenceError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let tmp_path = temp_path_for(path);
    fs::write(&tmp_path, &bytes).map_err(|source| PersistenceError::Write {
        path: tmp_path.clone(),
        source,
    })?;

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    log::debug!("Saved {} registrations to {:?}", store.len(), path);
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
