//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TrackerError;

/// Read JSON from a file, returning `None` if the file doesn't exist
///
/// A file that exists but cannot be opened or parsed is reported as
/// [`TrackerError::CorruptData`].
pub fn read_json_optional<T, P>(path: P) -> Result<Option<T>, TrackerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(TrackerError::CorruptData(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map(Some).map_err(|e| {
        TrackerError::CorruptData(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path)?;

    if let Err(e) = write_synced(&temp_path, data) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Io(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}

/// Serialize `data` to `path` and sync it to disk
fn write_synced<T: Serialize>(path: &Path, data: &T) -> Result<(), TrackerError> {
    let file = File::create(path)
        .map_err(|e| TrackerError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| TrackerError::Io(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TrackerError::Io(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Io(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

/// Sibling path used while writing `path`
fn temp_path_for(path: &Path) -> Result<PathBuf, TrackerError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| TrackerError::Io(format!("Not a file path: {}", path.display())))?;

    let mut temp_name = OsString::from(file_name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}
