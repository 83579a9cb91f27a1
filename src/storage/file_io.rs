//! JSON files on disk
//!
//! Reads treat a missing file as empty. Writes go through a sibling temp file
//! and a rename, so a save either lands whole or leaves the old file alone.
//! Read problems are `Storage` errors; every write problem is `Persistence`.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::PocketbookError;

/// Load `T` from a JSON file; a missing file yields `T::default()`
pub fn read_json<T, P>(path: P) -> Result<T, PocketbookError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => {
            return Err(PocketbookError::Storage(format!(
                "Could not read {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_str(&text).map_err(|e| {
        PocketbookError::Storage(format!("{} is not valid data: {}", path.display(), e))
    })
}

/// Save `data` as pretty JSON, replacing the file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), PocketbookError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let temp_path = path.with_extension("json.tmp");

    replace_with(path, &temp_path, data).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PocketbookError::Persistence(format!("Could not save {}: {}", path.display(), e))
    })
}

fn replace_with<T: Serialize>(path: &Path, temp_path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(temp_path)?);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    fs::rename(temp_path, path)
}

/// Delete a file if present
pub fn remove_if_exists<P: AsRef<Path>>(path: P) -> Result<(), PocketbookError> {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(PocketbookError::Persistence(format!(
            "Could not remove {}: {}",
            path.display(),
            e
        ))),
    }
}
