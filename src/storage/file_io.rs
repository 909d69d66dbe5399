//! File output with atomic replacement
//!
//! Output is written to a uniquely named temp file in the destination's
//! directory and renamed into place, so the destination either gets the
//! complete new contents or is left untouched. The temp file never reuses
//! an existing name.

use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::warn;

use crate::error::{FeesError, FeesResult};

/// Write a file atomically (write to temp, then rename)
///
/// `write` receives a buffered writer over the temp file. If it fails, or
/// flushing/renaming fails, the temp file is removed and the error returned.
pub fn write_atomic<P, F>(path: P, write: F) -> FeesResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut dyn Write) -> FeesResult<()>,
{
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut prefix = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    prefix.push(".");

    // Dropping the NamedTempFile on any early return deletes it
    let temp = Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| {
            FeesError::Io(format!(
                "Failed to create temp file in {}: {}",
                dir.display(),
                e
            ))
        })?;

    let mut writer = BufWriter::new(temp);
    write(&mut writer)?;

    let temp = writer
        .into_inner()
        .map_err(|e| FeesError::Io(format!("Failed to flush data: {}", e.error())))?;

    // Sync to disk before rename
    temp.as_file()
        .sync_all()
        .map_err(|e| FeesError::Io(format!("Failed to sync data: {}", e)))?;

    persist(temp, path)
}

fn persist(temp: NamedTempFile, path: &Path) -> FeesResult<()> {
    if path.exists() {
        warn!(path = %path.display(), "replacing existing output file");
    }

    temp.persist(path).map_err(|e| {
        FeesError::Io(format!("Failed to write {}: {}", path.display(), e.error))
    })?;

    Ok(())
}
