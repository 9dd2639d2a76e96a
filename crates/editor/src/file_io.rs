//! File I/O operations for the editor.
//!
//! Provides helper functions for file loading, saving, and modification tracking.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result};

use linedit_buffer::LineStore;

use crate::constants;

/// Check whether `path` is the stdin/stdout sentinel.
pub(crate) fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == constants::STDIO_PATH
}

/// Check file size before loading.
///
/// Returns `Err` if file is too large or not readable as a file.
pub(crate) fn check_file_size(path: &Path) -> Result<u64> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata of {}", path.display()))?;
    if metadata.is_file() && metadata.len() > constants::MAX_EDITOR_FILE_SIZE {
        anyhow::bail!(
            "File is too large to open ({:.1} MB). Maximum allowed size is {} MB.",
            metadata.len() as f64 / constants::MEGABYTE as f64,
            constants::MAX_EDITOR_FILE_SIZE / constants::MEGABYTE
        );
    }
    Ok(metadata.len())
}

/// Read a document from `path`, or from stdin for the sentinel path.
pub(crate) fn read_document(path: &Path) -> Result<LineStore> {
    if is_stdio(path) {
        return LineStore::from_reader(io::stdin().lock()).context("Failed to read stdin");
    }
    check_file_size(path)?;
    LineStore::from_file(path)
}

/// Write a document to `path`.
pub(crate) fn write_document(store: &LineStore, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    store
        .write_to(&mut writer)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))
}

/// Write a document to stdout.
pub(crate) fn stream_document(store: &LineStore) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    store.write_to(&mut lock).context("Failed to write stdout")?;
    lock.flush().context("Failed to flush stdout")
}

/// Get current modification time of a file.
pub(crate) fn get_file_mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).ok().and_then(|m| m.modified().ok())
}

/// Lowercase extension of `path`, empty when there is none.
pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}

/// Extract filename from path for display.
pub(crate) fn path_to_title(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Untitled".to_string())
}
