//! File-related state for the editor.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::file_io;

/// State related to the file being edited.
#[derive(Debug, Default)]
pub(crate) struct FileState {
    /// Path of the open document
    pub path: Option<PathBuf>,
    /// File modification time at load/save/last check.
    pub mtime: Option<SystemTime>,
}

impl FileState {
    /// Track `path` as the open document.
    pub fn attach(&mut self, path: &Path) {
        self.path = Some(path.to_path_buf());
        self.update_mtime(path);
    }

    /// Update mtime after load or save.
    pub fn update_mtime(&mut self, path: &Path) {
        self.mtime = file_io::get_file_mtime(path);
    }

    /// Compare the stored mtime with the file's current one.
    ///
    /// The stored value is replaced by the current one as part of the check.
    /// A missing file never counts as changed.
    pub fn check_changed(&mut self, path: &Path) -> bool {
        let Some(current) = file_io::get_file_mtime(path) else {
            return false;
        };
        let changed = self.mtime != Some(current);
        self.mtime = Some(current);
        changed
    }

    /// Display title of the open document.
    pub fn title(&self) -> String {
        self.path
            .as_deref()
            .map(file_io::path_to_title)
            .unwrap_or_else(|| "Untitled".to_string())
    }
}
