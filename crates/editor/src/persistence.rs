//! Loading and saving documents.
//!
//! Expected I/O failures on open and reload are logged and reported as
//! `false`, leaving the document untouched. Save propagates its error.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{file_io, state::SavedPosition, Editor};

/// Where a save went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to the file at the given path
    Written,
    /// Streamed to stdout for the `-` path; the caller is expected to exit
    Streamed,
}

impl Editor {
    /// Open `path`, remembering the cursor for `previous`.
    ///
    /// A path opened before gets its remembered cursor and scroll back,
    /// otherwise the cursor starts at the top. `-` reads stdin.
    pub fn open(&mut self, previous: Option<&Path>, path: &Path) -> bool {
        if let Some(previous) = previous {
            let x = if self.is_bound() { self.x_save } else { self.x };
            self.paths.store(
                previous,
                SavedPosition {
                    x,
                    y: self.y,
                    skip: self.viewport.skip,
                },
            );
        }

        let store = match file_io::read_document(path) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("Failed to open {}: {:#}", path.display(), e);
                return false;
            }
        };

        let saved = self.paths.position(path).unwrap_or_default();
        self.paths.register(path);

        self.store = store;
        self.history.clear();
        self.selection.stop();
        self.x = saved.x;
        self.y = saved.y;
        self.x_save = saved.x;
        self.viewport.skip = saved.skip;
        self.after_load(path);

        log::info!(
            "Opened {} ({} lines)",
            path.display(),
            self.store.line_count()
        );
        true
    }

    /// Re-read `path` into the document, keeping the cursor where possible
    pub fn reload(&mut self, path: &Path) -> bool {
        let store = match file_io::read_document(path) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("Failed to reload {}: {:#}", path.display(), e);
                return false;
            }
        };

        self.store = store;
        self.history.clear();
        self.after_load(path);

        log::info!("Reloaded {}", path.display());
        true
    }

    fn after_load(&mut self, path: &Path) {
        let limit = self
            .store
            .line_count()
            .saturating_sub(self.viewport.max_lines);
        if self.viewport.skip > limit {
            self.viewport.skip = 0;
        }
        self.clamp_cursor();
        self.file_state.attach(path);
        self.render_cache.invalidate();
        self.edited = false;
    }

    /// Write the document to `path`, or to stdout for `-`.
    ///
    /// Trailing whitespace is trimmed first unless the extension is a
    /// configured markup extension.
    pub fn save(&mut self, path: &Path) -> Result<SaveOutcome> {
        if !self.config.is_markup(path) {
            self.trim_trailing_whitespace();
        }

        if file_io::is_stdio(path) {
            file_io::stream_document(&self.store)?;
            return Ok(SaveOutcome::Streamed);
        }

        file_io::write_document(&self.store, path)?;
        self.file_state.update_mtime(path);
        self.edited = false;
        log::info!("Saved {}", path.display());
        Ok(SaveOutcome::Written)
    }

    /// Whether `path` was modified since the last load, save, or check
    pub fn changed(&mut self, path: &Path) -> bool {
        let changed = self.file_state.check_changed(path);
        if changed {
            log::info!("{} changed on disk", path.display());
        }
        changed
    }

    /// Every path opened in this session, sorted
    pub fn known_paths(&self) -> Vec<PathBuf> {
        self.paths.known()
    }
}
