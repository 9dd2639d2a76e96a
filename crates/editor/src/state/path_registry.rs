//! Per-path cursor memory and the registry of opened paths.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// Cursor and scroll state remembered for a path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SavedPosition {
    pub x: usize,
    pub y: usize,
    pub skip: usize,
}

/// In-memory registry, rebuilt empty on every process start.
///
/// Positions are only stored when a document is switched away from;
/// every path ever opened is listed in `known` regardless.
#[derive(Debug, Default)]
pub(crate) struct PathRegistry {
    positions: HashMap<PathBuf, SavedPosition>,
    known: BTreeSet<PathBuf>,
}

impl PathRegistry {
    pub fn store(&mut self, path: &Path, position: SavedPosition) {
        self.positions.insert(path.to_path_buf(), position);
    }

    pub fn position(&self, path: &Path) -> Option<SavedPosition> {
        self.positions.get(path).copied()
    }

    pub fn register(&mut self, path: &Path) {
        self.known.insert(path.to_path_buf());
    }

    /// Every path opened so far, sorted
    pub fn known(&self) -> Vec<PathBuf> {
        self.known.iter().cloned().collect()
    }
}
