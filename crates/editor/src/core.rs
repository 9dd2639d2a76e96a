use linedit_buffer::{EditKind, EditRecord, History, LineStore, Position, Selection, Viewport};

use crate::{
    binding::EditTarget,
    config::{self, EditorConfig},
    state::{FileState, PathRegistry, RenderingCache},
};

/// One editing session over a single document.
///
/// Owns the document, the cursor, the selection, and the undo history, and
/// keeps them consistent across every mutation. Not meant for concurrent
/// use; callers serialize access.
#[derive(Debug)]
pub struct Editor {
    // === Core editing state ===
    /// Editor configuration
    pub(crate) config: EditorConfig,
    /// Document of record
    pub(crate) store: LineStore,
    /// Cursor column in code points
    pub(crate) x: usize,
    /// Cursor line
    pub(crate) y: usize,
    /// Saved column: search match column, or the document column while bound
    pub(crate) x_save: usize,
    /// Where character edits go
    pub(crate) target: EditTarget,
    /// Text selection
    pub(crate) selection: Selection,
    /// Undo history
    pub(crate) history: History,
    /// Visible window
    pub(crate) viewport: Viewport,
    /// Set by every recorded edit, cleared by open/reload/save
    pub(crate) edited: bool,

    // === Grouped state ===
    /// Open file path and modification time
    pub(crate) file_state: FileState,
    /// Per-path cursor memory
    pub(crate) paths: PathRegistry,
    /// Renderer-supplied layout and derived caches
    pub(crate) render_cache: RenderingCache,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create new empty editor with default configuration
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Create new empty editor with specified configuration
    pub fn with_config(config: EditorConfig) -> Self {
        let history = History::with_capacity(config::effective_capacity(&config));
        Self {
            config,
            store: LineStore::new(),
            x: 0,
            y: 0,
            x_save: 0,
            target: EditTarget::Document,
            selection: Selection::default(),
            history,
            viewport: Viewport::default(),
            edited: false,
            file_state: FileState::default(),
            paths: PathRegistry::default(),
            render_cache: RenderingCache::default(),
        }
    }

    /// Create editor holding `content`, split on `\n` only
    pub fn from_text(content: &str) -> Self {
        let mut editor = Self::new();
        editor.store = LineStore::from_text(content);
        editor
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Cursor column
    pub fn x(&self) -> usize {
        self.x
    }

    /// Cursor line
    pub fn y(&self) -> usize {
        self.y
    }

    pub fn x_save(&self) -> usize {
        self.x_save
    }

    pub fn position(&self) -> Position {
        Position::at(self.x, self.y)
    }

    /// Place the cursor, clamped to the document
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        self.y = y;
        self.x = x;
        self.clamp_cursor();
    }

    pub fn lines(&self) -> Vec<String> {
        self.store.lines()
    }

    pub fn line(&self, y: usize) -> Option<String> {
        self.store.line(y)
    }

    pub fn line_count(&self) -> usize {
        self.store.line_count()
    }

    /// Document text, lines joined by `\n`
    pub fn text(&self) -> String {
        self.store.text()
    }

    pub fn store(&self) -> &LineStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// First visible line
    pub fn skip(&self) -> usize {
        self.viewport.skip
    }

    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Number of undo records held
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Display title of the open document
    pub fn title(&self) -> String {
        self.file_state.title()
    }

    /// Clear document, cursor, scroll, and history
    pub fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
        self.x_save = 0;
        self.viewport.reset();
        self.history.clear();
        self.store = LineStore::new();
        self.render_cache.invalidate();
    }

    /// Record an edit at the current cursor.
    ///
    /// Suppressed entirely while bound to an external line.
    pub(crate) fn record(&mut self, kind: EditKind) {
        self.record_at(self.position(), kind);
    }

    /// Record an edit that restores the cursor to `cursor` on undo
    pub(crate) fn record_at(&mut self, cursor: Position, kind: EditKind) {
        if self.is_bound() {
            return;
        }
        self.history.push(EditRecord::new(cursor, kind));
        self.edited = true;
        self.render_cache.invalidate();
    }

    /// Undo the most recent recorded edit.
    ///
    /// Returns false when bound or when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.is_bound() {
            return false;
        }
        let Some(revert) = self.history.undo(&mut self.store) else {
            return false;
        };
        self.y = revert.cursor.y;
        self.x = revert.cursor.x;
        self.clamp_cursor();
        if let Some(line) = revert.center {
            self.center(line);
        }
        self.render_cache.invalidate();
        true
    }

    /// Scroll so `line` is visible
    pub fn center(&mut self, line: usize) {
        self.viewport.center(line, self.store.line_count());
    }

    /// Keep the cursor inside the document
    pub(crate) fn clamp_cursor(&mut self) {
        self.y = self.y.min(self.store.last_line());
        self.x = self.x.min(self.active_line_len());
    }
}
