//! Redirecting edits to an external single-line buffer.
//!
//! A prompt (search query, command line) can reuse the editing operations
//! by binding its line to the session. While bound, character edits go to
//! that line and are never recorded; the document cursor column is parked
//! in `x_save` and restored on unbind.

use linedit_buffer::{LineSource, LineStore};

use crate::Editor;

/// Where character-level edits are applied
#[derive(Debug, Clone, Default)]
pub enum EditTarget {
    #[default]
    Document,
    ExternalLine(BoundLine),
}

/// A single line owned by the caller's prompt
#[derive(Debug, Clone, Default)]
pub struct BoundLine {
    pub(crate) line: LineStore,
    /// Render the document with the saved column instead of the prompt's
    pub(crate) use_x_save: bool,
}

impl BoundLine {
    /// Create a bound line; newlines are dropped
    pub fn new(text: &str, use_x_save: bool) -> Self {
        let text: String = text.chars().filter(|&ch| ch != '\n').collect();
        Self {
            line: LineStore::from_text(&text),
            use_x_save,
        }
    }

    pub fn text(&self) -> String {
        self.line.line(0).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.line.line_len(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LineSource for BoundLine {
    fn line_count(&self) -> usize {
        1
    }

    fn line_chars(&self, y: usize) -> Vec<char> {
        self.line.line_chars(y)
    }
}

impl Editor {
    /// Redirect edits to `text` and move the cursor to its end.
    ///
    /// Rebinding replaces the previous line without touching `x_save`.
    pub fn bind(&mut self, text: &str, use_x_save: bool) {
        if !self.is_bound() {
            self.x_save = self.x;
        }
        let bound = BoundLine::new(text, use_x_save);
        self.x = bound.len();
        self.target = EditTarget::ExternalLine(bound);
    }

    /// Return to document editing, restoring the saved column.
    ///
    /// Returns the bound line's final content.
    pub fn unbind(&mut self) -> Option<String> {
        match std::mem::take(&mut self.target) {
            EditTarget::Document => None,
            EditTarget::ExternalLine(bound) => {
                self.x = self.x_save;
                self.clamp_cursor();
                Some(bound.text())
            }
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.target, EditTarget::ExternalLine(_))
    }

    /// Content of the bound line
    pub fn bound_text(&self) -> Option<String> {
        match &self.target {
            EditTarget::Document => None,
            EditTarget::ExternalLine(bound) => Some(bound.text()),
        }
    }

    /// Code points of the line edits currently go to
    pub(crate) fn active_chars(&self) -> Vec<char> {
        match &self.target {
            EditTarget::Document => self.store.line_chars(self.y),
            EditTarget::ExternalLine(bound) => bound.line_chars(0),
        }
    }

    /// Length of the line edits currently go to
    pub(crate) fn active_line_len(&self) -> usize {
        match &self.target {
            EditTarget::Document => self.store.line_len(self.y),
            EditTarget::ExternalLine(bound) => bound.len(),
        }
    }

    /// Store and line index edits currently go to
    pub(crate) fn active_store(&mut self) -> (&mut LineStore, usize) {
        match &mut self.target {
            EditTarget::Document => (&mut self.store, self.y),
            EditTarget::ExternalLine(bound) => (&mut bound.line, 0),
        }
    }
}
