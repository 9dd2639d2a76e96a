//! Text selection operations for the editor.

use linedit_buffer::{EditKind, Position};

use crate::Editor;

impl Editor {
    /// Anchor a selection at the cursor
    pub fn start_selection(&mut self) {
        self.selection.start(self.x, self.y);
    }

    pub fn stop_selection(&mut self) {
        self.selection.stop();
    }

    /// Delete the selected range and deactivate the selection.
    ///
    /// A multi-line range keeps the first line's prefix and the last line's
    /// suffix merged into one line; the cursor lands where they meet.
    /// Returns false when nothing was removed.
    pub fn delete_selection(&mut self) -> bool {
        self.selection.stop();
        if self.is_bound() || self.selection.is_empty() {
            return false;
        }
        let start = self.selection.smaller();
        let end = self.selection.bigger();

        if start.y == end.y {
            let to = end.x.min(self.store.line_len(start.y));
            let text = self.store.remove(start.x, start.y, to.saturating_sub(start.x));
            if text.is_empty() {
                return false;
            }
            self.record(EditKind::TextDelete { at: start, text });
            self.x = start.x.min(self.store.line_len(start.y));
            self.y = start.y;
            return true;
        }

        let last = end.y.min(self.store.last_line());
        let first_line = self.store.line(start.y).unwrap_or_default();
        let prefix = self.store.slice(start.y, 0, start.x);
        let suffix = self.store.slice(last, end.x, self.store.line_len(last));
        let removed: Vec<String> = (start.y + 1..=last)
            .filter_map(|y| self.store.line(y))
            .collect();

        for _ in start.y + 1..=last {
            self.store.remove_line(start.y + 1);
        }
        self.store.set_line(start.y, &format!("{prefix}{suffix}"));

        self.x = prefix.chars().count();
        self.y = start.y;
        self.record_at(
            Position::at(self.x, self.y),
            EditKind::MultiLineDelete {
                line: start.y,
                first_line,
                removed,
            },
        );
        true
    }

    /// Selected text joined by `\n`, empty when no selection is active
    pub fn selected_text(&self) -> String {
        if !self.selection.active {
            return String::new();
        }
        let start = self.selection.smaller();
        let end = self.selection.bigger();
        if start.y == end.y {
            return self.store.slice(start.y, start.x, end.x);
        }

        let mut parts = Vec::with_capacity(end.y - start.y + 1);
        parts.push(self.store.slice(start.y, start.x, self.store.line_len(start.y)));
        for y in start.y + 1..end.y {
            parts.push(self.store.line(y).unwrap_or_default());
        }
        parts.push(self.store.slice(end.y, 0, end.x));
        parts.join("\n")
    }

    /// Number of selected code points, counting one per line break
    pub fn selection_size(&self) -> usize {
        self.selected_text().chars().count()
    }
}
