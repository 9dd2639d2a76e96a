//! Cursor movement and navigation.
//!
//! Horizontal moves wrap across line boundaries in the document but stay
//! inside the line while bound. Every move extends an active selection.

mod pointer;

use linedit_buffer::{find_global, find_matching, word_backward, word_forward, Position};

use crate::Editor;

impl Editor {
    pub fn move_left(&mut self) {
        if self.x == 0 {
            if self.y == 0 || self.is_bound() {
                return;
            }
            self.y -= 1;
            self.x = self.store.line_len(self.y);
        } else {
            self.x -= 1;
        }
        self.selection.diff(self.x, self.y);
    }

    pub fn move_right(&mut self) {
        if self.x >= self.active_line_len() {
            if self.y >= self.store.last_line() || self.is_bound() {
                return;
            }
            self.y += 1;
            self.x = 0;
        } else {
            self.x += 1;
        }
        self.selection.diff(self.x, self.y);
    }

    /// Move one line up, clamping x to the destination line
    pub fn move_up(&mut self) {
        if self.y == 0 || self.is_bound() {
            return;
        }
        self.y -= 1;
        self.x = self.x.min(self.store.line_len(self.y));
        self.selection.diff(self.x, self.y);
    }

    /// Move one line down, clamping x to the destination line
    pub fn move_down(&mut self) {
        if self.y >= self.store.last_line() || self.is_bound() {
            return;
        }
        self.y += 1;
        self.x = self.x.min(self.store.line_len(self.y));
        self.selection.diff(self.x, self.y);
    }

    pub fn jump_start(&mut self) {
        self.x = 0;
        self.selection.diff_x(self.x);
    }

    pub fn jump_end(&mut self) {
        self.x = self.active_line_len();
        self.selection.diff_x(self.x);
    }

    /// Go to 1-based line `line`, clamped to the document
    pub fn goto_line(&mut self, line: usize) {
        let line = line.clamp(1, self.store.line_count());
        self.x = 0;
        self.x_save = 0;
        self.y = line - 1;
        self.selection.diff(self.x, self.y);
        self.center(line);
    }

    /// Move to the next word boundary, crossing to the next line at line end
    pub fn advance_word(&mut self) {
        let chars = self.active_chars();
        match word_forward(&chars, self.x) {
            Some(next) => self.x = next,
            None if !self.is_bound() && self.y < self.store.last_line() => {
                self.x = 0;
                self.y += 1;
            }
            None => self.x = chars.len(),
        }
        self.selection.diff(self.x, self.y);
    }

    /// Move to the previous word start, crossing to the previous line at x = 0
    pub fn advance_word_backward(&mut self) {
        let chars = self.active_chars();
        match word_backward(&chars, self.x) {
            Some(prev) => self.x = prev,
            None if self.x == 0 && self.y > 0 && !self.is_bound() => {
                self.y -= 1;
                self.x = self.store.line_len(self.y);
            }
            None => self.x = 0,
        }
        self.selection.diff(self.x, self.y);
    }

    /// Jump to the bracket matching the one under the cursor
    pub fn jump_matching(&mut self) -> bool {
        if self.is_bound() {
            return false;
        }
        let Some(found) = find_matching(&self.store, self.x, self.y) else {
            return false;
        };
        self.x = found.x;
        self.y = found.y;
        self.selection.diff(self.x, self.y);
        self.center(found.y + 1);
        true
    }

    /// Nearest char from `set` at or after (or before) the cursor
    pub fn find_global(&self, backwards: bool, set: &str) -> Option<Position> {
        if self.is_bound() {
            return None;
        }
        find_global(&self.store, backwards, set, self.x, self.y)
    }

    /// Swap the current line with the one `diff` lines away (-1 or 1).
    ///
    /// Not recorded: a line swap cannot be undone.
    pub fn move_line(&mut self, diff: isize) {
        if self.is_bound() {
            return;
        }
        let Some(target) = self.y.checked_add_signed(diff) else {
            return;
        };
        if target > self.store.last_line() || target == self.y {
            return;
        }
        let neighbor = if target < self.y { self.y - 1 } else { self.y + 1 };
        self.store.swap_lines(self.y, neighbor);
        self.y = neighbor;
        self.render_cache.invalidate();
    }

    /// Place the cursor at the start of the first visible line
    pub fn reset_cursor(&mut self) {
        self.x = 0;
        self.y = self.viewport.skip;
        self.clamp_cursor();
    }

    /// Length of the line edits currently go to
    pub fn current_line_len(&self) -> usize {
        self.active_line_len()
    }

    /// Code point under the cursor, `None` at end of line
    pub fn current_char(&self) -> Option<char> {
        self.active_chars().get(self.x).copied()
    }

    /// Text before the cursor on the current line.
    ///
    /// `use_saved` reads the document line up to `x_save` instead.
    pub fn current_advance(&self, use_saved: bool) -> String {
        if use_saved {
            return self.store.slice(self.y, 0, self.x_save);
        }
        self.active_chars().iter().take(self.x).collect()
    }

    /// Update the visible capacity from pixel metrics
    pub fn set_bounds(&mut self, height: f32, line_height: f32) {
        self.viewport.set_bounds(height, line_height);
    }

    /// Update the visible capacity in lines
    pub fn set_bounds_direct(&mut self, max_lines: usize) {
        self.viewport.set_bounds_direct(max_lines);
    }
}
