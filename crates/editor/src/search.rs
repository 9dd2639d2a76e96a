//! Search and replace operations for the editor.
//!
//! Matching is literal and case-sensitive, scans forward line by line, and
//! never wraps around to text before the starting line.

use linedit_buffer::{find_in_line, EditKind, LineSource, Position, SearchStatus};

use crate::Editor;

impl Editor {
    /// Find `what` starting at the cursor line (or the document start).
    ///
    /// With `skip_first` the first match is passed over, which steps to the
    /// next occurrence when the cursor already sits on one. A match moves
    /// the cursor line there and stores its column in `x_save`; the column
    /// itself only follows while editing the document.
    pub fn search(&mut self, what: &str, skip_first: bool, from_cursor: bool) -> SearchStatus {
        let what: Vec<char> = what.chars().collect();
        let start = if from_cursor { self.y } else { 0 };
        let mut skipped = false;

        for line in start..self.store.line_count() {
            let Some(at) = find_in_line(&self.store.line_chars(line), &what, 0) else {
                continue;
            };
            if skip_first && !skipped {
                skipped = true;
                continue;
            }
            self.y = line;
            self.x_save = at;
            if !self.is_bound() {
                self.x = at;
            }
            self.clamp_cursor();
            self.center(line);
            return SearchStatus::at(at, line);
        }

        if skip_first {
            SearchStatus::NoFurtherMatches
        } else {
            SearchStatus::NotFound
        }
    }

    /// Replace the next match of `what` at or after (`y`, `x_save`).
    ///
    /// The cursor column is kept. With `allow_center` the cursor line moves
    /// to the match and the viewport follows it.
    pub fn replace_one(&mut self, what: &str, with: &str, allow_center: bool) -> SearchStatus {
        if self.is_bound() || what.is_empty() {
            return SearchStatus::NotFound;
        }
        match self.replace_next(what, with, self.y) {
            Some(found) => {
                if allow_center {
                    self.y = found.y;
                    self.center(found.y);
                }
                self.clamp_cursor();
                SearchStatus::at(found.x, found.y)
            }
            None => SearchStatus::NotFound,
        }
    }

    /// Replace every match from (`y`, `x_save`) to the end of the document.
    ///
    /// The replacements undo together as one step. Returns how many were made.
    pub fn replace_all(&mut self, what: &str, with: &str) -> usize {
        if self.is_bound() || what.is_empty() {
            return 0;
        }
        let mut line = self.y;
        let mut count = 0;
        while let Some(found) = self.replace_next(what, with, line) {
            line = found.y;
            count += 1;
        }

        if count > 0 {
            self.record(EditKind::CompositeReplaceAll { count });
        }
        if self.x > self.active_line_len() {
            self.x = self.active_line_len();
            self.x_save = self.x;
        }
        log::info!("Replaced {} occurrence(s) of {:?}", count, what);
        count
    }

    /// Replace the first match from column `x_save` of `from_line` onward.
    ///
    /// Leaves `x_save` just past the inserted text so repeated calls make
    /// progress even when `with` contains `what`.
    fn replace_next(&mut self, what: &str, with: &str, from_line: usize) -> Option<Position> {
        let what: Vec<char> = what.chars().collect();
        let with: String = with.chars().filter(|&ch| ch != '\n').collect();

        for line in from_line..self.store.line_count() {
            let chars = self.store.line_chars(line);
            let from = if line == from_line { self.x_save } else { 0 };
            let Some(at) = find_in_line(&chars, &what, from) else {
                continue;
            };

            let mut replaced: String = chars[..at].iter().collect();
            replaced.push_str(&with);
            replaced.extend(&chars[at + what.len()..]);
            let previous = self.store.set_line(line, &replaced);

            self.record_at(
                Position::at(at, line),
                EditKind::ReplaceLineContent { line, previous },
            );
            self.x_save = at + with.chars().count();
            return Some(Position::at(at, line));
        }
        None
    }
}
