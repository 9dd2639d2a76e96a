//! Text insertion and deletion.
//!
//! Each operation records exactly one history entry for the document (none
//! while bound), so a single undo reverts it.

use linedit_buffer::{
    find_any_of, find_any_of_last, is_separator, EditKind, LineSource, Position, WORD_SEPARATORS,
};

use crate::Editor;

impl Editor {
    /// Insert a code point at the cursor.
    ///
    /// An active selection is deleted first. `'\n'` splits the line and is
    /// dropped while bound.
    pub fn append(&mut self, ch: char) {
        if self.selection.active {
            self.delete_selection();
        }
        if ch == '\n' {
            if !self.is_bound() {
                self.newline();
            }
            return;
        }

        let x = self.x;
        {
            let (store, line) = self.active_store();
            store.insert_char(x, line, ch);
        }
        self.record(EditKind::CharInsert {
            at: self.position(),
            ch,
        });
        self.x += 1;
    }

    fn newline(&mut self) {
        let (x, y) = (self.x, self.y);
        let len = self.store.line_len(y);

        if x == len {
            let indent: String = if self.config.auto_indent {
                self.store
                    .line_chars(y)
                    .into_iter()
                    .take_while(|ch| *ch == ' ' || *ch == '\t')
                    .collect()
            } else {
                String::new()
            };
            self.store.insert_line(y + 1, &indent);
            self.record(EditKind::LineOpenBelow { line: y });
            self.x = indent.chars().count();
        } else if x == 0 {
            self.store.insert_line(y, "");
            self.record(EditKind::LineSplitAtStart { line: y });
            self.x = 0;
        } else {
            let prefix = self.store.slice(y, 0, x);
            let suffix = self.store.slice(y, x, len);
            self.store.split_line(x, y);
            self.record(EditKind::LineSplit {
                line: y,
                prefix,
                suffix,
            });
            self.x = 0;
        }
        self.y += 1;
    }

    /// Insert single-line text at the cursor; newlines are dropped
    pub fn append_text(&mut self, text: &str) {
        let text: String = text.chars().filter(|&ch| ch != '\n').collect();
        if text.is_empty() {
            return;
        }
        let x = self.x;
        {
            let (store, line) = self.active_store();
            store.insert(x, line, &text);
        }
        let inserted = text.chars().count();
        self.record(EditKind::TextInsert {
            at: self.position(),
            text,
        });
        self.x += inserted;
    }

    /// Paste `text`, which may span several lines.
    ///
    /// With `linewise`, text containing a newline is inserted as whole lines
    /// below the current one (or in place of an empty current line) and the
    /// cursor goes to the first pasted line.
    pub fn append_with_lines(&mut self, text: &str, linewise: bool) {
        if self.is_bound() {
            self.append_text(text);
            return;
        }
        if self.selection.active {
            self.delete_selection();
        }
        let mut parts: Vec<&str> = text.split('\n').collect();

        if linewise && parts.len() > 1 {
            if parts.last().is_some_and(|last| last.is_empty()) {
                parts.pop();
            }
            let first = if self.store.line_len(self.y) > 0 {
                self.y + 1
            } else {
                self.y
            };
            for (i, part) in parts.iter().enumerate() {
                self.store.insert_line(first + i, part);
            }
            self.record(EditKind::LinewiseInsert {
                first,
                lines: parts.iter().map(|part| part.to_string()).collect(),
            });
            self.y = first;
            self.x = 0;
            self.center(self.y);
            return;
        }

        if parts.len() == 1 {
            self.append_text(text);
            self.center(self.y);
            return;
        }

        let (x, y) = (self.x, self.y);
        let original = self.store.line(y).unwrap_or_default();
        let suffix = self.store.slice(y, x, self.store.line_len(y));
        let head = format!("{}{}", self.store.slice(y, 0, x), parts[0]);
        self.store.set_line(y, &head);

        let count = parts.len() - 1;
        for (i, part) in parts.iter().enumerate().skip(1) {
            self.store.insert_line(y + i, part);
        }
        let last = y + count;
        let end_x = parts[count].chars().count();
        self.store.insert(end_x, last, &suffix);

        self.record_at(
            Position::at(x, last),
            EditKind::MultiLineInsert { original, count },
        );
        self.y = last;
        self.x = end_x;
        self.center(self.y);
    }

    /// Backspace.
    ///
    /// Deletes an active selection, joins into the previous line at x = 0,
    /// otherwise removes the code point before the cursor.
    pub fn remove_one(&mut self) -> Option<char> {
        if self.selection.active {
            self.delete_selection();
            return None;
        }

        if self.x == 0 {
            if self.y == 0 || self.is_bound() {
                return None;
            }
            let above = self.y - 1;
            let joined = self.store.line(self.y).unwrap_or_default();
            let donor = if joined.is_empty() {
                None
            } else {
                self.store.line(above)
            };
            let x_target = self.store.line_len(above);
            self.record(EditKind::LineJoinForward {
                line: self.y,
                joined,
                donor,
            });
            self.store.join_next(above);
            self.y = above;
            self.x = x_target;
            return Some('\n');
        }

        let x = self.x;
        let removed = {
            let (store, line) = self.active_store();
            store.remove(x - 1, line, 1)
        };
        let ch = removed.chars().next()?;
        self.record(EditKind::CharDeleteBackward {
            at: self.position(),
            ch,
        });
        self.x -= 1;
        Some(ch)
    }

    /// Forward delete of the code point under the cursor.
    ///
    /// On an empty line the next line is pulled up. No-op at the end of a
    /// non-empty line or while a selection is active.
    pub fn remove_before_cursor(&mut self) -> Option<char> {
        if self.selection.active {
            return None;
        }
        let len = self.active_line_len();
        if self.x >= len && self.x > 0 {
            return None;
        }

        if len == 0 {
            if self.is_bound() || self.y >= self.store.last_line() {
                return None;
            }
            let removed = self.store.line(self.y + 1).unwrap_or_default();
            self.record(EditKind::LineJoinBackward {
                line: self.y,
                removed,
            });
            self.store.join_next(self.y);
            return Some('\n');
        }

        let x = self.x;
        let removed = {
            let (store, line) = self.active_store();
            store.remove(x, line, 1)
        };
        let ch = removed.chars().next()?;
        self.record(EditKind::CharDelete {
            at: self.position(),
            ch,
        });
        Some(ch)
    }

    /// Delete from the cursor to the next separator or the line end
    pub fn delete_word(&mut self) -> String {
        let chars = self.active_chars();
        if self.x >= chars.len() {
            return String::new();
        }
        let end = find_any_of(&chars[self.x..], WORD_SEPARATORS)
            .map(|offset| self.x + offset)
            .unwrap_or(chars.len());
        self.delete_span(self.x, end)
    }

    /// Delete from the start of the current word to the cursor
    pub fn delete_word_backward(&mut self) -> String {
        if self.x == 0 {
            return String::new();
        }
        let chars = self.active_chars();
        let x = self.x.min(chars.len());
        let start = find_any_of_last(&chars[..x], WORD_SEPARATORS)
            .map(|i| i + 1)
            .unwrap_or(0);
        let removed = self.delete_span(start, x);
        self.x = start;
        removed
    }

    /// Delete the word around the cursor (vim `iw`, or `aw` with `with_space`)
    pub fn delete_word_object(&mut self, with_space: bool) -> String {
        let chars = self.active_chars();
        let x = self.x.min(chars.len());
        let mut start = x;
        let mut end = x;

        if x > 0 && is_separator(chars[x - 1]) {
            if with_space {
                start -= 1;
            }
        } else {
            for i in (0..x).rev() {
                if is_separator(chars[i]) {
                    if i > 0 && with_space {
                        start -= 1;
                    }
                    break;
                }
                start = i;
            }
        }

        let mut on_separator = x < chars.len() && is_separator(chars[x]);
        for &ch in &chars[x..] {
            if is_separator(ch) {
                if !on_separator {
                    break;
                }
            } else {
                on_separator = false;
            }
            end += 1;
        }

        let removed = self.delete_span(start, end);
        self.x = start;
        removed
    }

    /// Remove `[from, to)` on the active line and record it as one deletion
    fn delete_span(&mut self, from: usize, to: usize) -> String {
        if to <= from {
            return String::new();
        }
        let removed = {
            let (store, line) = self.active_store();
            store.remove(from, line, to - from)
        };
        if !removed.is_empty() {
            self.record(EditKind::TextDelete {
                at: Position::at(from, self.y),
                text: removed.clone(),
            });
        }
        removed
    }

    /// Delete `count` whole lines from `start`; returns them joined by `\n`.
    ///
    /// The range is clamped to the document, which keeps at least one line.
    pub fn delete_lines(&mut self, start: usize, count: usize) -> String {
        if self.is_bound() {
            return String::new();
        }
        let (start, count) = self.clamp_line_range(start, count);
        if count == 0 {
            return String::new();
        }
        let removed: Vec<String> = (start..start + count)
            .filter_map(|y| self.store.line(y))
            .collect();
        let cleared = count == self.store.line_count();

        self.x = 0;
        self.y = start;
        for _ in 0..count {
            self.store.remove_line(start);
        }
        let text = removed.join("\n");
        self.record(EditKind::LinesDelete {
            start,
            removed,
            cleared,
        });
        self.clamp_cursor();
        text
    }

    /// Text of `count` whole lines from `start`, joined by `\n`
    pub fn copy_lines(&self, start: usize, count: usize) -> String {
        let (start, count) = self.clamp_line_range(start, count);
        (start..start + count)
            .filter_map(|y| self.store.line(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn clamp_line_range(&self, start: usize, count: usize) -> (usize, usize) {
        let total = self.store.line_count();
        let start = start.min(total);
        (start, count.min(total - start))
    }

    /// Overwrite the code point under the cursor
    pub fn set_current(&mut self, ch: char) {
        if self.is_bound() || ch == '\n' {
            return;
        }
        if let Some(previous) = self.store.set_char(self.x, self.y, ch) {
            self.record(EditKind::ReplaceChar {
                at: self.position(),
                previous,
            });
        }
    }

    /// Strip trailing blanks from every line. Not recorded.
    pub fn trim_trailing_whitespace(&mut self) {
        self.store.trim_trailing_whitespace();
        self.clamp_cursor();
        self.render_cache.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use crate::{Editor, EditorConfig};
    use linedit_buffer::Position;

    #[test]
    fn test_newline_at_end_of_line_opens_line_below() {
        let mut editor = Editor::from_text("abc\ndef");
        editor.set_cursor(3, 0);
        editor.append('\n');
        assert_eq!(editor.lines(), vec!["abc", "", "def"]);
        assert_eq!(editor.position(), Position::at(0, 1));
    }

    #[test]
    fn test_newline_mid_line_splits() {
        let mut editor = Editor::from_text("abc\ndef");
        editor.set_cursor(1, 0);
        editor.append('\n');
        assert_eq!(editor.lines(), vec!["a", "bc", "def"]);
        assert_eq!(editor.position(), Position::at(0, 1));

        assert!(editor.undo());
        assert_eq!(editor.lines(), vec!["abc", "def"]);
        assert_eq!(editor.position(), Position::at(1, 0));
    }

    #[test]
    fn test_newline_at_line_start_inserts_above() {
        let mut editor = Editor::from_text("abc");
        editor.append('\n');
        assert_eq!(editor.lines(), vec!["", "abc"]);
        assert_eq!(editor.position(), Position::at(0, 1));
        assert!(editor.undo());
        assert_eq!(editor.lines(), vec!["abc"]);
    }

    #[test]
    fn test_newline_auto_indent() {
        let mut editor = Editor::from_text("\t  if x {");
        editor.jump_end();
        editor.append('\n');
        assert_eq!(editor.lines(), vec!["\t  if x {", "\t  "]);
        assert_eq!(editor.position(), Position::at(3, 1));
        assert!(editor.undo());
        assert_eq!(editor.lines(), vec!["\t  if x {"]);

        let mut editor = Editor::with_config(EditorConfig {
            auto_indent: false,
            ..EditorConfig::default()
        });
        editor.append_text("  x");
        editor.append('\n');
        assert_eq!(editor.lines(), vec!["  x", ""]);
    }

    #[test]
    fn test_append_and_undo() {
        let mut editor = Editor::from_text("ac");
        editor.set_cursor(1, 0);
        editor.append('b');
        assert_eq!(editor.lines(), vec!["abc"]);
        assert_eq!(editor.x(), 2);
        assert!(editor.is_edited());

        assert!(editor.undo());
        assert_eq!(editor.lines(), vec!["ac"]);
        assert_eq!(editor.x(), 1);
    }

    #[test]
    fn test_append_text_single_record() {
        let mut editor = Editor::from_text("world");
        editor.append_text("hello ");
        assert_eq!(editor.lines(), vec!["hello world"]);
        assert_eq!(editor.x(), 6);
        assert_eq!(editor.history_len(), 1);
        editor.undo();
        assert_eq!(editor.lines(), vec!["world"]);
    }

    #[test]
    fn test_append_replaces_selection() {
        let mut editor = Editor::from_text("abcdef");
        editor.set_cursor(1, 0);
        editor.start_selection();
        editor.set_cursor(4, 0);
        editor.selection.diff(4, 0);
        editor.append('X');
        assert_eq!(editor.lines(), vec!["aXef"]);
        assert!(!editor.selection().active);

        editor.undo();
        editor.undo();
        assert_eq!(editor.lines(), vec!["abcdef"]);
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut editor = Editor::from_text("abc\ndef");
        editor.set_cursor(0, 1);
        assert_eq!(editor.remove_one(), Some('\n'));
        assert_eq!(editor.lines(), vec!["abcdef"]);
        assert_eq!(editor.position(), Position::at(3, 0));

        assert!(editor.undo());
        assert_eq!(editor.lines(), vec!["abc", "def"]);
        assert_eq!(editor.position(), Position::at(0, 1));
    }

    #[test]
    fn test_backspace_removes_empty_line() {
        let mut editor = Editor::from_text("abc\n\nx");
        editor.set_cursor(0, 1);
        editor.remove_one();
        assert_eq!(editor.lines(), vec!["abc", "x"]);
        editor.undo();
        assert_eq!(editor.lines(), vec!["abc", "", "x"]);
    }

    #[test]
    fn test_backspace_char_and_edges() {
        let mut editor = Editor::from_text("abc");
        assert_eq!(editor.remove_one(), None);

        editor.set_cursor(2, 0);
        assert_eq!(editor.remove_one(), Some('b'));
        assert_eq!(editor.lines(), vec!["ac"]);
        editor.undo();
        assert_eq!(editor.lines(), vec!["abc"]);
        assert_eq!(editor.x(), 2);
    }

    #[test]
    fn test_forward_delete() {
        let mut editor = Editor::from_text("abc\n\nxyz");
        editor.set_cursor(1, 0);
        assert_eq!(editor.remove_before_cursor(), Some('b'));
        assert_eq!(editor.lines(), vec!["ac", "", "xyz"]);

        // End of a non-empty line does nothing
        editor.jump_end();
        assert_eq!(editor.remove_before_cursor(), None);

        editor.set_cursor(0, 1);
        assert_eq!(editor.remove_before_cursor(), Some('\n'));
        assert_eq!(editor.lines(), vec!["ac", "xyz"]);

        editor.undo();
        assert_eq!(editor.lines(), vec!["ac", "", "xyz"]);
        editor.undo();
        assert_eq!(editor.lines(), vec!["abc", "", "xyz"]);
        assert_eq!(editor.position(), Position::at(1, 0));
    }

    #[test]
    fn test_paste_multi_line() {
        let mut editor = Editor::from_text("start end");
        editor.set_cursor(6, 0);
        editor.append_with_lines("one\ntwo\nthree ", false);
        assert_eq!(editor.lines(), vec!["start one", "two", "three end"]);
        assert_eq!(editor.position(), Position::at(6, 2));

        assert!(editor.undo());
        assert_eq!(editor.lines(), vec!["start end"]);
        assert_eq!(editor.position(), Position::at(6, 0));
    }

    #[test]
    fn test_paste_single_line() {
        let mut editor = Editor::from_text("ad");
        editor.set_cursor(1, 0);
        editor.append_with_lines("bc", false);
        assert_eq!(editor.lines(), vec!["abcd"]);
        assert_eq!(editor.x(), 3);
        editor.undo();
        assert_eq!(editor.lines(), vec!["ad"]);
    }

    #[test]
    fn test_paste_linewise() {
        let mut editor = Editor::from_text("a\nb");
        editor.append_with_lines("x\ny\n", true);
        assert_eq!(editor.lines(), vec!["a", "x", "y", "b"]);
        assert_eq!(editor.position(), Position::at(0, 1));

        assert!(editor.undo());
        assert_eq!(editor.lines(), vec!["a", "b"]);

        // An empty current line receives the first pasted line
        let mut editor = Editor::from_text("\nb");
        editor.append_with_lines("x\n", true);
        assert_eq!(editor.lines(), vec!["x", "", "b"]);
        editor.undo();
        assert_eq!(editor.lines(), vec!["", "b"]);
    }

    #[test]
    fn test_delete_word() {
        let mut editor = Editor::from_text("foo.bar baz");
        editor.set_cursor(4, 0);
        assert_eq!(editor.delete_word(), "bar");
        assert_eq!(editor.lines(), vec!["foo. baz"]);

        editor.jump_end();
        assert_eq!(editor.delete_word(), "");

        editor.set_cursor(4, 0);
        editor.undo();
        assert_eq!(editor.lines(), vec!["foo.bar baz"]);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut editor = Editor::from_text("let value");
        editor.jump_end();
        assert_eq!(editor.delete_word_backward(), "value");
        assert_eq!(editor.lines(), vec!["let "]);
        assert_eq!(editor.x(), 4);

        // No separator before the cursor deletes to the line start
        let mut editor = Editor::from_text("word");
        editor.jump_end();
        assert_eq!(editor.delete_word_backward(), "word");
        assert_eq!(editor.lines(), vec![""]);
        editor.undo();
        assert_eq!(editor.lines(), vec!["word"]);

        editor.set_cursor(0, 0);
        assert_eq!(editor.delete_word_backward(), "");
    }

    #[test]
    fn test_delete_word_object() {
        let mut editor = Editor::from_text("one two three");
        editor.set_cursor(5, 0);
        assert_eq!(editor.delete_word_object(false), "two");
        assert_eq!(editor.lines(), vec!["one  three"]);
        assert_eq!(editor.x(), 4);

        let mut editor = Editor::from_text("one two three");
        editor.set_cursor(5, 0);
        assert_eq!(editor.delete_word_object(true), " two");
        assert_eq!(editor.lines(), vec!["one three"]);
        editor.undo();
        assert_eq!(editor.lines(), vec!["one two three"]);
    }

    #[test]
    fn test_delete_and_copy_lines() {
        let mut editor = Editor::from_text("a\nb\nc\nd");
        assert_eq!(editor.copy_lines(1, 2), "b\nc");
        assert_eq!(editor.delete_lines(1, 2), "b\nc");
        assert_eq!(editor.lines(), vec!["a", "d"]);
        assert_eq!(editor.position(), Position::at(0, 1));

        assert!(editor.undo());
        assert_eq!(editor.lines(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_delete_all_lines_keeps_one() {
        let mut editor = Editor::from_text("a\nb");
        assert_eq!(editor.delete_lines(0, 10), "a\nb");
        assert_eq!(editor.lines(), vec![""]);
        editor.undo();
        assert_eq!(editor.lines(), vec!["a", "b"]);
    }

    #[test]
    fn test_set_current() {
        let mut editor = Editor::from_text("cat");
        editor.set_current('b');
        assert_eq!(editor.lines(), vec!["bat"]);
        editor.jump_end();
        editor.set_current('x');
        assert_eq!(editor.history_len(), 1);
        editor.undo();
        assert_eq!(editor.lines(), vec!["cat"]);
    }

    #[test]
    fn test_trim_is_not_recorded() {
        let mut editor = Editor::from_text("a  \nb\t\r");
        editor.set_cursor(3, 0);
        editor.trim_trailing_whitespace();
        assert_eq!(editor.lines(), vec!["a", "b"]);
        assert_eq!(editor.x(), 1);
        assert_eq!(editor.history_len(), 0);
    }

    #[test]
    fn test_sequence_undo_restores_snapshot() {
        let original = "fn main() {\n    println!(\"hi\");\n}";
        let mut editor = Editor::from_text(original);
        editor.set_cursor(4, 1);
        let start = editor.position();

        editor.append('x');
        editor.append('\n');
        editor.append_text("let y = 1;");
        editor.remove_one();
        editor.advance_word_backward();
        editor.delete_word();
        editor.set_cursor(0, 0);
        editor.delete_lines(0, 1);
        editor.append_with_lines("a\nb", false);
        editor.remove_before_cursor();

        editor.set_cursor(1, 0);
        editor.start_selection();
        editor.set_cursor(2, 1);
        editor.selection.diff(2, 1);
        assert!(editor.delete_selection());
        editor.toggle_comment("// ");

        let pushed = editor.history_len();
        for _ in 0..pushed {
            assert!(editor.undo());
        }
        assert_eq!(editor.text(), original);
        assert_eq!(editor.position(), start);
        assert!(!editor.selection().active);
        assert!(!editor.undo());
    }
}
