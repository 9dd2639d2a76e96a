use anyhow::{Context, Result};
use ropey::Rope;
use std::io::{Read, Write};
use std::path::Path;

/// Read-only access to a sequence of code-point lines.
///
/// Implemented by the document and by single-line buffers so navigation
/// works on either.
pub trait LineSource {
    /// Number of lines (always at least one)
    fn line_count(&self) -> usize;

    /// Code points of a line, empty when out of range
    fn line_chars(&self, y: usize) -> Vec<char>;

    /// Line length in code points
    fn line_len(&self, y: usize) -> usize {
        self.line_chars(y).len()
    }
}

/// Ordered sequence of text lines, the document of record.
///
/// Backed by a rope with LF-only line breaks. Lines are addressed by
/// code-point offsets and never contain `'\n'`. The store is never empty:
/// an empty document holds a single empty line.
#[derive(Debug, Clone, Default)]
pub struct LineStore {
    rope: Rope,
}

impl LineStore {
    /// Create a store holding one empty line
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create store from newline-separated text
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Create store from individual lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = lines
            .into_iter()
            .map(|line| line.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::from_text(&joined)
    }

    /// Load store from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self::from_text(&contents))
    }

    /// Load store from any reader (e.g. stdin)
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut contents = String::new();
        reader
            .read_to_string(&mut contents)
            .context("Failed to read input stream")?;
        // A trailing newline on a stream terminates the last line
        if contents.ends_with('\n') {
            contents.pop();
        }
        Ok(Self::from_text(&contents))
    }

    /// Write lines newline-joined, without a trailing newline
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        self.rope
            .write_to(writer)
            .context("Failed to write document")
    }

    /// Get all text, lines joined by `'\n'`
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Get line count
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Index of the last line
    pub fn last_line(&self) -> usize {
        self.line_count() - 1
    }

    /// Get line length in code points (without newline character)
    pub fn line_len(&self, y: usize) -> usize {
        if y >= self.line_count() {
            return 0;
        }
        let len = self.rope.line(y).len_chars();
        if y < self.last_line() {
            len - 1
        } else {
            len
        }
    }

    /// Get line by index (without newline character)
    pub fn line(&self, y: usize) -> Option<String> {
        if y >= self.line_count() {
            return None;
        }
        let len = self.line_len(y);
        Some(self.rope.line(y).slice(..len).to_string())
    }

    /// Get all lines
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|y| self.line(y))
            .collect()
    }

    /// Get code point at (x, y)
    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.line_len(y) {
            return None;
        }
        Some(self.rope.char(self.rope.line_to_char(y) + x))
    }

    /// Get code points `[from, to)` of a line, clamped to the line
    pub fn slice(&self, y: usize, from: usize, to: usize) -> String {
        let len = self.line_len(y);
        let to = to.min(len);
        let from = from.min(to);
        if y >= self.line_count() || from == to {
            return String::new();
        }
        let start = self.rope.line_to_char(y);
        self.rope.slice(start + from..start + to).to_string()
    }

    /// Convert (x, y) to a char index, clamping x to the line
    fn char_idx(&self, x: usize, y: usize) -> usize {
        self.rope.line_to_char(y) + x.min(self.line_len(y))
    }

    /// Insert single-line text at (x, y)
    pub fn insert(&mut self, x: usize, y: usize, text: &str) {
        debug_assert!(!text.contains('\n'), "line text must not contain newlines");
        if y >= self.line_count() || text.is_empty() {
            return;
        }
        let idx = self.char_idx(x, y);
        self.rope.insert(idx, text);
    }

    /// Insert code point at (x, y)
    pub fn insert_char(&mut self, x: usize, y: usize, ch: char) {
        debug_assert!(ch != '\n', "line text must not contain newlines");
        if y >= self.line_count() {
            return;
        }
        let idx = self.char_idx(x, y);
        self.rope.insert_char(idx, ch);
    }

    /// Remove up to `len` code points starting at (x, y); returns removed text
    pub fn remove(&mut self, x: usize, y: usize, len: usize) -> String {
        let removed = self.slice(y, x, x.saturating_add(len));
        if removed.is_empty() {
            return removed;
        }
        let start = self.char_idx(x, y);
        let count = removed.chars().count();
        self.rope.remove(start..start + count);
        removed
    }

    /// Overwrite the code point at (x, y); returns the previous one
    pub fn set_char(&mut self, x: usize, y: usize, ch: char) -> Option<char> {
        let previous = self.char_at(x, y)?;
        let idx = self.char_idx(x, y);
        self.rope.remove(idx..idx + 1);
        self.rope.insert_char(idx, ch);
        Some(previous)
    }

    /// Overwrite a whole line; returns the previous content
    pub fn set_line(&mut self, y: usize, text: &str) -> String {
        debug_assert!(!text.contains('\n'), "line text must not contain newlines");
        let Some(previous) = self.line(y) else {
            return String::new();
        };
        let start = self.rope.line_to_char(y);
        let len = previous.chars().count();
        self.rope.remove(start..start + len);
        self.rope.insert(start, text);
        previous
    }

    /// Insert a new line so it ends up at index `y` (`y == line_count` appends)
    pub fn insert_line(&mut self, y: usize, text: &str) {
        debug_assert!(!text.contains('\n'), "line text must not contain newlines");
        let count = self.line_count();
        if y >= count {
            let end = self.rope.len_chars();
            self.rope.insert(end, &format!("\n{text}"));
        } else {
            let start = self.rope.line_to_char(y);
            self.rope.insert(start, &format!("{text}\n"));
        }
    }

    /// Remove line `y`; returns its content.
    ///
    /// Removing the only line leaves a single empty line.
    pub fn remove_line(&mut self, y: usize) -> String {
        let Some(content) = self.line(y) else {
            return String::new();
        };
        if self.line_count() == 1 {
            self.rope = Rope::new();
        } else if y < self.last_line() {
            let start = self.rope.line_to_char(y);
            let end = self.rope.line_to_char(y + 1);
            self.rope.remove(start..end);
        } else {
            // Last line: drop the preceding newline with it
            let start = self.rope.line_to_char(y) - 1;
            let end = self.rope.len_chars();
            self.rope.remove(start..end);
        }
        content
    }

    /// Split line `y` at `x` into two lines
    pub fn split_line(&mut self, x: usize, y: usize) {
        if y >= self.line_count() {
            return;
        }
        let idx = self.char_idx(x, y);
        self.rope.insert_char(idx, '\n');
    }

    /// Join line `y` with line `y + 1`
    pub fn join_next(&mut self, y: usize) {
        if y >= self.last_line() {
            return;
        }
        let idx = self.rope.line_to_char(y) + self.line_len(y);
        self.rope.remove(idx..idx + 1);
    }

    /// Swap the contents of two lines
    pub fn swap_lines(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (Some(first), Some(second)) = (self.line(a), self.line(b)) else {
            return;
        };
        self.set_line(a, &second);
        self.set_line(b, &first);
    }

    /// Strip trailing spaces, tabs, and carriage returns from every line
    pub fn trim_trailing_whitespace(&mut self) {
        for y in 0..self.line_count() {
            let Some(line) = self.line(y) else {
                continue;
            };
            let trimmed = line.trim_end_matches([' ', '\t', '\r']);
            if trimmed.len() != line.len() {
                let trimmed = trimmed.to_string();
                self.set_line(y, &trimmed);
            }
        }
    }

    /// Sum of `len + 1` for every line before `y`
    pub fn char_offset_of_line(&self, y: usize) -> usize {
        (0..y.min(self.line_count()))
            .map(|line| self.line_len(line) + 1)
            .sum()
    }
}

impl LineSource for LineStore {
    fn line_count(&self) -> usize {
        LineStore::line_count(self)
    }

    fn line_chars(&self, y: usize) -> Vec<char> {
        if y >= LineStore::line_count(self) {
            return Vec::new();
        }
        let len = LineStore::line_len(self, y);
        self.rope.line(y).chars().take(len).collect()
    }

    fn line_len(&self, y: usize) -> usize {
        LineStore::line_len(self, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_store_has_one_line() {
        let store = LineStore::new();
        assert_eq!(store.line_count(), 1);
        assert_eq!(store.line(0).as_deref(), Some(""));
        assert_eq!(store.line(1), None);
    }

    #[test]
    fn test_from_text_splits_on_newline_only() {
        let store = LineStore::from_text("abc\r\ndef\n");
        assert_eq!(store.lines(), vec!["abc\r", "def", ""]);
        assert_eq!(store.line_len(0), 4);
    }

    #[test]
    fn test_code_point_indexing() {
        let mut store = LineStore::from_text("héllo wörld");
        assert_eq!(store.line_len(0), 11);
        assert_eq!(store.char_at(1, 0), Some('é'));
        store.insert(7, 0, "ü");
        assert_eq!(store.line(0).as_deref(), Some("héllo wüörld"));
        assert_eq!(store.remove(1, 0, 4), "éllo");
        assert_eq!(store.line(0).as_deref(), Some("h wüörld"));
    }

    #[test]
    fn test_split_and_join() {
        let mut store = LineStore::from_lines(["abc", "def"]);
        store.split_line(1, 0);
        assert_eq!(store.lines(), vec!["a", "bc", "def"]);
        store.join_next(0);
        assert_eq!(store.lines(), vec!["abc", "def"]);
        // Joining the last line is a no-op
        store.join_next(1);
        assert_eq!(store.lines(), vec!["abc", "def"]);
    }

    #[test]
    fn test_insert_and_remove_lines() {
        let mut store = LineStore::from_lines(["a", "b"]);
        store.insert_line(0, "first");
        store.insert_line(3, "last");
        store.insert_line(2, "mid");
        assert_eq!(store.lines(), vec!["first", "a", "mid", "b", "last"]);

        assert_eq!(store.remove_line(4), "last");
        assert_eq!(store.remove_line(0), "first");
        assert_eq!(store.lines(), vec!["a", "mid", "b"]);
    }

    #[test]
    fn test_remove_only_line_keeps_store_non_empty() {
        let mut store = LineStore::from_text("only");
        assert_eq!(store.remove_line(0), "only");
        assert_eq!(store.line_count(), 1);
        assert_eq!(store.line(0).as_deref(), Some(""));
    }

    #[test]
    fn test_set_line_and_char() {
        let mut store = LineStore::from_lines(["abc", "def"]);
        assert_eq!(store.set_line(1, "xyz"), "def");
        assert_eq!(store.set_char(0, 0, 'A'), Some('a'));
        assert_eq!(store.set_char(3, 0, 'Z'), None);
        assert_eq!(store.lines(), vec!["Abc", "xyz"]);
    }

    #[test]
    fn test_out_of_range_access_is_clamped() {
        let mut store = LineStore::from_text("abc");
        assert_eq!(store.line_len(5), 0);
        assert_eq!(store.char_at(3, 0), None);
        assert_eq!(store.slice(0, 1, 99), "bc");
        assert_eq!(store.remove(2, 0, 10), "c");
        store.insert(99, 0, "!");
        assert_eq!(store.line(0).as_deref(), Some("ab!"));
    }

    #[test]
    fn test_swap_lines() {
        let mut store = LineStore::from_lines(["one", "two", "three"]);
        store.swap_lines(0, 2);
        assert_eq!(store.lines(), vec!["three", "two", "one"]);
    }

    #[test]
    fn test_trim_trailing_whitespace() {
        let mut store = LineStore::from_lines(["a  ", "b\t\r", "  c", ""]);
        store.trim_trailing_whitespace();
        assert_eq!(store.lines(), vec!["a", "b", "  c", ""]);
    }

    #[test]
    fn test_char_offset_of_line() {
        let store = LineStore::from_lines(["ab", "cde", "f"]);
        assert_eq!(store.char_offset_of_line(0), 0);
        assert_eq!(store.char_offset_of_line(2), 7);
    }

    #[test]
    fn test_file_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "line one\nline two").unwrap();

        let store = LineStore::from_file(file.path()).unwrap();
        assert_eq!(store.lines(), vec!["line one", "line two"]);

        let mut out = Vec::new();
        store.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_from_reader_drops_final_newline() {
        let store = LineStore::from_reader("a\nb\n".as_bytes()).unwrap();
        assert_eq!(store.lines(), vec!["a", "b"]);
    }

    #[test]
    fn test_from_file_missing() {
        assert!(LineStore::from_file("/nonexistent/linedit/file.txt").is_err());
    }
}
