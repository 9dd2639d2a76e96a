//! Bounded, append-only edit history.
//!
//! Every document mutation is described by one [`EditRecord`] carrying enough
//! state to invert it. Records are kept most-recent-first; once the capacity is
//! reached the oldest record is dropped and that edit can no longer be undone.
//! Undo is destructive: a popped record is gone, there is no redo log.

use std::collections::VecDeque;

use super::{LineStore, Position};

/// Default number of records kept
pub const DEFAULT_CAPACITY: usize = 5000;

/// Direction of a comment toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentDirection {
    Added,
    Removed,
}

impl CommentDirection {
    pub fn opposite(self) -> Self {
        match self {
            CommentDirection::Added => CommentDirection::Removed,
            CommentDirection::Removed => CommentDirection::Added,
        }
    }
}

/// What a record changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKind {
    /// Text inserted inside a line at `at`
    TextInsert { at: Position, text: String },
    /// Text removed from a line starting at `at`
    TextDelete { at: Position, text: String },
    /// Code point inserted at `at`
    CharInsert { at: Position, ch: char },
    /// Code point under the cursor removed (forward delete)
    CharDelete { at: Position, ch: char },
    /// Code point before `at` removed (backspace)
    CharDeleteBackward { at: Position, ch: char },
    /// Line `line` was merged into the line above; `donor` is the prior
    /// content of that line when it received text
    LineJoinForward {
        line: usize,
        joined: String,
        donor: Option<String>,
    },
    /// Empty line `line` was replaced by the line below it
    LineJoinBackward { line: usize, removed: String },
    /// A new line was opened below `line` (newline at end of line)
    LineOpenBelow { line: usize },
    /// An empty line was inserted above `line` (newline at offset 0)
    LineSplitAtStart { line: usize },
    /// Line `line` was split mid-line into `prefix` and `suffix`
    LineSplit {
        line: usize,
        prefix: String,
        suffix: String,
    },
    /// Selection deletion: `first_line` is the pre-edit content of `line`,
    /// `removed` the fully removed lines that followed it
    MultiLineDelete {
        line: usize,
        first_line: String,
        removed: Vec<String>,
    },
    /// Whole lines removed starting at `start`; `cleared` when nothing was left
    LinesDelete {
        start: usize,
        removed: Vec<String>,
        cleared: bool,
    },
    /// Multi-line paste. The record cursor sits on the last pasted line and
    /// undo steps back `count` lines from it to the original line.
    MultiLineInsert { original: String, count: usize },
    /// Whole lines inserted at `first`
    LinewiseInsert { first: usize, lines: Vec<String> },
    /// Line content overwritten (single replace)
    ReplaceLineContent { line: usize, previous: String },
    /// Code point overwritten
    ReplaceChar { at: Position, previous: char },
    /// Comment marker toggled on one line
    CommentToggleLine {
        line: usize,
        offset: usize,
        marker: String,
        direction: CommentDirection,
    },
    /// Comment marker toggled on `count` lines starting at `first_line`
    CommentToggleBlock {
        first_line: usize,
        offset: usize,
        marker: String,
        count: usize,
        direction: CommentDirection,
    },
    /// Groups the `count` records pushed before it (replace all)
    CompositeReplaceAll { count: usize },
}

/// One invertible document mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRecord {
    /// Cursor position recorded with the action
    pub cursor: Position,
    pub kind: EditKind,
}

impl EditRecord {
    pub fn new(cursor: Position, kind: EditKind) -> Self {
        Self { cursor, kind }
    }

    /// Apply the inverse of a non-composite record
    fn revert(self, store: &mut LineStore) -> Revert {
        let cursor = self.cursor;
        match self.kind {
            EditKind::TextInsert { at, text } => {
                store.remove(at.x, at.y, text.chars().count());
                Revert::centered(cursor, at.y)
            }
            EditKind::TextDelete { at, text } => {
                store.insert(at.x, at.y, &text);
                Revert::centered(cursor, at.y)
            }
            EditKind::CharInsert { at, .. } => {
                store.remove(at.x, at.y, 1);
                Revert::centered(cursor, at.y)
            }
            EditKind::CharDelete { at, ch } => {
                store.insert_char(at.x, at.y, ch);
                Revert::stay(cursor)
            }
            EditKind::CharDeleteBackward { at, ch } => {
                store.insert_char(at.x.saturating_sub(1), at.y, ch);
                Revert::centered(cursor, at.y)
            }
            EditKind::LineJoinForward {
                line,
                joined,
                donor,
            } => {
                store.insert_line(line, &joined);
                if let Some(donor) = donor {
                    store.set_line(line.saturating_sub(1), &donor);
                }
                Revert::centered(cursor, line)
            }
            EditKind::LineJoinBackward { line, removed } => {
                store.set_line(line, "");
                store.insert_line(line + 1, &removed);
                Revert::centered(cursor, line)
            }
            EditKind::LineOpenBelow { line } => {
                store.remove_line(line + 1);
                Revert::centered(cursor, line)
            }
            EditKind::LineSplitAtStart { line } => {
                store.remove_line(line);
                Revert::centered(cursor, line)
            }
            EditKind::LineSplit {
                line,
                prefix,
                suffix,
            } => {
                store.set_line(line, &format!("{prefix}{suffix}"));
                store.remove_line(line + 1);
                Revert::centered(cursor, line)
            }
            EditKind::MultiLineDelete {
                line,
                first_line,
                removed,
            } => {
                store.set_line(line, &first_line);
                for (i, text) in removed.iter().enumerate() {
                    store.insert_line(line + 1 + i, text);
                }
                Revert::stay(cursor)
            }
            EditKind::LinesDelete {
                start,
                removed,
                cleared,
            } => {
                let mut lines = removed.iter();
                let mut at = start;
                if cleared {
                    if let Some(first) = lines.next() {
                        store.set_line(0, first);
                    }
                    at = 1;
                }
                for text in lines {
                    store.insert_line(at, text);
                    at += 1;
                }
                Revert::stay(cursor)
            }
            EditKind::MultiLineInsert { original, count } => {
                let line = cursor.y.saturating_sub(count);
                for _ in 0..count {
                    store.remove_line(line + 1);
                }
                store.set_line(line, &original);
                Revert::stay(Position::at(cursor.x, line))
            }
            EditKind::LinewiseInsert { first, lines } => {
                for _ in 0..lines.len() {
                    store.remove_line(first);
                }
                Revert::stay(cursor)
            }
            EditKind::ReplaceLineContent { line, previous } => {
                store.set_line(line, &previous);
                Revert::stay(cursor)
            }
            EditKind::ReplaceChar { at, previous } => {
                store.set_char(at.x, at.y, previous);
                Revert::stay(cursor)
            }
            EditKind::CommentToggleLine {
                line,
                offset,
                marker,
                direction,
            } => {
                apply_marker(store, line, offset, &marker, direction.opposite());
                Revert::centered(cursor, line)
            }
            EditKind::CommentToggleBlock {
                first_line,
                offset,
                marker,
                count,
                direction,
            } => {
                for y in first_line..first_line + count {
                    apply_marker(store, y, offset, &marker, direction.opposite());
                }
                Revert::centered(cursor, first_line)
            }
            EditKind::CompositeReplaceAll { .. } => Revert::stay(cursor),
        }
    }
}

/// Cursor state to restore after an undo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revert {
    pub cursor: Position,
    /// Line the viewport should be centered on, if any
    pub center: Option<usize>,
}

impl Revert {
    fn stay(cursor: Position) -> Self {
        Self {
            cursor,
            center: None,
        }
    }

    fn centered(cursor: Position, line: usize) -> Self {
        Self {
            cursor,
            center: Some(line),
        }
    }
}

/// Column a comment marker occupies on line `y`, clamped for short lines
fn marker_column(store: &LineStore, y: usize, offset: usize, marker_len: usize) -> usize {
    offset.min(store.line_len(y).saturating_sub(marker_len))
}

/// Check whether line `y` carries `marker` at `offset`.
///
/// A line shorter than `offset` only counts when the text before its
/// trailing marker is blank, so user text ending in the marker is left alone.
pub fn has_marker(store: &LineStore, y: usize, offset: usize, marker: &str) -> bool {
    let len = marker.chars().count();
    if store.line_len(y) < len {
        return false;
    }
    let col = marker_column(store, y, offset, len);
    if col < offset
        && !store
            .slice(y, 0, col)
            .chars()
            .all(|ch| ch == ' ' || ch == '\t')
    {
        return false;
    }
    store.slice(y, col, col + len) == marker
}

/// Insert or remove `marker` at `offset` on line `y`.
///
/// Removal takes the marker from the clamped column it was inserted at.
/// Returns false when removal was requested but the marker is absent.
pub fn apply_marker(
    store: &mut LineStore,
    y: usize,
    offset: usize,
    marker: &str,
    direction: CommentDirection,
) -> bool {
    match direction {
        CommentDirection::Added => {
            let col = offset.min(store.line_len(y));
            store.insert(col, y, marker);
            true
        }
        CommentDirection::Removed => {
            let len = marker.chars().count();
            if store.line_len(y) < len {
                return false;
            }
            let col = marker_column(store, y, offset, len);
            if store.slice(y, col, col + len) != marker {
                return false;
            }
            store.remove(col, y, len);
            true
        }
    }
}

/// Edit history for undo
#[derive(Debug, Clone)]
pub struct History {
    /// Records, most recent first
    records: VecDeque<EditRecord>,
    /// Maximum history size
    max_size: usize,
}

impl History {
    /// Create a new history
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create history with specified size
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            records: VecDeque::new(),
            max_size: max_size.max(1),
        }
    }

    /// Record action to history, evicting the oldest record when full
    pub fn push(&mut self, record: EditRecord) {
        if self.records.len() >= self.max_size {
            self.records.pop_back();
            log::debug!("Undo history full, oldest record dropped");
        }
        self.records.push_front(record);
    }

    /// Undo the most recent record against `store`.
    ///
    /// A composite record pops and reverts the records it groups in a loop,
    /// then restores its own cursor.
    pub fn undo(&mut self, store: &mut LineStore) -> Option<Revert> {
        let record = self.records.pop_front()?;
        let EditKind::CompositeReplaceAll { count } = record.kind else {
            return Some(record.revert(store));
        };

        // Records pop newest first, so the last one reverted is the first replacement
        let mut first_line = None;
        let mut remaining = count;
        while remaining > 0 {
            let Some(inner) = self.records.pop_front() else {
                break;
            };
            remaining -= 1;
            if let EditKind::CompositeReplaceAll { count } = inner.kind {
                remaining += count;
            } else {
                first_line = Some(inner.revert(store).cursor.y);
            }
        }
        Some(Revert {
            cursor: record.cursor,
            center: first_line,
        })
    }

    /// Most recent record
    pub fn latest(&self) -> Option<&EditRecord> {
        self.records.front()
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Clear history
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(x: usize, y: usize, kind: EditKind) -> EditRecord {
        EditRecord::new(Position::at(x, y), kind)
    }

    #[test]
    fn test_undo_empty_history() {
        let mut history = History::new();
        let mut store = LineStore::from_text("abc");
        assert_eq!(history.undo(&mut store), None);
        assert_eq!(store.lines(), vec!["abc"]);
    }

    #[test]
    fn test_undo_char_insert() {
        let mut store = LineStore::from_text("ac");
        let mut history = History::new();

        store.insert_char(1, 0, 'b');
        history.push(record(
            1,
            0,
            EditKind::CharInsert {
                at: Position::at(1, 0),
                ch: 'b',
            },
        ));

        let revert = history.undo(&mut store).unwrap();
        assert_eq!(store.lines(), vec!["ac"]);
        assert_eq!(revert.cursor, Position::at(1, 0));
        assert_eq!(revert.center, Some(0));
        assert!(history.is_empty());
    }

    #[test]
    fn test_undo_backspace_reinserts_before_position() {
        let mut store = LineStore::from_text("abc");
        let mut history = History::new();

        let ch = store.remove(1, 0, 1);
        assert_eq!(ch, "b");
        history.push(record(
            2,
            0,
            EditKind::CharDeleteBackward {
                at: Position::at(2, 0),
                ch: 'b',
            },
        ));

        let revert = history.undo(&mut store).unwrap();
        assert_eq!(store.lines(), vec!["abc"]);
        assert_eq!(revert.cursor, Position::at(2, 0));
    }

    #[test]
    fn test_undo_line_join_with_donor() {
        let mut store = LineStore::from_lines(["ab", "cd"]);
        let mut history = History::new();

        store.join_next(0);
        history.push(record(
            0,
            1,
            EditKind::LineJoinForward {
                line: 1,
                joined: "cd".to_string(),
                donor: Some("ab".to_string()),
            },
        ));
        assert_eq!(store.lines(), vec!["abcd"]);

        history.undo(&mut store);
        assert_eq!(store.lines(), vec!["ab", "cd"]);
    }

    #[test]
    fn test_undo_line_join_backward() {
        let mut store = LineStore::from_lines(["a", "", "next", "z"]);
        let mut history = History::new();

        store.remove_line(1);
        history.push(record(
            0,
            1,
            EditKind::LineJoinBackward {
                line: 1,
                removed: "next".to_string(),
            },
        ));
        assert_eq!(store.lines(), vec!["a", "next", "z"]);

        history.undo(&mut store);
        assert_eq!(store.lines(), vec!["a", "", "next", "z"]);
    }

    #[test]
    fn test_undo_mid_line_split() {
        let mut store = LineStore::from_lines(["abc", "def"]);
        let mut history = History::new();

        store.split_line(1, 0);
        history.push(record(
            1,
            0,
            EditKind::LineSplit {
                line: 0,
                prefix: "a".to_string(),
                suffix: "bc".to_string(),
            },
        ));
        assert_eq!(store.lines(), vec!["a", "bc", "def"]);

        let revert = history.undo(&mut store).unwrap();
        assert_eq!(store.lines(), vec!["abc", "def"]);
        assert_eq!(revert.cursor, Position::at(1, 0));
    }

    #[test]
    fn test_undo_multi_line_delete_restores_line_set() {
        let mut store = LineStore::from_text("agh");
        let mut history = History::new();
        history.push(record(
            1,
            0,
            EditKind::MultiLineDelete {
                line: 0,
                first_line: "abcd".to_string(),
                removed: vec!["efgh".to_string()],
            },
        ));

        let revert = history.undo(&mut store).unwrap();
        assert_eq!(store.lines(), vec!["abcd", "efgh"]);
        assert_eq!(revert.cursor, Position::at(1, 0));
        assert_eq!(revert.center, None);
    }

    #[test]
    fn test_undo_multi_line_insert_steps_back_by_count() {
        // "xy" with "1\n2\n3" pasted at x=1 became three lines
        let mut store = LineStore::from_lines(["x1", "2", "3y", "tail"]);
        let mut history = History::new();
        history.push(record(
            1,
            2,
            EditKind::MultiLineInsert {
                original: "xy".to_string(),
                count: 2,
            },
        ));

        let revert = history.undo(&mut store).unwrap();
        assert_eq!(store.lines(), vec!["xy", "tail"]);
        assert_eq!(revert.cursor, Position::at(1, 0));
    }

    #[test]
    fn test_undo_lines_delete_of_whole_document() {
        let mut store = LineStore::new();
        let mut history = History::new();
        history.push(record(
            0,
            0,
            EditKind::LinesDelete {
                start: 0,
                removed: vec!["a".to_string(), "b".to_string()],
                cleared: true,
            },
        ));

        history.undo(&mut store);
        assert_eq!(store.lines(), vec!["a", "b"]);
    }

    #[test]
    fn test_undo_comment_block() {
        let mut store = LineStore::from_lines(["  a", "  b", "c"]);
        let mut history = History::new();
        for y in 0..2 {
            apply_marker(&mut store, y, 2, "// ", CommentDirection::Added);
        }
        history.push(record(
            0,
            0,
            EditKind::CommentToggleBlock {
                first_line: 0,
                offset: 2,
                marker: "// ".to_string(),
                count: 2,
                direction: CommentDirection::Added,
            },
        ));
        assert_eq!(store.lines(), vec!["  // a", "  // b", "c"]);

        history.undo(&mut store);
        assert_eq!(store.lines(), vec!["  a", "  b", "c"]);
    }

    #[test]
    fn test_marker_on_short_line_is_clamped() {
        let mut store = LineStore::from_lines(["    code", ""]);
        assert!(apply_marker(&mut store, 1, 4, "#", CommentDirection::Added));
        assert_eq!(store.line(1).as_deref(), Some("#"));
        assert!(has_marker(&store, 1, 4, "#"));
        assert!(apply_marker(&mut store, 1, 4, "#", CommentDirection::Removed));
        assert_eq!(store.line(1).as_deref(), Some(""));
        assert!(!apply_marker(&mut store, 0, 4, "#", CommentDirection::Removed));
    }

    #[test]
    fn test_short_line_ending_in_marker_is_not_commented() {
        let mut store = LineStore::from_lines(["    //x", "a//", "  //"]);
        assert!(has_marker(&store, 0, 4, "//"));
        assert!(!has_marker(&store, 1, 4, "//"));
        assert!(has_marker(&store, 2, 4, "//"));

        // A marker appended to a short line still comes off where it went in
        assert!(apply_marker(&mut store, 1, 4, "//", CommentDirection::Added));
        assert_eq!(store.line(1).as_deref(), Some("a////"));
        assert!(apply_marker(&mut store, 1, 4, "//", CommentDirection::Removed));
        assert_eq!(store.line(1).as_deref(), Some("a//"));
    }

    #[test]
    fn test_composite_undoes_grouped_records_iteratively() {
        let mut store = LineStore::from_lines(["b b", "b"]);
        let mut history = History::new();
        history.push(record(
            0,
            0,
            EditKind::CharInsert {
                at: Position::at(0, 0),
                ch: 'z',
            },
        ));
        // Two single replacements of "a" -> "b", then the composite
        history.push(record(
            0,
            0,
            EditKind::ReplaceLineContent {
                line: 0,
                previous: "a b".to_string(),
            },
        ));
        history.push(record(
            0,
            0,
            EditKind::ReplaceLineContent {
                line: 0,
                previous: "a a".to_string(),
            },
        ));
        history.push(record(0, 0, EditKind::CompositeReplaceAll { count: 2 }));

        let revert = history.undo(&mut store).unwrap();
        assert_eq!(store.lines(), vec!["a a", "b"]);
        assert_eq!(revert.cursor, Position::ZERO);
        assert_eq!(revert.center, Some(0));
        // Only the record pushed before the group remains
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_composite_centers_on_first_replacement() {
        let mut store = LineStore::from_lines(["x", "y", "y"]);
        let mut history = History::new();
        for line in [1, 2] {
            history.push(record(
                0,
                line,
                EditKind::ReplaceLineContent {
                    line,
                    previous: "x".to_string(),
                },
            ));
        }
        history.push(record(0, 2, EditKind::CompositeReplaceAll { count: 2 }));

        let revert = history.undo(&mut store).unwrap();
        assert_eq!(store.lines(), vec!["x", "x", "x"]);
        assert_eq!(revert.cursor, Position::at(0, 2));
        assert_eq!(revert.center, Some(1));
    }

    #[test]
    fn test_large_composite_does_not_recurse() {
        let mut store = LineStore::from_text("x");
        let mut history = History::with_capacity(200_000);
        for _ in 0..100_000 {
            history.push(record(
                0,
                0,
                EditKind::ReplaceLineContent {
                    line: 0,
                    previous: "x".to_string(),
                },
            ));
        }
        history.push(record(0, 0, EditKind::CompositeReplaceAll { count: 100_000 }));

        assert!(history.undo(&mut store).is_some());
        assert!(history.is_empty());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::with_capacity(3);
        for x in 0..5 {
            history.push(record(
                x,
                0,
                EditKind::CharInsert {
                    at: Position::at(x, 0),
                    ch: 'a',
                },
            ));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().map(|r| r.cursor.x), Some(4));

        let mut store = LineStore::from_text("aaaaa");
        for _ in 0..3 {
            assert!(history.undo(&mut store).is_some());
        }
        // Records for x=0 and x=1 were evicted
        assert!(history.undo(&mut store).is_none());
        assert_eq!(store.lines(), vec!["aa"]);
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(History::new().capacity(), DEFAULT_CAPACITY);
        assert_eq!(DEFAULT_CAPACITY, 5000);
    }
}
