//! Line comment toggling.
//!
//! The marker goes at the indentation column of the first affected line.
//! A block is uncommented only when every line in it carries the marker;
//! otherwise the marker is added to every line.

use std::path::Path;

use linedit_buffer::{apply_marker, has_marker, CommentDirection, EditKind};

use crate::Editor;

impl Editor {
    /// Toggle `marker` on the selected lines, or on the current line.
    ///
    /// A selection covers lines `y_smaller..y_bigger`; its last line is not
    /// included. The selection is stopped afterwards.
    pub fn toggle_comment(&mut self, marker: &str) {
        if self.is_bound() || marker.is_empty() || marker.contains('\n') {
            return;
        }

        let (first, end) = if self.selection.active {
            (self.selection.y_smaller(), self.selection.y_bigger())
        } else {
            (self.y, self.y)
        };

        if end <= first {
            self.toggle_comment_line(self.y, marker);
        } else {
            self.toggle_comment_block(first, end.min(self.store.line_count()), marker);
        }
        self.selection.stop();
        self.clamp_cursor();
    }

    /// Toggle the comment marker configured for `path`'s extension
    pub fn toggle_comment_for(&mut self, path: &Path) {
        let marker = self.config.comment_marker_for(path).to_string();
        self.toggle_comment(&marker);
    }

    fn toggle_comment_line(&mut self, line: usize, marker: &str) {
        let offset = self.indentation(line);
        let direction = if has_marker(&self.store, line, offset, marker) {
            CommentDirection::Removed
        } else {
            CommentDirection::Added
        };
        apply_marker(&mut self.store, line, offset, marker, direction);
        self.record(EditKind::CommentToggleLine {
            line,
            offset,
            marker: marker.to_string(),
            direction,
        });
    }

    fn toggle_comment_block(&mut self, first: usize, end: usize, marker: &str) {
        let offset = self.indentation(first);
        let commented = (first..end).all(|y| has_marker(&self.store, y, offset, marker));

        let (direction, count) = if commented {
            let mut count = 0;
            for y in first..end {
                if !apply_marker(&mut self.store, y, offset, marker, CommentDirection::Removed) {
                    break;
                }
                count += 1;
            }
            (CommentDirection::Removed, count)
        } else {
            for y in first..end {
                apply_marker(&mut self.store, y, offset, marker, CommentDirection::Added);
            }
            (CommentDirection::Added, end - first)
        };

        self.record(EditKind::CommentToggleBlock {
            first_line: first,
            offset,
            marker: marker.to_string(),
            count,
            direction,
        });
    }

    /// Number of leading spaces and tabs on `line`
    fn indentation(&self, line: usize) -> usize {
        self.store
            .line(line)
            .map(|text| text.chars().take_while(|ch| *ch == ' ' || *ch == '\t').count())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use crate::Editor;
    use std::path::Path;

    #[test]
    fn test_toggle_single_line_at_indentation() {
        let mut editor = Editor::from_text("    let x = 1;");
        editor.toggle_comment("// ");
        assert_eq!(editor.lines(), vec!["    // let x = 1;"]);

        editor.toggle_comment("// ");
        assert_eq!(editor.lines(), vec!["    let x = 1;"]);
        assert_eq!(editor.history_len(), 2);
    }

    #[test]
    fn test_toggle_is_involution_on_block() {
        let original = vec!["fn f() {", "    a();", "", "    b();", "}"];
        let mut editor = Editor::from_text(&original.join("\n"));
        editor.set_cursor(0, 1);
        editor.start_selection();
        editor.set_cursor(0, 4);
        editor.selection.diff(0, 4);

        editor.toggle_comment("//");
        assert_eq!(
            editor.lines(),
            vec!["fn f() {", "    //a();", "//", "    //b();", "}"]
        );
        assert!(!editor.selection().active);

        editor.set_cursor(0, 1);
        editor.start_selection();
        editor.set_cursor(0, 4);
        editor.selection.diff(0, 4);
        editor.toggle_comment("//");
        assert_eq!(editor.lines(), original);
    }

    #[test]
    fn test_partially_commented_block_gets_marker_everywhere() {
        let mut editor = Editor::from_text("#a\nb\nc");
        editor.start_selection();
        editor.set_cursor(0, 2);
        editor.selection.diff(0, 2);

        editor.toggle_comment("#");
        assert_eq!(editor.lines(), vec!["##a", "#b", "c"]);
        assert_eq!(editor.history_len(), 1);

        assert!(editor.undo());
        assert_eq!(editor.lines(), vec!["#a", "b", "c"]);
    }

    #[test]
    fn test_trailing_marker_text_is_not_uncommented() {
        let mut editor = Editor::from_text("    //x\na//\nz");
        editor.start_selection();
        editor.set_cursor(0, 2);
        editor.selection.diff(0, 2);

        editor.toggle_comment("//");
        assert_eq!(editor.lines(), vec!["    ////x", "a////", "z"]);

        assert!(editor.undo());
        assert_eq!(editor.lines(), vec!["    //x", "a//", "z"]);
    }

    #[test]
    fn test_block_undo_restores_removed_markers() {
        let mut editor = Editor::from_text("  # a\n  # b\n  c");
        editor.start_selection();
        editor.set_cursor(0, 2);
        editor.selection.diff(0, 2);

        editor.toggle_comment("# ");
        assert_eq!(editor.lines(), vec!["  a", "  b", "  c"]);
        editor.undo();
        assert_eq!(editor.lines(), vec!["  # a", "  # b", "  c"]);
    }

    #[test]
    fn test_marker_from_extension() {
        let mut editor = Editor::from_text("x = 1");
        editor.toggle_comment_for(Path::new("script.py"));
        assert_eq!(editor.lines(), vec!["#x = 1"]);
        editor.toggle_comment_for(Path::new("main.rs"));
        assert_eq!(editor.lines(), vec!["//#x = 1"]);
    }

    #[test]
    fn test_ignored_while_bound() {
        let mut editor = Editor::from_text("text");
        editor.bind("", false);
        editor.toggle_comment("//");
        editor.unbind();
        assert_eq!(editor.lines(), vec!["text"]);
        assert_eq!(editor.history_len(), 0);
    }
}
