//! Line store, cursor positions, and undo history for linedit.
//!
//! Provides a rope-backed document of record addressed by (x, y) code-point
//! coordinates, along with selection ranges, the bounded edit history,
//! word/bracket navigation, literal search, viewport scrolling, and the
//! wrapped-layout simulation shared with the renderer.

mod buffer;
mod cursor;
mod history;
mod navigation;
mod search;
mod viewport;
mod wrap;

pub use buffer::{LineSource, LineStore};
pub use cursor::{Position, Selection};
pub use history::{
    apply_marker, has_marker, CommentDirection, EditKind, EditRecord, History, Revert,
    DEFAULT_CAPACITY,
};
pub use navigation::{
    find_any_of, find_any_of_last, find_global, find_matching, is_separator, is_whitespace,
    word_backward, word_forward, BRACKET_PAIRS, WHITESPACE, WORD_SEPARATORS,
};
pub use search::{find_in_line, SearchStatus};
pub use viewport::Viewport;
pub use wrap::{column_at, AdvanceSource, CellAdvance, WrapLayout};
