//! Editing session for linedit.
//!
//! Wraps a [`linedit_buffer::LineStore`] with a cursor, a selection, an undo
//! history, and a viewport, and keeps all four consistent across every
//! mutation. Also provides comment toggling, search/replace, pointer mapping,
//! the per-render visible slice, and load/save against file paths.

mod binding;
pub mod comment;
pub mod config;
pub mod constants;
mod core;
pub mod cursor;
mod file_io;
pub mod persistence;
pub mod rendering;
pub mod search;
pub mod selection;
mod state;
pub mod text_editing;

// Re-export main types
pub use binding::{BoundLine, EditTarget};
pub use config::EditorConfig;
pub use core::Editor;
pub use persistence::SaveOutcome;
pub use state::SavedPosition;

pub use linedit_buffer::{AdvanceSource, CellAdvance, Position, SearchStatus, WrapLayout};
