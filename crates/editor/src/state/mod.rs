//! Editor state sub-modules.
//!
//! Groups related Editor fields into focused structs.

mod file_state;
mod path_registry;
mod rendering_cache;

pub(crate) use file_state::FileState;
pub use path_registry::SavedPosition;
pub(crate) use path_registry::PathRegistry;
pub(crate) use rendering_cache::RenderingCache;
