//! Constants for the editing session.

/// One megabyte in bytes.
pub const MEGABYTE: u64 = 1024 * 1024;

/// Maximum file size that can be opened in the editor (50 MB).
pub const MAX_EDITOR_FILE_SIZE: u64 = 50 * MEGABYTE;

/// Path that stands for stdin on open and stdout on save.
pub const STDIO_PATH: &str = "-";
