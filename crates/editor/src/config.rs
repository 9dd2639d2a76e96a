//! Per-session editor configuration.

use std::collections::BTreeMap;
use std::path::Path;

use linedit_buffer::DEFAULT_CAPACITY;
use linedit_config::{defaults, Config, EditorSettings};

use crate::file_io;

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Number of undo records kept
    pub history_capacity: usize,
    /// Extensions exempt from trailing-whitespace trimming on save
    pub markup_extensions: Vec<String>,
    /// Line comment marker per extension
    pub comment_markers: BTreeMap<String, String>,
    /// Copy leading whitespace onto lines opened at end of line
    pub auto_indent: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::from(&EditorSettings::default())
    }
}

impl From<&EditorSettings> for EditorConfig {
    fn from(settings: &EditorSettings) -> Self {
        Self {
            history_capacity: settings.history_capacity,
            markup_extensions: settings
                .markup_extensions
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
            comment_markers: settings.comment_markers.clone(),
            auto_indent: settings.auto_indent,
        }
    }
}

impl From<&Config> for EditorConfig {
    fn from(config: &Config) -> Self {
        Self::from(&config.editor)
    }
}

impl EditorConfig {
    /// Configuration with a custom history capacity
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            history_capacity: capacity,
            ..Self::default()
        }
    }

    /// Whether `path` is a markup file kept verbatim on save
    pub fn is_markup(&self, path: &Path) -> bool {
        let ext = file_io::extension_of(path);
        !ext.is_empty() && self.markup_extensions.iter().any(|m| *m == ext)
    }

    /// Line comment marker for `path`
    pub fn comment_marker_for(&self, path: &Path) -> &str {
        self.comment_markers
            .get(&file_io::extension_of(path))
            .map(String::as_str)
            .unwrap_or(defaults::COMMENT_MARKER)
    }
}

/// Capacity used when the configured value is zero
pub(crate) fn effective_capacity(config: &EditorConfig) -> usize {
    if config.history_capacity == 0 {
        DEFAULT_CAPACITY
    } else {
        config.history_capacity
    }
}
