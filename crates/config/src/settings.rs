//! Configuration structures for linedit settings.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{defaults, xdg};

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Editor settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Editor settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Number of undo records kept per document
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Extensions exempt from trailing-whitespace trimming on save
    #[serde(default = "default_markup_extensions")]
    pub markup_extensions: Vec<String>,

    /// Line comment marker per file extension
    #[serde(default = "default_comment_markers")]
    pub comment_markers: BTreeMap<String, String>,

    /// Copy leading whitespace onto lines opened with Enter
    #[serde(default = "default_auto_indent")]
    pub auto_indent: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Number of log entries kept in memory
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

// Default value functions for serde
fn default_history_capacity() -> usize {
    defaults::HISTORY_CAPACITY
}

fn default_markup_extensions() -> Vec<String> {
    defaults::MARKUP_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_comment_markers() -> BTreeMap<String, String> {
    defaults::HASH_COMMENT_EXTENSIONS
        .iter()
        .map(|ext| (ext.to_string(), "#".to_string()))
        .collect()
}

fn default_auto_indent() -> bool {
    defaults::AUTO_INDENT
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::MAX_LOG_ENTRIES
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            markup_extensions: default_markup_extensions(),
            comment_markers: default_comment_markers(),
            auto_indent: default_auto_indent(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}

impl LoggingSettings {
    /// Configured log file, or `linedit.log` in the data directory
    pub fn log_file(&self) -> Option<PathBuf> {
        match &self.file_path {
            Some(path) => Some(PathBuf::from(path)),
            None => xdg::get_data_dir()
                .ok()
                .map(|dir| dir.join(defaults::LOG_FILE_NAME)),
        }
    }
}
