//! Configuration Data Structures.
//!
//! These structs are populated by deserializing a TOML configuration file.
//! Missing fields take their values from [`super::defaults`]; unknown fields
//! are rejected via `#[serde(deny_unknown_fields)]`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration settings for the logging subsystem.
///
/// # Examples
///
/// ```
/// use toolbelt_core::config::LoggingConfig;
///
/// let log_config: LoggingConfig = toml::from_str(r#"
/// level = "debug"
/// format = "json"
/// "#).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, None);
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// The minimum log level to record.
    /// Valid values (case-insensitive): "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional path to a file where logs should be written.
    /// If `None`, file logging is disabled.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// The log line format, "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Placeholder settings used by the document formatting helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentsConfig {
    /// Token opening a placeholder.
    #[serde(default = "defaults::default_placeholder_prefix")]
    pub prefix: String,
    /// Token closing a placeholder.
    #[serde(default = "defaults::default_placeholder_suffix")]
    pub suffix: String,
    /// Separator between the segments of a dotted path.
    #[serde(default = "defaults::default_path_separator")]
    pub separator: String,
    /// Leave unresolved placeholders untouched instead of replacing them with an empty string.
    #[serde(default)]
    pub keep_missing: bool,
    /// Maximum number of resolution passes over a single string.
    #[serde(default = "defaults::default_max_depth")]
    pub max_depth: usize,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        defaults::default_documents_config()
    }
}

/// Defaults for the date formatting helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateConfig {
    /// Timezone name understood by [`crate::date::parse_timezone`].
    #[serde(default = "defaults::default_timezone")]
    pub timezone: String,
    /// strftime-style output format.
    #[serde(default = "defaults::default_date_format")]
    pub format: String,
}

impl Default for DateConfig {
    fn default() -> Self {
        defaults::default_date_config()
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use toolbelt_core::config::ToolbeltConfig;
///
/// let loaded: ToolbeltConfig = toml::from_str(r#"
/// [documents]
/// keep_missing = true
///
/// [date]
/// timezone = "+01:00"
/// "#).unwrap();
/// assert!(loaded.documents.keep_missing);
/// assert_eq!(loaded.documents.prefix, "{{");
/// assert_eq!(loaded.date.timezone, "+01:00");
/// assert_eq!(loaded.logging.level, "info");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolbeltConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::default_documents_config")]
    pub documents: DocumentsConfig,
    #[serde(default = "defaults::default_date_config")]
    pub date: DateConfig,
}
