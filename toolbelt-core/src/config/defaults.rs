//! Default configuration values for the toolbelt helpers.
//!
//! These functions are used by `serde`'s `default` attribute in the configuration
//! structures to provide values for fields missing from the configuration file.

use std::path::PathBuf;

use super::types::{DateConfig, DocumentsConfig, LoggingConfig};
use crate::objects::DEFAULT_SEPARATOR;

/// Returns the default `LoggingConfig`.
pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

/// Returns the default log level string (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Returns the default log file path (`None`, file logging disabled).
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None
}

/// Returns the default log format string (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

/// Returns the default `DocumentsConfig`.
pub(super) fn default_documents_config() -> DocumentsConfig {
    DocumentsConfig {
        prefix: default_placeholder_prefix(),
        suffix: default_placeholder_suffix(),
        separator: default_path_separator(),
        keep_missing: false,
        max_depth: default_max_depth(),
    }
}

pub(super) fn default_placeholder_prefix() -> String {
    "{{".to_string()
}

pub(super) fn default_placeholder_suffix() -> String {
    "}}".to_string()
}

pub(super) fn default_path_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

/// Number of re-scan passes over a resolved placeholder string.
pub(super) fn default_max_depth() -> usize {
    16
}

/// Returns the default `DateConfig`.
pub(super) fn default_date_config() -> DateConfig {
    DateConfig {
        timezone: default_timezone(),
        format: default_date_format(),
    }
}

pub(super) fn default_timezone() -> String {
    crate::date::DEFAULT_TIMEZONE.to_string()
}

pub(super) fn default_date_format() -> String {
    crate::date::DEFAULT_FORMAT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::get_key_value;
    use serde_json::json;

    #[test]
    fn test_default_separator_addresses_dotted_paths() {
        let documents = default_documents_config();
        assert_eq!(documents.separator, DEFAULT_SEPARATOR);

        let doc = json!({"a": {"b": 1}});
        assert_eq!(get_key_value(&doc, "a.b", &documents.separator), Some(&json!(1)));
    }
}
