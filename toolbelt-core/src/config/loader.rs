//! Configuration Loading.
//!
//! [`ConfigLoader`] locates, parses and validates the [`ToolbeltConfig`].
//!
//! ## Configuration File Location
//!
//! 1. The path in the `TOOLBELT_CONFIG` environment variable, when set.
//! 2. Otherwise `config.toml` inside the project configuration directory
//!    resolved by `directories-next` (e.g. `~/.config/toolbelt` on Linux).
//!
//! A missing or empty file yields the default configuration.
//!
//! ## Validation
//!
//! - log level and format are normalized to lowercase and checked,
//! - relative log file paths are resolved against the project data directory,
//! - placeholder prefix, suffix and separator must be non-empty, and
//!   prefix and suffix must differ,
//! - `max_depth` must be at least 1,
//! - the date timezone must be understood by [`crate::date::parse_timezone`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;
use tracing::debug;

use super::types::ToolbeltConfig;
use crate::error::{ConfigError, ToolbeltError};

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "TOOLBELT_CONFIG";

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "Toolbelt";
const APPLICATION: &str = "toolbelt";
const CONFIG_FILE_NAME: &str = "config.toml";

/// `ConfigLoader` provides static methods to load and validate [`ToolbeltConfig`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the configuration from its default location.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DirectoryUnavailable`] if no location can be determined,
    /// - [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// - [`ConfigError::ParseError`] for invalid TOML,
    /// - [`ConfigError::ValidationError`] for unacceptable values.
    pub fn load() -> Result<ToolbeltConfig, ToolbeltError> {
        let path = Self::config_path()?;
        Self::load_from_path(&path)
    }

    /// Resolves the configuration file path, honoring [`CONFIG_PATH_ENV`].
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            debug!(path = ?path, "Using configuration path from {}", CONFIG_PATH_ENV);
            return Ok(PathBuf::from(path));
        }
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or_else(|| ConfigError::DirectoryUnavailable { dir_type: "Config".to_string() })
    }

    /// Loads the configuration from an explicit path.
    ///
    /// A file that does not exist or only contains whitespace yields the
    /// validated default configuration.
    pub fn load_from_path(path: &Path) -> Result<ToolbeltConfig, ToolbeltError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Configuration file not found, using defaults");
                Self::from_toml_str("")
            }
            Err(e) => Err(ConfigError::ReadError { path: path.to_path_buf(), source: e }.into()),
        }
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<ToolbeltConfig, ToolbeltError> {
        let mut config: ToolbeltConfig = if content.trim().is_empty() {
            ToolbeltConfig::default()
        } else {
            toml::from_str(content).map_err(ConfigError::ParseError)?
        };
        Self::validate(&mut config)?;
        Ok(config)
    }

    /// Validates `config` in place, normalizing values where possible.
    pub fn validate(config: &mut ToolbeltConfig) -> Result<(), ConfigError> {
        let level_lower = config.logging.level.to_lowercase();
        match level_lower.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => config.logging.level = level_lower,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    config.logging.level
                )))
            }
        }

        let format_lower = config.logging.format.to_lowercase();
        match format_lower.as_str() {
            "text" | "json" => config.logging.format = format_lower,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    config.logging.format
                )))
            }
        }

        if let Some(file_path) = &config.logging.file_path {
            if file_path.is_relative() {
                let data_dir = Self::project_dirs()
                    .map(|dirs| dirs.data_local_dir().to_path_buf())
                    .ok_or_else(|| ConfigError::DirectoryUnavailable { dir_type: "Data".to_string() })?;
                config.logging.file_path = Some(data_dir.join(file_path));
            }
        }

        let documents = &config.documents;
        for (name, value) in [
            ("prefix", &documents.prefix),
            ("suffix", &documents.suffix),
            ("separator", &documents.separator),
        ] {
            if value.is_empty() {
                return Err(ConfigError::ValidationError(format!("documents.{} must not be empty.", name)));
            }
        }
        if documents.prefix == documents.suffix {
            return Err(ConfigError::ValidationError(
                "documents.prefix and documents.suffix must differ.".to_string(),
            ));
        }
        if documents.max_depth == 0 {
            return Err(ConfigError::ValidationError("documents.max_depth must be at least 1.".to_string()));
        }

        if !crate::date::is_valid_timezone(&config.date.timezone) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid date timezone: '{}'.",
                config.date.timezone
            )));
        }

        Ok(())
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
    }
}
