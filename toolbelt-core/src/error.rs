//! Error handling for the toolbelt helpers.
//!
//! Every helper module reports failures through a narrow, purpose-specific
//! error enum defined here ([`ConfigError`], [`LoggingError`], [`FilesError`],
//! [`CborError`], [`DateError`]). The umbrella [`ToolbeltError`] wraps them via
//! `#[from]`, so code mixing several helpers can propagate with `?`.
//!
//! # Examples
//!
//! ```rust
//! use toolbelt_core::error::{ToolbeltError, DateError};
//!
//! fn check(tz: &str) -> Result<(), ToolbeltError> {
//!     if tz.is_empty() {
//!         return Err(DateError::InvalidTimezone(tz.to_string()).into());
//!     }
//!     Ok(())
//! }
//! assert!(check("").is_err());
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias. The error type defaults to [`ToolbeltError`].
pub type Result<T, E = ToolbeltError> = std::result::Result<T, E>;

/// Umbrella error type for the toolbelt helpers.
///
/// Most helpers return their own narrow error; this enum exists so that
/// callers combining helpers (config loading, document formatting,
/// CBOR transport, ...) can use a single error type.
#[derive(Debug, Error)]
pub enum ToolbeltError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised while setting up the logging system.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// File and directory assertion failures.
    #[error("Filesystem Error: {0}")]
    Files(#[from] FilesError),

    /// CBOR encoding, decoding or bridging failures.
    #[error("CBOR Error: {0}")]
    Cbor(#[from] CborError),

    /// Date parsing or formatting failures.
    #[error("Date Error: {0}")]
    Date(#[from] DateError),

    /// JSON (de)serialization failures, e.g. while hydrating options.
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O errors not covered by other specific variants.
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),

    /// An argument was outside the domain a helper accepts.
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    /// Catch-all for unexpected internal errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// Error type for configuration-related operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Values parsed fine but are not acceptable.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A base directory (e.g. the user configuration directory) could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured level is not one of trace, debug, info, warn, error.
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// A global subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    /// An I/O error occurred while preparing a log file.
    #[error("Logging I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Error type for file and directory helpers.
///
/// Every variant carries the offending path so callers can report it
/// without threading it through separately.
#[derive(Debug, Error)]
pub enum FilesError {
    /// The path argument was empty.
    #[error("The path must not be empty")]
    EmptyPath,

    #[error("The path {path:?} does not exist")]
    NotFound { path: PathBuf },

    #[error("The path {path:?} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("The path {path:?} is not a file")]
    NotAFile { path: PathBuf },

    #[error("The path {path:?} is not readable")]
    NotReadable { path: PathBuf },

    #[error("The path {path:?} is not writable")]
    NotWritable { path: PathBuf },

    /// Creating a directory failed.
    #[error("Failed to create directory {path:?}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Removing a directory failed.
    #[error("Failed to remove directory {path:?}")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure while reading or writing a file.
    #[error("{message} (Path: {path:?})")]
    Io {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Error type for the CBOR helpers.
#[derive(Debug, Error)]
pub enum CborError {
    #[error("Failed to encode CBOR: {0}")]
    Encode(String),

    #[error("Failed to decode CBOR: {0}")]
    Decode(String),

    /// The input holds more than one data item.
    #[error("Unexpected {remaining} trailing byte(s) after the CBOR data item")]
    TrailingBytes { remaining: usize },

    /// A CBOR item has no JSON counterpart (non-finite float, complex map key, ...).
    #[error("Unsupported CBOR type: {0}")]
    UnsupportedType(String),

    #[error("Invalid base64url payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Error type for the date helpers.
#[derive(Debug, Error)]
pub enum DateError {
    /// The input could not be parsed as a date.
    #[error("Malformed date: {input:?}")]
    Malformed { input: String },

    #[error("Invalid timezone: {0:?}")]
    InvalidTimezone(String),

    /// The strftime-style format string contains an invalid directive.
    #[error("Invalid date format: {0:?}")]
    InvalidFormat(String),
}
