//! # Toolbelt Core Library (`toolbelt-core`)
//!
//! `toolbelt-core` is a collection of small, independent helpers for
//! application frameworks. Every function can be called on its own; there is
//! no runtime, lifecycle or shared state beyond a few memoized detections.
//!
//! ## Contents
//!
//! - **Bitmasks** (`bits`): testing, setting and splitting flags of integer masks.
//! - **CBOR** (`cbor`): encoding/decoding through `ciborium` and CBOR/JSON bridging.
//! - **Dates** (`date`): parsing, timezone offsets and `strftime` formatting with `chrono`.
//! - **Documents** (`documents`): `{{dotted.path}}` placeholder substitution in
//!   strings and JSON documents, with nested placeholders and bounded resolution.
//! - **Environment** (`env`): OS family, container, CI and terminal detection.
//! - **Files** (`files`): directory and file assertions, creation and removal.
//! - **Maths** (`maths`): geodesy, angles, rounding, gcd/lcm, cartesian/polar.
//! - **Objects** (`objects`): dotted-path accessors over `serde_json::Value`.
//! - **Options** (`options`): option maps merged over defaults and typed option structs.
//! - **Reflections** (`reflections`): type names, cached snake-casing and string-valued enums.
//!
//! The ambient pieces follow the usual layout: a unified error system
//! (`ToolbeltError` wrapping the per-concern errors), TOML configuration
//! (`ConfigLoader`, `ToolbeltConfig`) and `tracing`-based logging.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use serde_json::json;
//! use toolbelt_core::config::ConfigLoader;
//! use toolbelt_core::documents::{format_document, PlaceholderOptions};
//! use toolbelt_core::error::ToolbeltError;
//! use toolbelt_core::logging::init_logging;
//!
//! fn main() -> Result<(), ToolbeltError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging, false)?;
//!
//!     let options = PlaceholderOptions::from(&config.documents);
//!     let doc = json!({"env": "prod", "banner": "running in {{env}}"});
//!     let formatted = format_document(&doc, &options)?;
//!     tracing::info!(banner = %formatted["banner"], "Toolbelt initialized");
//!     Ok(())
//! }
//! ```

pub mod bits;
pub mod cbor;
pub mod config;
pub mod date;
pub mod documents;
pub mod env;
pub mod error;
pub mod files;
pub mod logging;
pub mod maths;
pub mod objects;
pub mod options;
pub mod reflections;

// Re-export key types for convenience
pub use config::{ConfigLoader, DateConfig, DocumentsConfig, LoggingConfig, ToolbeltConfig};
pub use documents::{format_document, format_document_with, resolve_placeholders, PlaceholderOptions};
pub use error::{CborError, ConfigError, DateError, FilesError, LoggingError, Result, ToolbeltError};
pub use logging::{init_logging, init_minimal_logging};
pub use objects::{delete_key_value, get_key_value, has_key_value, set_key_value};
pub use reflections::Enumeration;

#[doc(hidden)]
pub use serde as __serde;
