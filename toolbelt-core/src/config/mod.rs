//! Configuration Management.
//!
//! - [`types`]: the configuration schema ([`ToolbeltConfig`], [`LoggingConfig`],
//!   [`DocumentsConfig`], [`DateConfig`]).
//! - [`defaults`]: default values applied by `serde` for missing fields.
//! - [`loader`]: [`ConfigLoader`], which finds, parses and validates the TOML file.
//!
//! # Examples
//!
//! ```rust,ignore
//! use toolbelt_core::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => println!("Placeholder prefix: {}", config.documents.prefix),
//!     Err(e) => {
//!         toolbelt_core::logging::init_minimal_logging();
//!         tracing::error!("Configuration loading failed: {}", e);
//!     }
//! }
//! ```

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, CONFIG_PATH_ENV};
pub use types::{DateConfig, DocumentsConfig, LoggingConfig, ToolbeltConfig};
