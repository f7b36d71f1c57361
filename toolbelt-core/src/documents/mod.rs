//! Document Placeholders.
//!
//! Substitution of `{{dotted.path}}` placeholders inside strings and JSON
//! documents. Paths are looked up with [`crate::objects::get_key_value`],
//! so the separator and array indexing follow the object accessors.
//!
//! - [`options`]: delimiters, separator, missing-value policy, depth limit.
//! - [`resolver`]: string-level resolution, nested placeholders included.
//! - [`format`]: resolution of every string leaf of a document.
//!
//! Resolution is bounded: each string is rescanned at most `max_depth`
//! times, so self-referencing or mutually referencing values terminate.

pub mod format;
pub mod options;
pub mod resolver;

pub use format::{format_document, format_document_with};
pub use options::PlaceholderOptions;
pub use resolver::{has_placeholders, resolve_placeholders, value_to_text};
