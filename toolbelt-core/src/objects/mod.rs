//! Object Path Accessors.
//!
//! Helpers addressing nested fields of a JSON-like document with a dotted
//! path (`user.profile.name`). Objects are traversed by key, arrays by
//! numeric index (`items.0.id`). The separator is configurable, and an
//! empty path addresses the document root.
//!
//! - [`path`]: `get`/`has`/`set`/`ensure`/`delete` by dotted path.
//! - [`compress`]: recursive removal of `null` and, optionally, empty values.

pub mod compress;
pub mod path;

pub use compress::{compress, CompressOptions};
pub use path::{
    delete_key_value, ensure_key_value, get_key_value, get_key_value_mut, get_key_value_or, has_key_value,
    set_key_value, DEFAULT_SEPARATOR,
};
