//! Recursive removal of empty values from documents.

use serde_json::Value;

/// Controls which values [`compress`] removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressOptions {
    /// Remove `null` values.
    pub remove_nulls: bool,
    /// Remove empty strings.
    pub remove_empty_strings: bool,
    /// Remove arrays and objects left empty (after their own compression).
    pub remove_empty_containers: bool,
    /// Descend into nested arrays and objects.
    pub recursive: bool,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            remove_nulls: true,
            remove_empty_strings: false,
            remove_empty_containers: false,
            recursive: true,
        }
    }
}

impl CompressOptions {
    fn removes(&self, value: &Value) -> bool {
        match value {
            Value::Null => self.remove_nulls,
            Value::String(s) => self.remove_empty_strings && s.is_empty(),
            Value::Array(items) => self.remove_empty_containers && items.is_empty(),
            Value::Object(map) => self.remove_empty_containers && map.is_empty(),
            _ => false,
        }
    }
}

/// Returns a copy of `value` without the entries selected by `options`.
///
/// Only entries inside arrays and objects are removed; a top-level `null`
/// stays `null`.
///
/// ```
/// use serde_json::json;
/// use toolbelt_core::objects::{compress, CompressOptions};
///
/// let doc = json!({"a": 1, "b": null, "c": [null, 2]});
/// assert_eq!(compress(&doc, &CompressOptions::default()), json!({"a": 1, "c": [2]}));
/// ```
pub fn compress(value: &Value, options: &CompressOptions) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| compress_child(item, options))
                .filter(|item| !options.removes(item))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), compress_child(item, options)))
                .filter(|(_, item)| !options.removes(item))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn compress_child(value: &Value, options: &CompressOptions) -> Value {
    if options.recursive {
        compress(value, options)
    } else {
        value.clone()
    }
}
