//! Dotted-path traversal over `serde_json::Value` trees.

use serde_json::{Map, Value};

use crate::error::ToolbeltError;

/// Separator used when callers have no preference.
pub const DEFAULT_SEPARATOR: &str = ".";

fn segments<'a>(path: &'a str, separator: &'a str) -> Vec<&'a str> {
    if path.is_empty() {
        Vec::new()
    } else if separator.is_empty() {
        vec![path]
    } else {
        path.split(separator).collect()
    }
}

fn array_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

fn child<'v>(value: &'v Value, segment: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => array_index(segment).and_then(|i| items.get(i)),
        _ => None,
    }
}

fn child_mut<'v>(value: &'v mut Value, segment: &str) -> Option<&'v mut Value> {
    match value {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => array_index(segment).and_then(move |i| items.get_mut(i)),
        _ => None,
    }
}

/// Returns the value at `path`, or `None` when any segment is missing.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toolbelt_core::objects::get_key_value;
///
/// let doc = json!({"user": {"emails": ["a@x.org", "b@x.org"]}});
/// assert_eq!(get_key_value(&doc, "user.emails.1", "."), Some(&json!("b@x.org")));
/// assert_eq!(get_key_value(&doc, "user.phone", "."), None);
/// ```
pub fn get_key_value<'v>(document: &'v Value, path: &str, separator: &str) -> Option<&'v Value> {
    segments(path, separator)
        .into_iter()
        .try_fold(document, |current, segment| child(current, segment))
}

/// Mutable variant of [`get_key_value`].
pub fn get_key_value_mut<'v>(document: &'v mut Value, path: &str, separator: &str) -> Option<&'v mut Value> {
    segments(path, separator)
        .into_iter()
        .try_fold(document, |current, segment| child_mut(current, segment))
}

/// Returns a clone of the value at `path`, or `default` when missing.
pub fn get_key_value_or(document: &Value, path: &str, default: Value, separator: &str) -> Value {
    get_key_value(document, path, separator).cloned().unwrap_or(default)
}

/// `true` when `path` resolves to a value (including an explicit `null`).
pub fn has_key_value(document: &Value, path: &str, separator: &str) -> bool {
    get_key_value(document, path, separator).is_some()
}

/// Writes `value` at `path`, creating missing intermediate objects.
///
/// Scalars found along the way are replaced by objects. Arrays accept an
/// existing index, or an index equal to their length to append.
///
/// # Errors
///
/// [`ToolbeltError::InvalidArgument`] when an array segment is not an index,
/// or is an index beyond the end of the array.
pub fn set_key_value(document: &mut Value, path: &str, value: Value, separator: &str) -> Result<(), ToolbeltError> {
    let parts = segments(path, separator);
    let Some((last, parents)) = parts.split_last() else {
        *document = value;
        return Ok(());
    };

    let mut current = document;
    for segment in parents {
        current = descend_or_create(current, segment, path)?;
    }

    match current {
        Value::Array(items) => {
            let index = checked_index(items.len(), last, path)?;
            if index == items.len() {
                items.push(value);
            } else {
                items[index] = value;
            }
        }
        Value::Object(map) => {
            map.insert((*last).to_string(), value);
        }
        other => {
            let mut map = Map::new();
            map.insert((*last).to_string(), value);
            *other = Value::Object(map);
        }
    }
    Ok(())
}

fn checked_index(len: usize, segment: &str, path: &str) -> Result<usize, ToolbeltError> {
    match array_index(segment) {
        Some(index) if index <= len => Ok(index),
        Some(index) => Err(ToolbeltError::InvalidArgument(format!(
            "index {} is out of bounds (length {}) in path '{}'",
            index, len, path
        ))),
        None => Err(ToolbeltError::InvalidArgument(format!(
            "segment '{}' is not an array index in path '{}'",
            segment, path
        ))),
    }
}

fn descend_or_create<'v>(current: &'v mut Value, segment: &str, path: &str) -> Result<&'v mut Value, ToolbeltError> {
    if !current.is_object() && !current.is_array() {
        *current = Value::Object(Map::new());
    }
    match current {
        Value::Array(items) => {
            let index = checked_index(items.len(), segment, path)?;
            if index == items.len() {
                items.push(Value::Object(Map::new()));
            }
            Ok(&mut items[index])
        }
        Value::Object(map) => {
            let entry = map
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            Ok(entry)
        }
        _ => Err(ToolbeltError::Internal("container expected after normalization".to_string())),
    }
}

/// Writes `default` at `path` only when nothing is there yet.
///
/// Returns `Ok(true)` when the value was inserted, `Ok(false)` when `path`
/// already resolved.
pub fn ensure_key_value(document: &mut Value, path: &str, default: Value, separator: &str) -> Result<bool, ToolbeltError> {
    if has_key_value(document, path, separator) {
        return Ok(false);
    }
    set_key_value(document, path, default, separator)?;
    Ok(true)
}

/// Removes the value at `path` and returns it.
///
/// Missing segments are not an error and yield `None`. Object keys keep
/// their relative order; array elements after the index shift down. An empty
/// path replaces the whole document with `null`.
pub fn delete_key_value(document: &mut Value, path: &str, separator: &str) -> Option<Value> {
    let parts = segments(path, separator);
    let Some((last, parents)) = parts.split_last() else {
        return Some(std::mem::take(document));
    };

    let parent = parents
        .iter()
        .try_fold(document, |current, segment| child_mut(current, segment))?;

    match parent {
        Value::Object(map) => map.shift_remove(*last),
        Value::Array(items) => match array_index(last) {
            Some(index) if index < items.len() => Some(items.remove(index)),
            _ => None,
        },
        _ => None,
    }
}
