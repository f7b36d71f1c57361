//! Option Maps.
//!
//! Helpers for functions that accept a loose map of options: merging
//! caller-supplied values over defaults, rejecting unknown keys, and moving
//! between option maps and typed option structs through `serde`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ToolbeltError;

/// Merges `given` over `defaults`.
///
/// Values from `given` win. When both sides hold an object under the same
/// key, the two objects are merged recursively; any other combination
/// replaces the default.
///
/// # Arguments
///
/// * `defaults`: the complete set of accepted options with their defaults.
/// * `given`: the options supplied by the caller.
/// * `strict`: when `true`, a key of `given` that has no counterpart in
///   `defaults` is rejected. Nested keys are checked under object defaults,
///   and an empty default object accepts any keys.
///
/// # Errors
///
/// [`ToolbeltError::InvalidArgument`] naming the dotted path of the first
/// unknown option in strict mode.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toolbelt_core::options::resolve_options;
///
/// let defaults = json!({"retries": 3, "http": {"timeout": 30, "proxy": null}});
/// let given = json!({"http": {"timeout": 5}});
/// let resolved = resolve_options(
///     defaults.as_object().unwrap(),
///     given.as_object().unwrap(),
///     true,
/// ).unwrap();
/// assert_eq!(serde_json::Value::Object(resolved), json!({"retries": 3, "http": {"timeout": 5, "proxy": null}}));
/// ```
pub fn resolve_options(
    defaults: &Map<String, Value>,
    given: &Map<String, Value>,
    strict: bool,
) -> Result<Map<String, Value>, ToolbeltError> {
    merge_level(defaults, given, strict, "")
}

fn merge_level(
    defaults: &Map<String, Value>,
    given: &Map<String, Value>,
    strict: bool,
    parent: &str,
) -> Result<Map<String, Value>, ToolbeltError> {
    let mut merged = defaults.clone();
    for (key, value) in given {
        let path = if parent.is_empty() { key.clone() } else { format!("{}.{}", parent, key) };
        match (defaults.get(key), value) {
            (Some(Value::Object(default_obj)), Value::Object(given_obj)) if !default_obj.is_empty() => {
                let nested = merge_level(default_obj, given_obj, strict, &path)?;
                merged.insert(key.clone(), Value::Object(nested));
            }
            (Some(_), _) => {
                merged.insert(key.clone(), value.clone());
            }
            (None, _) if strict => {
                let mut allowed: Vec<&str> = defaults.keys().map(String::as_str).collect();
                allowed.sort_unstable();
                return Err(ToolbeltError::InvalidArgument(format!(
                    "Unknown option '{}'. Expected one of: {}.",
                    path,
                    allowed.join(", ")
                )));
            }
            (None, _) => {
                debug!(option = %path, "Keeping option without default");
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(merged)
}

/// Deserializes an option value (usually an object) into a typed struct.
///
/// Missing fields follow the struct's own `#[serde(default)]` attributes.
///
/// # Errors
///
/// [`ToolbeltError::Json`] when the value does not match `T`.
pub fn hydrate_options<T: DeserializeOwned>(value: &Value) -> Result<T, ToolbeltError> {
    Ok(T::deserialize(value)?)
}

/// Serializes typed options back into an option map.
///
/// With `skip_nulls`, `null` entries of objects are dropped at every depth;
/// array elements are kept.
///
/// # Errors
///
/// - [`ToolbeltError::Json`] when `options` cannot be serialized,
/// - [`ToolbeltError::InvalidArgument`] when it does not serialize to an object.
pub fn options_to_map<T: Serialize>(options: &T, skip_nulls: bool) -> Result<Map<String, Value>, ToolbeltError> {
    match serde_json::to_value(options)? {
        Value::Object(mut map) => {
            if skip_nulls {
                strip_null_entries(&mut map);
            }
            Ok(map)
        }
        other => Err(ToolbeltError::InvalidArgument(format!(
            "Options must serialize to an object, got: {}",
            other
        ))),
    }
}

fn strip_null_entries(map: &mut Map<String, Value>) {
    map.retain(|_, value| !value.is_null());
    for value in map.values_mut() {
        if let Value::Object(inner) = value {
            strip_null_entries(inner);
        }
    }
}
