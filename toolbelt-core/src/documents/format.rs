//! Whole-document formatting.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::trace;

use super::options::PlaceholderOptions;
use super::resolver::resolve_validated;
use crate::error::ToolbeltError;

struct Formatter<'s> {
    source: &'s Value,
    options: &'s PlaceholderOptions,
    resolved: HashMap<String, String>,
}

impl Formatter<'_> {
    fn format_value(&mut self, value: &Value) -> Value {
        match value {
            Value::String(text) if text.contains(&self.options.prefix) => Value::String(self.format_string(text)),
            Value::Array(items) => Value::Array(items.iter().map(|item| self.format_value(item)).collect()),
            Value::Object(map) => {
                let mut formatted = Map::with_capacity(map.len());
                for (key, item) in map {
                    formatted.insert(key.clone(), self.format_value(item));
                }
                Value::Object(formatted)
            }
            other => other.clone(),
        }
    }

    fn format_string(&mut self, text: &str) -> String {
        if let Some(hit) = self.resolved.get(text) {
            return hit.clone();
        }
        let resolved = resolve_validated(text, self.source, self.options);
        self.resolved.insert(text.to_string(), resolved.clone());
        resolved
    }
}

/// Resolves the placeholders of every string leaf in `document` against `source`.
///
/// Arrays, objects and key order are preserved; keys themselves are never
/// rewritten and non-string leaves are copied as they are. Identical strings
/// are resolved once per call.
///
/// # Errors
///
/// [`ToolbeltError::InvalidArgument`] when the options fail
/// [`PlaceholderOptions::validate`].
pub fn format_document_with(
    document: &Value,
    source: &Value,
    options: &PlaceholderOptions,
) -> Result<Value, ToolbeltError> {
    options.validate()?;
    let mut formatter = Formatter { source, options, resolved: HashMap::new() };
    let formatted = formatter.format_value(document);
    trace!(distinct_strings = formatter.resolved.len(), "Formatted document");
    Ok(formatted)
}

/// Resolves the placeholders of `document` against itself.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toolbelt_core::documents::{format_document, PlaceholderOptions};
///
/// let doc = json!({"host": "example.org", "urls": ["https://{{host}}/a", "https://{{host}}/b"]});
/// let formatted = format_document(&doc, &PlaceholderOptions::default()).unwrap();
/// assert_eq!(formatted["urls"][1], "https://example.org/b");
/// ```
pub fn format_document(document: &Value, options: &PlaceholderOptions) -> Result<Value, ToolbeltError> {
    format_document_with(document, document, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_format_document_preserves_shape() {
        let doc = json!({
            "name": "svc",
            "port": 8080,
            "enabled": true,
            "nothing": null,
            "url": "http://{{name}}:{{port}}",
            "nested": {"items": ["{{name}}", 1, {"deep": "{{nested.label}}"}], "label": "L"},
            "{{name}}": "keys are untouched"
        });
        let formatted = format_document(&doc, &PlaceholderOptions::default()).unwrap();
        assert_eq!(
            formatted,
            json!({
                "name": "svc",
                "port": 8080,
                "enabled": true,
                "nothing": null,
                "url": "http://svc:8080",
                "nested": {"items": ["svc", 1, {"deep": "L"}], "label": "L"},
                "{{name}}": "keys are untouched"
            })
        );
        let keys: Vec<&String> = formatted.as_object().unwrap().keys().collect();
        assert_eq!(keys.first().map(|k| k.as_str()), Some("name"));
        assert_eq!(keys.last().map(|k| k.as_str()), Some("{{name}}"));
    }

    #[test]
    fn test_format_document_with_external_source() {
        let doc = json!(["{{env}}", "{{db.{{env}}.host}}", "{{missing}}"]);
        let source = json!({"env": "prod", "db": {"prod": {"host": "db.internal"}}});
        let formatted = format_document_with(&doc, &source, &PlaceholderOptions::default()).unwrap();
        assert_eq!(formatted, json!(["prod", "db.internal", ""]));

        let kept = format_document_with(&doc, &source, &PlaceholderOptions::default().keep_missing(true)).unwrap();
        assert_eq!(kept[2], "{{missing}}");
    }

    #[test]
    fn test_format_document_with_cycles_terminates() {
        let doc = json!({"a": "{{b}}", "b": "{{a}}", "c": "ok {{c}}"});
        let formatted = format_document(&doc, &PlaceholderOptions::default().with_max_depth(3)).unwrap();
        assert!(formatted["a"].is_string());
        assert!(formatted["c"].as_str().unwrap().starts_with("ok ok ok"));
    }

    #[test]
    fn test_format_document_scalars_untouched() {
        let formatted = format_document(&json!(42), &PlaceholderOptions::default()).unwrap();
        assert_eq!(formatted, json!(42));
    }

    #[test]
    fn test_format_document_rejects_invalid_options() {
        let options = PlaceholderOptions::default().with_delimiters("#", "#");
        assert!(format_document(&json!({"a": "#a#"}), &options).is_err());
    }
}
