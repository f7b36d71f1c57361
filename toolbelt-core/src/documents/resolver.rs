//! Placeholder parsing and string resolution.
//!
//! A template is parsed into text and placeholder segments. Placeholders may
//! contain other placeholders (`{{config.{{env}}.url}}`); the innermost ones
//! are rendered first and their output becomes part of the enclosing path.
//! A prefix without a matching suffix is kept as literal text, and so is a
//! prefix opened deeper than [`MAX_NESTING`] levels.

use serde_json::Value;
use tracing::warn;

use super::options::PlaceholderOptions;
use crate::error::ToolbeltError;
use crate::objects::get_key_value;

/// Deepest placeholder nesting the parser opens.
pub const MAX_NESTING: usize = 32;

#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Text(&'a str),
    Placeholder(Vec<Segment<'a>>),
}

struct Parser<'a, 'o> {
    input: &'a str,
    prefix: &'o str,
    suffix: &'o str,
    pos: usize,
    depth: usize,
}

impl<'a, 'o> Parser<'a, 'o> {
    fn new(input: &'a str, options: &'o PlaceholderOptions) -> Self {
        Self { input, prefix: &options.prefix, suffix: &options.suffix, pos: 0, depth: 0 }
    }

    fn parse(mut self) -> Vec<Segment<'a>> {
        self.parse_sequence(false).0
    }

    /// Parses until the end of input or, when `nested`, until the closing suffix.
    ///
    /// Returns the segments and whether a closing suffix was consumed.
    fn parse_sequence(&mut self, nested: bool) -> (Vec<Segment<'a>>, bool) {
        let mut segments = Vec::new();
        let mut text_start = self.pos;

        while self.pos < self.input.len() {
            let rest = &self.input[self.pos..];

            if nested && rest.starts_with(self.suffix) {
                push_text(&mut segments, &self.input[text_start..self.pos]);
                self.pos += self.suffix.len();
                return (segments, true);
            }

            if rest.starts_with(self.prefix) {
                if self.depth >= MAX_NESTING {
                    self.pos += self.prefix.len();
                    continue;
                }
                push_text(&mut segments, &self.input[text_start..self.pos]);
                let open = self.pos;
                self.pos += self.prefix.len();
                self.depth += 1;
                let (children, closed) = self.parse_sequence(true);
                self.depth -= 1;
                if closed {
                    segments.push(Segment::Placeholder(children));
                } else {
                    segments.push(Segment::Text(&self.input[open..open + self.prefix.len()]));
                    segments.extend(children);
                }
                text_start = self.pos;
                continue;
            }

            self.pos += rest.chars().next().map_or(1, char::len_utf8);
        }

        push_text(&mut segments, &self.input[text_start..self.pos]);
        (segments, false)
    }
}

fn push_text<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str) {
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
}

fn contains_placeholder(segments: &[Segment<'_>]) -> bool {
    segments.iter().any(|segment| matches!(segment, Segment::Placeholder(_)))
}

/// Renders a resolved value as placeholder replacement text.
///
/// Strings are inserted verbatim, `null` as an empty string, other scalars
/// through their JSON representation and containers as compact JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn render(segments: &[Segment<'_>], source: &Value, options: &PlaceholderOptions) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder(children) => {
                let key = render(children, source, options);
                let path = key.trim();
                let found = if path.is_empty() { None } else { get_key_value(source, path, &options.separator) };
                match found {
                    Some(value) => out.push_str(&value_to_text(value)),
                    None if options.keep_missing => {
                        out.push_str(&options.prefix);
                        out.push_str(&key);
                        out.push_str(&options.suffix);
                    }
                    None => {}
                }
            }
        }
    }
    out
}

/// `true` when `text` contains at least one complete placeholder.
pub fn has_placeholders(text: &str, options: &PlaceholderOptions) -> bool {
    if options.prefix.is_empty() || options.suffix.is_empty() || !text.contains(&options.prefix) {
        return false;
    }
    contains_placeholder(&Parser::new(text, options).parse())
}

/// Resolution loop shared with the document formatter; `options` must be valid.
pub(crate) fn resolve_validated(template: &str, source: &Value, options: &PlaceholderOptions) -> String {
    let mut current = template.to_string();
    for _ in 0..options.max_depth {
        if !current.contains(&options.prefix) {
            return current;
        }
        let segments = Parser::new(&current, options).parse();
        if !contains_placeholder(&segments) {
            return current;
        }
        let next = render(&segments, source, options);
        if next == current {
            return current;
        }
        current = next;
    }
    if has_placeholders(&current, options) && !options.keep_missing {
        warn!(
            template,
            max_depth = options.max_depth,
            "Placeholder resolution stopped at the depth limit, references may be circular"
        );
    }
    current
}

/// Replaces every placeholder in `template` with the value found at its
/// dotted path in `source`.
///
/// Substituted text is scanned again, so values may themselves contain
/// placeholders. Scanning stops at a fixed point or after
/// `options.max_depth` passes, which also ends reference cycles such as
/// `a = "{{b}}"`, `b = "{{a}}"`. With `keep_missing`, an unresolved token is
/// kept with its inner placeholders already resolved.
///
/// # Errors
///
/// [`ToolbeltError::InvalidArgument`] when the options fail
/// [`PlaceholderOptions::validate`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toolbelt_core::documents::{resolve_placeholders, PlaceholderOptions};
///
/// let source = json!({"env": "prod", "config": {"prod": {"url": "https://example.org"}}});
/// let resolved = resolve_placeholders("{{config.{{env}}.url}}/api", &source, &PlaceholderOptions::default()).unwrap();
/// assert_eq!(resolved, "https://example.org/api");
/// ```
pub fn resolve_placeholders(template: &str, source: &Value, options: &PlaceholderOptions) -> Result<String, ToolbeltError> {
    options.validate()?;
    Ok(resolve_validated(template, source, options))
}
