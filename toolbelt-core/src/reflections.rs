//! Reflection and Enumeration Helpers.
//!
//! - Type names: [`type_name_of`] and [`short_type_name`], the latter with
//!   module paths stripped (`alloc::vec::Vec<alloc::string::String>` becomes
//!   `Vec<String>`).
//! - [`snake_case`]: identifier conversion with a process-wide cache.
//! - [`Enumeration`]: string-valued enums with lookup and validation, usually
//!   declared through the [`enumeration!`](crate::enumeration) macro.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use tracing::trace;

use crate::error::ToolbeltError;

static SNAKE_CASE_CACHE: Lazy<RwLock<HashMap<String, String>>> = Lazy::new(|| RwLock::new(HashMap::new()));

/// Fully qualified name of `T`, as reported by the compiler.
pub fn type_name_of<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
}

/// Name of `T` with every module path removed, generic arguments included.
///
/// ```
/// use toolbelt_core::reflections::short_type_name;
///
/// assert_eq!(short_type_name::<Vec<String>>(), "Vec<String>");
/// assert_eq!(short_type_name::<Option<&str>>(), "Option<&str>");
/// ```
pub fn short_type_name<T: ?Sized>() -> String {
    strip_module_paths(type_name_of::<T>())
}

/// [`short_type_name`] of the type of `value`.
pub fn short_type_name_of_val<T: ?Sized>(_value: &T) -> String {
    short_type_name::<T>()
}

fn strip_module_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        if c == ':' && matches!(chars.peek(), Some((_, ':'))) {
            chars.next();
            segment_start = index + 2;
            continue;
        }
        if !(c.is_alphanumeric() || c == '_') {
            out.push_str(&full[segment_start..index]);
            out.push(c);
            segment_start = index + c.len_utf8();
        }
    }
    out.push_str(&full[segment_start..]);
    out
}

/// Converts an identifier to `snake_case`.
///
/// Word boundaries are a lowercase-to-uppercase transition, the last capital
/// of an acronym followed by a lowercase letter (`HTTPServer` → `http_server`),
/// and the separators `-`, `_`, space and `.`. Results are cached for the
/// lifetime of the process.
///
/// ```
/// use toolbelt_core::reflections::snake_case;
///
/// assert_eq!(snake_case("parseHTTPResponse"), "parse_http_response");
/// assert_eq!(snake_case("Content-Type"), "content_type");
/// ```
pub fn snake_case(input: &str) -> String {
    if let Ok(cache) = SNAKE_CASE_CACHE.read() {
        if let Some(hit) = cache.get(input) {
            return hit.clone();
        }
    }
    let converted = convert_snake_case(input);
    if let Ok(mut cache) = SNAKE_CASE_CACHE.write() {
        trace!(input, converted = %converted, "Caching snake_case conversion");
        cache.insert(input.to_string(), converted.clone());
    }
    converted
}

/// Empties the [`snake_case`] cache.
pub fn clear_snake_case_cache() {
    if let Ok(mut cache) = SNAKE_CASE_CACHE.write() {
        cache.clear();
    }
}

fn convert_snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);
    let mut pending_separator = false;

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '_' | '-' | ' ' | '.') {
            pending_separator = !result.is_empty();
            continue;
        }
        if c.is_uppercase() && !result.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).map_or(false, |n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                pending_separator = true;
            }
        }
        if pending_separator {
            result.push('_');
            pending_separator = false;
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// An enum whose cases map to fixed string values.
///
/// Implementors provide [`Enumeration::CASES`] and [`Enumeration::value`];
/// everything else has a default. Use [`enumeration!`](crate::enumeration)
/// to declare one.
pub trait Enumeration: Sized + Copy + fmt::Debug + 'static {
    /// Every case, in declaration order.
    const CASES: &'static [Self];

    /// String value of this case.
    fn value(&self) -> &'static str;

    /// Values of every case, in declaration order.
    fn values() -> Vec<&'static str> {
        Self::CASES.iter().map(|case| case.value()).collect()
    }

    fn includes(value: &str) -> bool {
        Self::from_value(value).is_some()
    }

    fn from_value(value: &str) -> Option<Self> {
        Self::CASES.iter().copied().find(|case| case.value() == value)
    }

    /// Like [`Enumeration::from_value`], with an error listing the allowed values.
    ///
    /// # Errors
    ///
    /// [`ToolbeltError::InvalidArgument`] when no case has `value`.
    fn validate(value: &str) -> Result<Self, ToolbeltError> {
        Self::from_value(value).ok_or_else(|| {
            ToolbeltError::InvalidArgument(format!(
                "Invalid {} value '{}'. Allowed values: {}.",
                short_type_name::<Self>(),
                value,
                Self::values().join(", ")
            ))
        })
    }

    /// Case name as written in the source (`DarkBlue`).
    fn name(&self) -> String {
        format!("{:?}", self)
    }
}

/// Declares a string-valued enum implementing [`Enumeration`].
///
/// The generated type also implements `Display` and `FromStr` through its
/// values, and serializes to / deserializes from its value with `serde`.
///
/// ```
/// use toolbelt_core::enumeration;
/// use toolbelt_core::reflections::Enumeration;
///
/// enumeration! {
///     /// Output formats.
///     pub enum Format {
///         Json = "json",
///         Cbor = "cbor",
///     }
/// }
///
/// assert_eq!(Format::values(), vec!["json", "cbor"]);
/// assert_eq!("cbor".parse::<Format>().unwrap(), Format::Cbor);
/// assert_eq!(Format::Json.to_string(), "json");
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $crate::reflections::Enumeration for $name {
            const CASES: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn value(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::reflections::Enumeration::value(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ToolbeltError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::reflections::Enumeration>::validate(s)
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str($crate::reflections::Enumeration::value(self))
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let value = <::std::string::String as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::reflections::Enumeration>::validate(&value)
                    .map_err(<D::Error as $crate::__serde::de::Error>::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    crate::enumeration! {
        /// Test palette.
        pub enum Color {
            Red = "red",
            /// Two words.
            DarkBlue = "dark-blue",
        }
    }

    assert_impl_all!(Color: Send, Sync, Enumeration, std::str::FromStr, serde::Serialize);

    struct Local;

    #[test]
    fn test_type_names() {
        assert_eq!(type_name_of::<u8>(), "u8");
        assert!(type_name_of::<Local>().ends_with("reflections::tests::Local"));
        assert_eq!(short_type_name::<Local>(), "Local");
        assert_eq!(short_type_name::<Vec<Option<Local>>>(), "Vec<Option<Local>>");
        assert_eq!(short_type_name_of_val(&Some(1u32)), "Option<u32>");
        assert_eq!(short_type_name::<[Local]>(), "[Local]");
    }

    #[test]
    fn test_strip_module_paths() {
        assert_eq!(strip_module_paths("alloc::vec::Vec<alloc::string::String>"), "Vec<String>");
        assert_eq!(strip_module_paths("(a::B, &c::D)"), "(B, &D)");
    }

    #[rstest]
    #[case("camelCase", "camel_case")]
    #[case("PascalCase", "pascal_case")]
    #[case("HTTPServer", "http_server")]
    #[case("parseHTTPResponse", "parse_http_response")]
    #[case("already_snake", "already_snake")]
    #[case("kebab-case-name", "kebab_case_name")]
    #[case("  spaced  words ", "spaced_words")]
    #[case("version2Beta", "version2_beta")]
    #[case("user.firstName", "user_first_name")]
    #[case("", "")]
    fn test_snake_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(snake_case(input), expected);
        assert_eq!(snake_case(input), expected, "cached result is identical");
    }

    #[test]
    fn test_clear_snake_case_cache() {
        assert_eq!(snake_case("ClearMe"), "clear_me");
        clear_snake_case_cache();
        assert_eq!(snake_case("ClearMe"), "clear_me");
    }

    #[test]
    fn test_enumeration_lookup() {
        assert_eq!(Color::CASES, &[Color::Red, Color::DarkBlue]);
        assert_eq!(Color::values(), vec!["red", "dark-blue"]);
        assert!(Color::includes("dark-blue"));
        assert!(!Color::includes("Dark-Blue"));
        assert_eq!(Color::from_value("red"), Some(Color::Red));
        assert_eq!(Color::DarkBlue.name(), "DarkBlue");
        assert_eq!(Color::DarkBlue.to_string(), "dark-blue");
    }

    #[test]
    fn test_enumeration_validate() {
        assert_eq!(Color::validate("red").unwrap(), Color::Red);
        match Color::validate("green") {
            Err(ToolbeltError::InvalidArgument(message)) => {
                assert!(message.contains("Color"));
                assert!(message.contains("'green'"));
                assert!(message.contains("red, dark-blue"));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
        assert!("green".parse::<Color>().is_err());
    }

    #[test]
    fn test_enumeration_serde() {
        let json = serde_json::to_string(&vec![Color::DarkBlue, Color::Red]).unwrap();
        assert_eq!(json, r#"["dark-blue","red"]"#);
        let back: Vec<Color> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Color::DarkBlue, Color::Red]);
        assert!(serde_json::from_str::<Color>(r#""green""#).is_err());
    }
}
