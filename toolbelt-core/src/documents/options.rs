//! Placeholder syntax and resolution policy.

use crate::config::DocumentsConfig;
use crate::error::ToolbeltError;

/// Syntax and policy used when resolving placeholders.
///
/// # Examples
///
/// ```
/// use toolbelt_core::documents::PlaceholderOptions;
///
/// let options = PlaceholderOptions::default().with_delimiters("${", "}").keep_missing(true);
/// assert_eq!(options.prefix, "${");
/// assert!(options.keep_missing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderOptions {
    /// Token opening a placeholder (`{{`).
    pub prefix: String,
    /// Token closing a placeholder (`}}`).
    pub suffix: String,
    /// Separator between the segments of the dotted path (`.`).
    pub separator: String,
    /// When `true`, unresolved placeholders are left in the output; otherwise
    /// they are replaced by an empty string.
    pub keep_missing: bool,
    /// Maximum number of passes over one string. Substituted text is scanned
    /// again on the next pass, so this also bounds reference cycles.
    pub max_depth: usize,
}

impl Default for PlaceholderOptions {
    fn default() -> Self {
        Self::from(&DocumentsConfig::default())
    }
}

impl From<&DocumentsConfig> for PlaceholderOptions {
    fn from(config: &DocumentsConfig) -> Self {
        Self {
            prefix: config.prefix.clone(),
            suffix: config.suffix.clone(),
            separator: config.separator.clone(),
            keep_missing: config.keep_missing,
            max_depth: config.max_depth,
        }
    }
}

impl PlaceholderOptions {
    pub fn with_delimiters(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn keep_missing(mut self, keep: bool) -> Self {
        self.keep_missing = keep;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Checks that the delimiters and the depth limit are usable.
    ///
    /// # Errors
    ///
    /// [`ToolbeltError::InvalidArgument`] for an empty prefix, suffix or
    /// separator, identical prefix and suffix, or a `max_depth` of 0.
    pub fn validate(&self) -> Result<(), ToolbeltError> {
        if self.prefix.is_empty() || self.suffix.is_empty() || self.separator.is_empty() {
            return Err(ToolbeltError::InvalidArgument(
                "placeholder prefix, suffix and separator must not be empty".to_string(),
            ));
        }
        if self.prefix == self.suffix {
            return Err(ToolbeltError::InvalidArgument(
                "placeholder prefix and suffix must differ".to_string(),
            ));
        }
        if self.max_depth == 0 {
            return Err(ToolbeltError::InvalidArgument(
                "placeholder max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
