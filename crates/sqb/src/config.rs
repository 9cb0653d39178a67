use serde::{Deserialize, Serialize};

/// Default cap on the bytes a scratch buffer may hold and still be pooled.
pub const DEFAULT_MAX_RETAINED_CAPACITY: usize = 64 << 10;

/// Placeholder marker written for each bound argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// `?` (MySQL, SQLite, database/sql style drivers)
    #[default]
    Question,
    /// `$1, $2, ...` numbered in emission order (Postgres)
    Numbered,
}

/// Configuration for building queries.
///
/// The defaults reproduce plain `?` output; nothing needs to be configured for
/// the common case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Placeholder marker emitted for arguments.
    pub placeholder: PlaceholderStyle,
    /// Scratch buffers holding more than this many bytes (text plus argument
    /// storage) are dropped instead of returned to the pool.
    pub max_retained_capacity: usize,
    /// Truncate SQL in log events (in chars). `None` means no truncation.
    pub max_log_sql_length: Option<usize>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            placeholder: PlaceholderStyle::Question,
            max_retained_capacity: DEFAULT_MAX_RETAINED_CAPACITY,
            max_log_sql_length: Some(200),
        }
    }
}

impl BuildConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder style.
    pub fn with_placeholder(mut self, style: PlaceholderStyle) -> Self {
        self.placeholder = style;
        self
    }

    /// Use `$1, $2, ...` placeholders.
    pub fn numbered(self) -> Self {
        self.with_placeholder(PlaceholderStyle::Numbered)
    }

    /// Set the pool retention cap in bytes.
    pub fn with_max_retained_capacity(mut self, bytes: usize) -> Self {
        self.max_retained_capacity = bytes;
        self
    }

    /// Set maximum SQL length shown in log events.
    pub fn with_max_log_sql_length(mut self, len: usize) -> Self {
        self.max_log_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in log events.
    pub fn no_log_truncate(mut self) -> Self {
        self.max_log_sql_length = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_question_marks() {
        let config = BuildConfig::new();
        assert_eq!(config.placeholder, PlaceholderStyle::Question);
        assert_eq!(config.max_retained_capacity, 64 * 1024);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: BuildConfig = serde_json::from_str(r#"{"placeholder":"numbered"}"#).unwrap();
        assert_eq!(config.placeholder, PlaceholderStyle::Numbered);
        assert_eq!(config.max_retained_capacity, DEFAULT_MAX_RETAINED_CAPACITY);
        assert_eq!(config.max_log_sql_length, Some(200));
    }

    #[test]
    fn serializes_style_in_snake_case() {
        let json = serde_json::to_value(BuildConfig::new().numbered().no_log_truncate()).unwrap();
        assert_eq!(json["placeholder"], "numbered");
        assert!(json["max_log_sql_length"].is_null());
    }
}
