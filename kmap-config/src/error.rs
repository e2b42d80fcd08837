//! Error types for kmap-config

use std::fmt;

use kmap::KeymapError;

/// Error of loading or validating a `keyboard.toml`
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// File I/O error
    FileRead { path: String, message: String },
    /// TOML parsing error
    TomlParse { path: String, message: String },
    /// Validation error with context
    Validation { field: String, message: String },
    /// Missing required field
    MissingField { field: String },
    /// Invalid value
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
    /// A key list or the layout doesn't have the expected size
    ShapeMismatch {
        field: String,
        expected: usize,
        found: usize,
    },
    /// Rejected while building the engine tables
    Keymap(KeymapError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileRead { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
            ConfigError::TomlParse { path, message } => {
                write!(f, "Failed to parse '{}': {}", path, message)
            }
            ConfigError::Validation { field, message } => {
                write!(f, "Validation error in '{}': {}", field, message)
            }
            ConfigError::MissingField { field } => {
                write!(f, "Missing required field: {}", field)
            }
            ConfigError::InvalidValue {
                field,
                value,
                expected,
            } => {
                write!(f, "Invalid value '{}' for '{}', expected: {}", value, field, expected)
            }
            ConfigError::ShapeMismatch { field, expected, found } => {
                write!(f, "'{}' has {} entries, expected {}", field, found, expected)
            }
            ConfigError::Keymap(e) => write!(f, "Invalid keymap: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Keymap(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KeymapError> for ConfigError {
    fn from(e: KeymapError) -> Self {
        ConfigError::Keymap(e)
    }
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
