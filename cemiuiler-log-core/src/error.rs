//! Error types for the logging facade.
//!
//! Formatting and emission never fail. Errors only show up around the edges:
//!
//! - [`ConfigError`] - Reading or parsing preferences
//! - [`BuildError`] - Assembling a logger from its parts
//! - [`HookError`] - A hook that failed while being initialized

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while reading preferences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The key is not present in the preference store.
    #[error("preference not found: {0}")]
    Missing(String),

    /// The key exists but holds a value of another type.
    #[error("preference {key} is {found}, expected {expected}")]
    TypeMismatch {
        /// The preference key.
        key: String,
        /// The type that was requested.
        expected: &'static str,
        /// The type actually stored.
        found: &'static str,
    },

    /// A string could not be read as a boolean.
    #[error("invalid boolean value: {0:?}")]
    InvalidBool(String),

    /// A `key=value` line could not be parsed.
    #[error("malformed preference on line {line}: {content:?}")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },
}

/// Errors that can occur when building a logger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No sink was configured.
    #[error("logger has no sink configured")]
    MissingSink,
}

/// Errors reported by a hook during initialization.
#[derive(Error, Debug)]
pub enum HookError {
    /// The hook's init returned an error.
    #[error("{0}")]
    Init(#[source] BoxError),

    /// The hook panicked during init.
    #[error("hook panicked: {0}")]
    Panic(String),
}

impl From<BoxError> for HookError {
    fn from(err: BoxError) -> Self {
        HookError::Init(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = ConfigError::TypeMismatch {
            key: "settings_disable_detailed_log".into(),
            expected: "bool",
            found: "int",
        };
        assert_eq!(
            err.to_string(),
            "preference settings_disable_detailed_log is int, expected bool"
        );
    }

    #[test]
    fn test_hook_init_is_transparent_to_cause() {
        let cause: BoxError = "class not found".into();
        let err = HookError::from(cause);
        assert_eq!(err.to_string(), "class not found");
        assert!(std::error::Error::source(&err).is_some());
    }
}
