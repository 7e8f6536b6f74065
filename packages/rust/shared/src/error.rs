//! Error types for coursemark.
//!
//! Library crates use [`CoursemarkError`] via `thiserror`.
//! The CLI app wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all coursemark operations.
#[derive(Debug, thiserror::Error)]
pub enum CoursemarkError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// A required input table is missing or malformed. Fatal to the whole
    /// run: no documents can be produced without it.
    #[error("load error in table '{table}': {message}")]
    Load { table: String, message: String },

    /// Requested category identifier has no matching category-page row.
    #[error("category '{category_id}' not found in category pages table")]
    NotFound { category_id: String },

    /// Data validation error (bad document shape, invalid format, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CoursemarkError>;

impl CoursemarkError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a load error for a named input table.
    pub fn load(table: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Load {
            table: table.into(),
            message: msg.into(),
        }
    }

    /// Create a not-found error for a category identifier.
    pub fn not_found(category_id: impl Into<String>) -> Self {
        Self::NotFound {
            category_id: category_id.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = CoursemarkError::load("02_category_pages.csv", "missing header");
        assert_eq!(
            err.to_string(),
            "load error in table '02_category_pages.csv': missing header"
        );

        let err = CoursemarkError::not_found("CAT9");
        assert!(err.to_string().contains("CAT9"));
    }
}
