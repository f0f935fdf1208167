//! Error types and exit codes for finder
//!
//! Exit codes:
//! - 0: Success (a search that finds nothing is still a success)
//! - 1: Generic failure
//! - 2: Usage error (bad query, unsupported entity type, bad flags)
//! - 3: Data error (missing gazetteer, unreadable candidate store)

mod macros;

use thiserror::Error;

/// Exit codes for the finder CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad query or arguments (2)
    Usage = 2,
    /// Data error - missing or unreadable data source (3)
    Data = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

impl From<rusqlite::Error> for FinderError {
    fn from(err: rusqlite::Error) -> Self {
        FinderError::Store {
            operation: "query candidate store".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Errors that can occur while resolving entities
///
/// A search that completes without matches is *not* an error: it is
/// reported through [`crate::matching::FindResult::errors`].
#[derive(Error, Debug)]
pub enum FinderError {
    // Invalid arguments (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("missing query: at least one search field is required")]
    MissingQuery,

    #[error("missing candidate store")]
    MissingStore,

    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("failed to {operation}: {reason}")]
    Store { operation: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl FinderError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        FinderError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        FinderError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a data source that could not be located
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        FinderError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed candidate store operation
    pub fn store_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        FinderError::Store {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// True for the malformed-input family that callers must fix before retrying
    pub fn is_invalid_argument(&self) -> bool {
        self.exit_code() == ExitCode::Usage
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FinderError::UnknownFormat(_)
            | FinderError::UsageError(_)
            | FinderError::MissingQuery
            | FinderError::MissingStore
            | FinderError::MissingField { .. }
            | FinderError::InvalidValue { .. }
            | FinderError::Unsupported { .. } => ExitCode::Usage,

            FinderError::NotFound { .. } => ExitCode::Data,

            FinderError::Store { .. }
            | FinderError::Io(_)
            | FinderError::Json(_)
            | FinderError::Toml(_)
            | FinderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            FinderError::UnknownFormat(_) => "unknown_format",
            FinderError::UsageError(_) => "usage_error",
            FinderError::MissingQuery => "missing_query",
            FinderError::MissingStore => "missing_store",
            FinderError::MissingField { .. } => "missing_field",
            FinderError::InvalidValue { .. } => "invalid_value",
            FinderError::Unsupported { .. } => "unsupported",
            FinderError::NotFound { .. } => "not_found",
            FinderError::Store { .. } => "store_error",
            FinderError::Io(_) => "io_error",
            FinderError::Json(_) => "json_error",
            FinderError::Toml(_) => "toml_error",
            FinderError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for finder operations
pub type Result<T> = std::result::Result<T, FinderError>;
