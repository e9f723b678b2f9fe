//! Error handling for punygen

use thiserror::Error;

/// Main error type for punygen
#[derive(Error, Debug, Clone)]
pub enum PunygenError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Encoding error for '{input}': {message}")]
    Encoding { input: String, message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl PunygenError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an encoding error
    pub fn encoding(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Encoding {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Whether this error is a usage problem the user can fix by changing flags
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Cli { .. } | Self::Config { .. })
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => format!(
                "Configuration problem: {}\nHint: check your .env file or PUNYGEN_* variables",
                message
            ),
            Self::Encoding { input, message } => {
                format!("Could not encode '{}': {}", input, message)
            }
            Self::Io { message, path: Some(path) } => {
                format!("Error reading input ({}): {}", path, message)
            }
            Self::Io { message, path: None } => {
                format!("I/O error: {}", message)
            }
            Self::Internal { message } => {
                format!("Internal error: {}\nHint: this is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("Error: {}", message)
            }
        }
    }
}

impl From<serde_json::Error> for PunygenError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON serialization failed: {}", err))
    }
}

impl From<std::io::Error> for PunygenError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PunygenError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::PunygenError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PunygenError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! cli_error {
    ($msg:expr) => {
        $crate::error::PunygenError::cli($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PunygenError::cli(format!($fmt, $($arg)*))
    };
}
