//! CLI-specific error types and mappings.
//!
//! Maps core errors to exit codes and user-facing messages.

use promptlab_core::RunError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or input file error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (missing credential).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<RunError> for CliError {
    fn from(err: RunError) -> Self {
        match err {
            RunError::Configuration(msg) => Self::Config(msg),
            RunError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptlab_core::MISSING_API_KEY;

    #[test]
    fn test_missing_key_is_config_error() {
        let err: CliError = RunError::Configuration(MISSING_API_KEY.to_string()).into();
        assert_eq!(err.exit_code(), 78);
        assert_eq!(
            err.to_string(),
            "Configuration error: OPENROUTER_API_KEY not configured"
        );
    }

    #[test]
    fn test_validation_is_usage_error() {
        let err: CliError = RunError::Validation("prompt must not be empty".into()).into();
        assert_eq!(err.exit_code(), 2);
    }
}
