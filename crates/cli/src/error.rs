use std::path::PathBuf;

/// Crucible error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Manifest not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Environment variable referenced by the manifest is not set.
    #[error("secret ${{{var}}} is not set (network `{network}`)")]
    MissingSecret { var: String, network: String },

    /// Credential string is not a placeholder and not a valid key.
    #[error("invalid signing key for network `{network}`: {reason}")]
    InvalidKey { network: String, reason: String },

    /// Network name not declared in the manifest.
    #[error("unknown network `{name}`{}", suggestion_suffix(.suggestion))]
    UnknownNetwork {
        name: String,
        suggestion: Option<String>,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean `{}`?)", s),
        None => String::new(),
    }
}

/// Result type using crucible Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Manifest is consistent
    Success = 0,
    /// One or more validation findings at error severity
    CheckFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::MissingSecret { .. } | Error::InvalidKey { .. } => ExitCode::CheckFailed,
            Error::UnknownNetwork { .. } => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
