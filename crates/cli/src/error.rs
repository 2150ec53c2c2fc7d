use std::path::PathBuf;

/// Ingest error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Remote locator did not decompose into a user/repo pair
    #[error("invalid repository source: '{0}'")]
    InvalidLocator(String),

    /// Pattern token with characters outside the allowed set
    #[error(
        "pattern '{token}' contains invalid characters; only alphanumeric characters, \
         dash (-), underscore (_), dot (.), slash (/), plus (+), and asterisk (*) are allowed"
    )]
    InvalidPattern { token: String },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using ingest Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Query resolved successfully
    Success = 0,
    /// Malformed source or pattern input
    InvalidInput = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidLocator(_) | Error::InvalidPattern { .. } => ExitCode::InvalidInput,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
