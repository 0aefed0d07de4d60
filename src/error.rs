use thiserror::Error;

/// Errors that can end the recipe load
///
/// These never escape the load task; they are handed to a
/// [`DiagnosticSink`](crate::diagnostics::DiagnosticSink) and the page keeps
/// rendering with whatever list it had.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The request was rejected, timed out, or answered with a non-2xx status
    #[error("Failed to fetch recipes: {0}")]
    NetworkFailure(String),

    /// The body is not JSON or does not hold a list of complete recipes
    #[error("Malformed recipes response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LoadError::MalformedResponse(err.to_string())
        } else {
            LoadError::NetworkFailure(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::MalformedResponse(err.to_string())
    }
}

/// Errors from the outer surface: configuration, client setup, output
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// Writing the rendered page failed
    #[error("Failed to write page: {0}")]
    Io(#[from] std::io::Error),
}
