use thiserror::Error;

/// Errors that can occur while loading, cleaning, or writing a collection
#[derive(Error, Debug)]
pub enum DedupError {
    /// Failed to read or write a collection file
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Collection file contained malformed JSON
    #[error("Failed to parse collection: {0}")]
    Json(#[from] serde_json::Error),

    /// Input did not have the expected shape (an array of recipe records)
    #[error("Invalid collection input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
