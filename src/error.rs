use thiserror::Error;

/// Main error type for Glossmap
#[derive(Error, Debug)]
pub enum GlossmapError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Glossary data failed to decode into valid term/edge records
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenient Result type using GlossmapError
pub type Result<T> = std::result::Result<T, GlossmapError>;
