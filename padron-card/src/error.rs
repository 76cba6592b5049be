//! Error types for the card library

use thiserror::Error;

/// Card rendering error types
#[derive(Debug, Error)]
pub enum CardError {
    /// PDF document assembly or serialization error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Card content that cannot be rendered
    #[error("Invalid content: {0}")]
    InvalidContent(String),
}

impl From<std::io::Error> for CardError {
    fn from(err: std::io::Error) -> Self {
        CardError::Pdf(lopdf::Error::from(err))
    }
}

/// Result type for card operations
pub type CardResult<T> = Result<T, CardError>;
