//! Error handling for the ATS scorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl AtsScorerError {
    /// The rejection returned when there is no resume text to score.
    pub fn missing_resume() -> Self {
        AtsScorerError::InvalidInput("please provide a resume".to_string())
    }
}

pub type Result<T> = std::result::Result<T, AtsScorerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AtsScorerError {
    fn from(err: anyhow::Error) -> Self {
        AtsScorerError::Processing(err.to_string())
    }
}

/// Regex compilation only fails on a malformed pattern or vocabulary entry
impl From<regex::Error> for AtsScorerError {
    fn from(err: regex::Error) -> Self {
        AtsScorerError::Processing(format!("Failed to compile pattern: {}", err))
    }
}
