use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImporterError>;

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Meet error: {0}")]
    MeetError(#[from] meet::MeetError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Sheet error: {0}")]
    SheetError(String),
}
