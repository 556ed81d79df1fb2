use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeetError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Malformed time: '{0}'")]
    MalformedTime(String),
}

pub type Result<T> = std::result::Result<T, MeetError>;

impl MeetError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, MeetError::Configuration(_))
    }

    pub fn is_malformed_time(&self) -> bool {
        matches!(self, MeetError::MalformedTime(_))
    }
}
