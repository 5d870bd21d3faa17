//! Error types for mergington

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Participant not found in activity")]
    ParticipantNotFound,

    #[error("Student already signed up")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),

    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_email(msg: impl Into<String>) -> Self {
        Error::InvalidEmail(msg.into())
    }

    pub fn invalid_capacity(msg: impl Into<String>) -> Self {
        Error::InvalidCapacity(msg.into())
    }

    pub fn invalid_seed(msg: impl Into<String>) -> Self {
        Error::InvalidSeed(msg.into())
    }

    /// Failures a caller can fix by changing the request.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidEmail(_) | Error::InvalidCapacity(_))
    }
}
