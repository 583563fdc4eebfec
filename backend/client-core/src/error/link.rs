use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum LinkError {
    #[error("Invalid Source URL Error: {message} {location}")]
    InvalidSourceUrl {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Origin Error: {message} {location}")]
    InvalidOrigin {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown Option Error: {key} {location}")]
    UnknownOption { key: String, location: ErrorLocation },
}

impl LinkError {
    /// The failure description without the location suffix.
    pub fn message(&self) -> &str {
        match self {
            LinkError::InvalidSourceUrl { message, .. }
            | LinkError::InvalidOrigin { message, .. } => message,
            LinkError::UnknownOption { key, .. } => key,
        }
    }
}
