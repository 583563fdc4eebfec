//! Error raised when a redacted secret is asked to serialize itself.

use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RedactError {
    /// A [`RedactedToken`](crate::RedactedToken) reached a serializer.
    #[error("Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}
