use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ClipboardError {
    #[error("Clipboard Write Error: {message} {location}")]
    Write {
        message: String,
        location: ErrorLocation,
    },
}
