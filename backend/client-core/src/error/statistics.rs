use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum StatisticsError {
    #[error("Chart Data Parse Error: {message} {location}")]
    Parse {
        message: String,
        location: ErrorLocation,
    },
}

impl From<serde_json::Error> for StatisticsError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        StatisticsError::Parse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
