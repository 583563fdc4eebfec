use client_core::error::CoreError;
use client_core::error::config::ConfigError;
use client_core::error::link::LinkError;
use client_core::error::statistics::StatisticsError;
use client_core::error::verify_client::VerifyClientError;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by the command-line application.
#[derive(Debug, Error)]
pub enum BetterCalError {
    /// Error from this App (I/O, logger setup, missing directories)
    #[error("BetterCal Error: {message} {location}")]
    App {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core operations
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// The server did not accept the source URL; `message` is what the page shows.
    #[error("Verification Error: {message} {location}")]
    Verification {
        message: String,
        location: ErrorLocation,
    },
}

impl From<CoreError> for BetterCalError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        BetterCalError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for BetterCalError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        BetterCalError::from(CoreError::from(error))
    }
}

impl From<LinkError> for BetterCalError {
    #[track_caller]
    fn from(error: LinkError) -> Self {
        BetterCalError::from(CoreError::from(error))
    }
}

impl From<StatisticsError> for BetterCalError {
    #[track_caller]
    fn from(error: StatisticsError) -> Self {
        BetterCalError::from(CoreError::from(error))
    }
}

impl From<VerifyClientError> for BetterCalError {
    #[track_caller]
    fn from(error: VerifyClientError) -> Self {
        BetterCalError::from(CoreError::from(error))
    }
}

impl From<std::io::Error> for BetterCalError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        BetterCalError::App {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
