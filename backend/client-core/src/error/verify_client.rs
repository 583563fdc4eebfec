use common::{ErrorLocation, HttpStatusCode};

use std::error::Error as StdError;
use std::panic::Location;

use thiserror::Error as ThisError;

const CONNECTION_FAILURE_LABEL: &str = "Could not connect to the server: ";
const STATUS_FALLBACK_LABEL: &str = "Server returned: ";
const INVALID_SERVER_ADDRESS_LABEL: &str = "Invalid server address: ";

#[derive(Debug, ThisError)]
pub enum VerifyClientError {
    /// Non-2xx response whose body explains the rejection.
    #[error("Verification Rejected Error: HTTP {status} - {message} {location}")]
    Rejected {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    /// Non-2xx response with an empty body.
    #[error("Verification Status Error: HTTP {status} {reason} {location}")]
    Status {
        status: HttpStatusCode,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl VerifyClientError {
    /// Text shown to the user for this failure.
    ///
    /// Server bodies are shown as-is; an empty body falls back to the status
    /// phrase; a request that never reached the server gets the connection label.
    pub fn user_message(&self) -> String {
        match self {
            VerifyClientError::Rejected { message, .. } => message.clone(),
            VerifyClientError::Status { reason, .. } => format!("{STATUS_FALLBACK_LABEL}{reason}"),
            VerifyClientError::Transport { message, .. } => {
                format!("{CONNECTION_FAILURE_LABEL}{message}")
            }
            VerifyClientError::UrlParse { message, .. } => {
                format!("{INVALID_SERVER_ADDRESS_LABEL}{message}")
            }
        }
    }

    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            VerifyClientError::Rejected { status, .. } | VerifyClientError::Status { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<url::ParseError> for VerifyClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        VerifyClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for VerifyClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        VerifyClientError::Transport {
            message: describe_transport_error(error),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Failure text for a request that never completed.
///
/// The request URL embeds the source URL and its token, so it is stripped;
/// the cause chain carries no URL and is appended instead.
fn describe_transport_error(error: reqwest::Error) -> String {
    let error = error.without_url();
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
