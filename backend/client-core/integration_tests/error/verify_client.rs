use client_core::error::verify_client::VerifyClientError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

/// **VALUE**: Verifies verification errors log their origin location.
///
/// **WHY THIS MATTERS**: Logged failures are the only trace of a failed verify.
/// Without the location, it is unclear whether the client or the server failed.
///
/// **BUG THIS CATCHES**: Would catch the location being dropped from Display.
#[test]
fn given_rejected_error_when_formatted_then_includes_status_message_and_location() {
    let err = VerifyClientError::Rejected {
        status: HttpStatusCode(404),
        message: "token expired".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error_string = format!("{}", err);

    assert!(error_string.contains("Verification Rejected Error"));
    assert!(error_string.contains("HTTP 404"));
    assert!(error_string.contains("token expired"));
    assert!(error_string.contains("verify_client.rs"));
}

/// **VALUE**: Verifies the user-facing text never contains the location suffix.
#[test]
fn given_any_error_when_user_message_built_then_no_location_included() {
    let err = VerifyClientError::Transport {
        message: "connection refused".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let message = err.user_message();

    assert_eq!(message, "Could not connect to the server: connection refused");
    assert!(!message.contains(".rs:"));
}

#[test]
fn given_url_parse_failure_when_converted_then_url_parse_variant() {
    let parse_error = url::Url::parse("::").unwrap_err();

    let err = VerifyClientError::from(parse_error);

    assert!(matches!(err, VerifyClientError::UrlParse { .. }));
    assert_eq!(err.status(), None);
}

/// **VALUE**: Verifies a malformed server address is not reported as an outage.
///
/// **BUG THIS CATCHES**: Would catch configuration faults being labelled
/// "Could not connect", sending the user to check their network.
#[test]
fn given_url_parse_error_when_user_message_built_then_invalid_address_label() {
    let err = VerifyClientError::from(url::Url::parse("::").unwrap_err());

    let message = err.user_message();

    assert!(message.starts_with("Invalid server address: "));
    assert!(!message.contains("Could not connect"));
}
