use crate::helpers::{SOURCE, mount_verify, unreachable_origin};

use client_core::error::verify_client::VerifyClientError;
use client_core::verify_client::{Verifier, VerifyClient};

use std::time::Duration;

use futures_util::future::join;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies a 2xx from `/verify` counts as success.
#[tokio::test]
async fn given_server_accepts_url_when_verifying_then_ok() {
    let server = MockServer::start().await;
    mount_verify(&server, SOURCE, ResponseTemplate::new(200).set_body_string("Ok")).await;
    let client = VerifyClient::new(&server.uri()).unwrap();

    let result = client.verify(SOURCE).await;

    assert!(result.is_ok(), "Expected Ok, got {:?}", result);
}

/// **VALUE**: Verifies the source URL travels as a single encoded `url` parameter.
///
/// **BUG THIS CATCHES**: Would catch the source's own `&locale=` leaking out as a
/// second top-level parameter because it was not escaped.
#[test]
fn given_source_with_query_when_url_built_then_source_fully_escaped() {
    let client = VerifyClient::new("http://127.0.0.1:5000/some/page").unwrap();

    let url = client.verify_url(SOURCE).unwrap();

    assert_eq!(url.path(), "/verify");
    let pairs: Vec<_> = url.query_pairs().collect();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "url");
    assert_eq!(pairs[0].1, SOURCE);
}

#[tokio::test]
async fn given_rejection_with_body_when_verifying_then_rejected_error_with_body() {
    let server = MockServer::start().await;
    mount_verify(
        &server,
        SOURCE,
        ResponseTemplate::new(404).set_body_string("token expired"),
    )
    .await;
    let client = VerifyClient::new(&server.uri()).unwrap();

    let err = client.verify(SOURCE).await.unwrap_err();

    match &err {
        VerifyClientError::Rejected {
            status, message, ..
        } => {
            assert_eq!(status.0, 404);
            assert_eq!(message, "token expired");
        }
        other => panic!("Expected Rejected, got {:?}", other),
    }
    assert_eq!(err.user_message(), "token expired");
}

/// **VALUE**: Verifies an empty error body falls back to the status phrase.
#[tokio::test]
async fn given_empty_500_when_verifying_then_status_error_with_reason_phrase() {
    let server = MockServer::start().await;
    mount_verify(&server, SOURCE, ResponseTemplate::new(500)).await;
    let client = VerifyClient::new(&server.uri()).unwrap();

    let err = client.verify(SOURCE).await.unwrap_err();

    assert!(matches!(err, VerifyClientError::Status { .. }));
    assert_eq!(err.status().map(|s| s.0), Some(500));
    assert!(err.user_message().contains("Internal Server Error"));
}

#[tokio::test]
async fn given_whitespace_body_when_verifying_then_treated_as_empty() {
    let server = MockServer::start().await;
    mount_verify(
        &server,
        SOURCE,
        ResponseTemplate::new(400).set_body_string("  \n"),
    )
    .await;
    let client = VerifyClient::new(&server.uri()).unwrap();

    let err = client.verify(SOURCE).await.unwrap_err();

    assert_eq!(err.user_message(), "Server returned: Bad Request");
}

/// **VALUE**: Verifies connection failures carry the connection label.
#[tokio::test]
async fn given_nothing_listening_when_verifying_then_transport_error() {
    let client = VerifyClient::new(&unreachable_origin()).unwrap();

    let err = client.verify(SOURCE).await.unwrap_err();

    assert!(matches!(err, VerifyClientError::Transport { .. }));
    assert!(err.user_message().starts_with("Could not connect to the server: "));
}

/// **VALUE**: Verifies connection failures never carry the calendar token.
///
/// **WHY THIS MATTERS**: The request URL embeds the whole source URL, and the
/// transport error text is logged to file and shown on screen.
///
/// **BUG THIS CATCHES**: Would catch the request URL being copied into the
/// error message.
#[tokio::test]
async fn given_token_in_source_when_connection_fails_then_error_text_omits_token() {
    let source = "https://tiss.example/cal?token=SECRET123&locale=de";
    let client = VerifyClient::new(&unreachable_origin()).unwrap();

    let err = client.verify(source).await.unwrap_err();

    let rendered = err.to_string();
    let message = err.user_message();
    assert!(!rendered.contains("SECRET123"), "token in error: {rendered}");
    assert!(!message.contains("SECRET123"), "token in message: {message}");
    assert!(!message.contains("tiss.example"));
    assert!(message.len() > "Could not connect to the server: ".len());
}

#[tokio::test]
async fn given_timeout_configured_when_server_hangs_then_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/verify"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;
    let client =
        VerifyClient::with_timeout(&server.uri(), Some(Duration::from_millis(200))).unwrap();

    let err = client.verify(SOURCE).await.unwrap_err();

    assert!(matches!(err, VerifyClientError::Transport { .. }));
}

/// **VALUE**: Verifies overlapping requests are all sent; nothing is coalesced.
#[tokio::test]
async fn given_two_concurrent_verifications_when_joined_then_both_requests_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/verify"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;
    let client = VerifyClient::new(&server.uri()).unwrap();

    let (first, second) = join(client.verify(SOURCE), client.verify(SOURCE)).await;

    assert!(first.is_ok());
    assert!(second.is_ok());
}

#[test]
fn given_invalid_base_url_when_client_created_then_url_parse_error() {
    let result = VerifyClient::new("not a url");

    let err = result.err().unwrap();
    assert!(matches!(err, VerifyClientError::UrlParse { .. }));
    assert!(err.user_message().starts_with("Invalid server address: "));
}
