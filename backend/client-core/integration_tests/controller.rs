use crate::helpers::{SOURCE, mount_verify, unreachable_origin};

use client_core::clipboard::CopyOutcome;
use client_core::controller::{LinkController, VerificationState};
use client_core::error::clipboard::ClipboardError;
use client_core::link::{GOOGLE, NO_SHORTHAND, OptionSet, PageOrigin};
use client_core::verify_client::VerifyClient;

use wiremock::{MockServer, ResponseTemplate};

#[derive(Default)]
struct MemoryClipboard {
    contents: Option<String>,
}

impl client_core::clipboard::Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

fn controller_for(origin: &str) -> LinkController {
    LinkController::new(PageOrigin::parse(origin).unwrap(), OptionSet::builtin())
}

/// **VALUE**: End-to-end: paste with label, verify over HTTP, toggle, copy.
///
/// **WHY THIS MATTERS**: This is the entire user journey on the link page.
#[tokio::test]
async fn given_pasted_url_with_label_when_verified_over_http_then_link_copied() {
    let server = MockServer::start().await;
    mount_verify(&server, SOURCE, ResponseTemplate::new(200).set_body_string("Ok")).await;
    let client = VerifyClient::new(&server.uri()).unwrap();
    let mut controller = controller_for(&server.uri());
    let mut clipboard = MemoryClipboard::default();

    controller.edit(format!("{SOURCE}   Download"));
    controller.verify(&client).await;
    controller.set_option(NO_SHORTHAND.key, true).unwrap();
    controller.set_option(GOOGLE.key, true).unwrap();
    let outcome = controller.copy(&mut clipboard);

    let expected = format!(
        "{}/personal.ics?token=abc123&locale=de&google&noshorthand",
        server.uri()
    );
    assert_eq!(outcome, CopyOutcome::Copied);
    assert_eq!(clipboard.contents.as_deref(), Some(expected.as_str()));
    assert_eq!(controller.view().derived_url, Some(expected));
}

#[tokio::test]
async fn given_server_rejects_token_when_verified_then_error_displayed_and_copy_skipped() {
    let server = MockServer::start().await;
    mount_verify(
        &server,
        SOURCE,
        ResponseTemplate::new(404).set_body_string("token expired"),
    )
    .await;
    let client = VerifyClient::new(&server.uri()).unwrap();
    let mut controller = controller_for(&server.uri());
    let mut clipboard = MemoryClipboard::default();

    controller.edit(SOURCE);
    controller.verify(&client).await;

    let view = controller.view();
    assert!(view.error_text.unwrap().contains("token expired"));
    assert_eq!(controller.copy(&mut clipboard), CopyOutcome::Skipped);
    assert_eq!(clipboard.contents, None);
}

#[tokio::test]
async fn given_empty_500_when_verified_then_status_phrase_displayed() {
    let server = MockServer::start().await;
    mount_verify(&server, SOURCE, ResponseTemplate::new(500)).await;
    let client = VerifyClient::new(&server.uri()).unwrap();
    let mut controller = controller_for(&server.uri());

    controller.edit(SOURCE);
    controller.verify(&client).await;

    assert_eq!(
        controller.view().error_text.as_deref(),
        Some("🔥 Server returned: Internal Server Error")
    );
}

#[tokio::test]
async fn given_server_down_when_verified_then_connection_failure_displayed() {
    let origin = unreachable_origin();
    let client = VerifyClient::new(&origin).unwrap();
    let mut controller = controller_for(&origin);

    controller.edit(SOURCE);
    controller.verify(&client).await;

    let text = controller.view().error_text.unwrap();
    assert!(text.starts_with("🔥 Could not connect to the server: "));
    assert!(!text.contains("abc123"), "token shown to user: {text}");
}

#[tokio::test]
async fn given_verified_link_when_input_edited_then_output_disabled_until_reverified() {
    let server = MockServer::start().await;
    mount_verify(&server, SOURCE, ResponseTemplate::new(200)).await;
    let client = VerifyClient::new(&server.uri()).unwrap();
    let mut controller = controller_for(&server.uri());
    controller.edit(SOURCE);
    controller.verify(&client).await;
    assert!(controller.state().is_verified());

    controller.edit(SOURCE);

    assert_eq!(controller.state(), &VerificationState::Disabled);
    assert!(controller.view().placeholder_visible);
}
