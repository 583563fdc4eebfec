// Test doubles for the verifier and clipboard seams.

use crate::clipboard::Clipboard;
use crate::error::clipboard::ClipboardError;
use crate::error::verify_client::VerifyClientError;
use crate::verify_client::Verifier;

use common::{ErrorLocation, HttpStatusCode};

use std::cell::RefCell;
use std::panic::Location;

pub(crate) struct FakeVerifier<F>
where
    F: Fn(&str) -> Result<(), VerifyClientError>,
{
    respond: F,
    pub(crate) requests: RefCell<Vec<String>>,
}

impl<F> FakeVerifier<F>
where
    F: Fn(&str) -> Result<(), VerifyClientError>,
{
    pub(crate) fn new(respond: F) -> Self {
        Self {
            respond,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl<F> Verifier for FakeVerifier<F>
where
    F: Fn(&str) -> Result<(), VerifyClientError>,
{
    async fn verify(&self, source: &str) -> Result<(), VerifyClientError> {
        self.requests.borrow_mut().push(source.to_string());
        (self.respond)(source)
    }
}

pub(crate) fn accept_all() -> FakeVerifier<impl Fn(&str) -> Result<(), VerifyClientError>> {
    FakeVerifier::new(|_| Ok(()))
}

pub(crate) fn rejected(status: u16, message: &str) -> VerifyClientError {
    VerifyClientError::Rejected {
        status: HttpStatusCode(status),
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[derive(Default)]
pub(crate) struct RecordingClipboard {
    pub(crate) writes: Vec<String>,
    pub(crate) fail: bool,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write {
                message: "clipboard unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
