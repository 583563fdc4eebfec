//! Link page controller.
//!
//! Owns the input text, the option switches and the verification state.
//! All mutation goes through the event methods below; presentation is
//! always recomputed from scratch by [`view::render`].
//!
//! # Concurrency
//!
//! Verification is split into [`LinkController::begin_verify`] and
//! [`LinkController::complete_verify`] so a caller can have several
//! requests in flight. Nothing is cancelled: the last attempt to complete
//! decides the state, even if it was started first.

pub mod state;
pub mod view;

pub use state::{VerificationState, VerifyTicket};
pub use view::{Preview, View, render};

use crate::clipboard::{Clipboard, CopyOutcome};
use crate::error::link::LinkError;
use crate::error::verify_client::VerifyClientError;
use crate::link::{OptionSet, PageOrigin, VerifiedSource, normalize_source_input};
use crate::verify_client::Verifier;

use log::{debug, info, warn};

const INVALID_SOURCE_LABEL: &str = "Invalid calendar URL: ";

pub struct LinkController {
    origin: PageOrigin,
    input: String,
    options: OptionSet,
    state: VerificationState,
    copied: bool,
    last_ticket: u64,
}

impl LinkController {
    pub fn new(origin: PageOrigin, options: OptionSet) -> Self {
        Self {
            origin,
            input: String::new(),
            options,
            state: VerificationState::Disabled,
            copied: false,
            last_ticket: 0,
        }
    }

    pub fn origin(&self) -> &PageOrigin {
        &self.origin
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn state(&self) -> &VerificationState {
        &self.state
    }

    /// The source-URL field changed.
    ///
    /// Always drops back to `Disabled`, even when the text is identical to
    /// what was verified before.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.transition(VerificationState::Disabled);
    }

    /// Normalize the input and start a verification for it.
    ///
    /// The normalized text replaces the field content. State is left alone
    /// until [`complete_verify`](Self::complete_verify) is called.
    pub fn begin_verify(&mut self) -> VerifyTicket {
        self.input = normalize_source_input(&self.input);
        self.last_ticket += 1;

        let ticket = VerifyTicket {
            id: self.last_ticket,
            source: self.input.clone(),
        };
        debug!("Verification #{} started", ticket.id);
        ticket
    }

    /// Apply the result of a verification request.
    pub fn complete_verify(
        &mut self,
        ticket: VerifyTicket,
        outcome: Result<(), VerifyClientError>,
    ) {
        if ticket.id != self.last_ticket {
            debug!(
                "Verification #{} resolved after newer #{}, applying anyway",
                ticket.id, self.last_ticket
            );
        }

        let next = match outcome {
            Ok(()) => match VerifiedSource::parse(&ticket.source) {
                Ok(source) => {
                    info!("Verification #{} succeeded", ticket.id);
                    VerificationState::Verified(source)
                }
                Err(error) => {
                    warn!("Server accepted an unparseable source URL: {error}");
                    VerificationState::Error(format!("{INVALID_SOURCE_LABEL}{}", error.message()))
                }
            },
            Err(error) => {
                warn!("Verification #{} failed: {error}", ticket.id);
                VerificationState::Error(error.user_message())
            }
        };

        self.transition(next);
    }

    /// Verify the current input with `verifier` and apply the result.
    pub async fn verify<V: Verifier>(&mut self, verifier: &V) {
        let ticket = self.begin_verify();
        let outcome = verifier.verify(ticket.source()).await;
        self.complete_verify(ticket, outcome);
    }

    /// Flip an option switch. The state does not change; a displayed link
    /// is recomputed on the next render.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::UnknownOption`] if `key` is not declared.
    #[track_caller]
    pub fn set_option(&mut self, key: &str, enabled: bool) -> Result<(), LinkError> {
        self.options.set(key, enabled)?;
        self.copied = false;
        debug!("Option {key} set to {enabled}");
        Ok(())
    }

    /// The link currently on display, if any.
    pub fn derived_url(&self) -> Option<String> {
        self.state
            .verified_source()
            .map(|source| source.derive(&self.origin, &self.options))
    }

    pub fn view(&self) -> View {
        render(&self.state, &self.options, &self.origin, self.copied)
    }

    /// Copy the displayed link.
    ///
    /// Does nothing when no link is displayed. Clipboard failures are logged
    /// and reported; they never change the verification state.
    pub fn copy<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C) -> CopyOutcome {
        let Some(url) = self.derived_url() else {
            debug!("Copy ignored: no derived URL on display");
            return CopyOutcome::Skipped;
        };

        match clipboard.write_text(&url) {
            Ok(()) => {
                self.copied = true;
                CopyOutcome::Copied
            }
            Err(error) => {
                warn!("Copy failed: {error}");
                CopyOutcome::Failed(error.to_string())
            }
        }
    }

    fn transition(&mut self, next: VerificationState) {
        debug!("State {:?} -> {:?}", self.state, next);
        self.state = next;
        self.copied = false;
    }
}
