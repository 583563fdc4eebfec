use crate::link::VerifiedSource;

use std::fmt;

/// Where the link page currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VerificationState {
    /// Nothing verified, or the input changed since the last verification.
    #[default]
    Disabled,
    Verified(VerifiedSource),
    /// Last attempt failed; holds the user-facing message.
    Error(String),
}

impl VerificationState {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationState::Verified(_))
    }

    pub fn verified_source(&self) -> Option<&VerifiedSource> {
        match self {
            VerificationState::Verified(source) => Some(source),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            VerificationState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// A started verification and the normalized source it checks.
///
/// Tickets are not cancelled or deduplicated; whichever one completes last
/// decides the state.
#[derive(Clone, PartialEq, Eq)]
pub struct VerifyTicket {
    pub(crate) id: u64,
    pub(crate) source: String,
}

impl VerifyTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for VerifyTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyTicket")
            .field("id", &self.id)
            .field("source_len", &self.source.len())
            .finish()
    }
}
