use crate::error::link::LinkError;
use crate::link::encoding::encode_component;
use crate::link::options::OptionSet;

use common::{ErrorLocation, RedactedToken};

use std::fmt;
use std::panic::Location;

use url::Url;

pub const PERSONAL_CALENDAR_PATH: &str = "/personal.ics";

const TOKEN_PARAMETER: &str = "token";
const LOCALE_PARAMETER: &str = "locale";

/// Rendering of a query parameter the source URL did not carry.
const ABSENT_PARAMETER: &str = "null";

/// Origin (`scheme://host[:port]`) the derived link is rooted at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOrigin(String);

impl PageOrigin {
    /// Parse any URL and keep only its origin.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidOrigin`] if `input` is not a URL or has an
    /// opaque origin (e.g. `data:`).
    #[track_caller]
    pub fn parse(input: &str) -> Result<Self, LinkError> {
        let url = Url::parse(input).map_err(|e| LinkError::InvalidOrigin {
            message: format!("{input}: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(LinkError::InvalidOrigin {
                message: format!("{input}: URL has no host origin"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(origin.ascii_serialization()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A source URL the server accepted, with its personalization parameters
/// already extracted.
#[derive(Clone, PartialEq, Eq)]
pub struct VerifiedSource {
    url: String,
    token: Option<RedactedToken>,
    locale: Option<String>,
}

impl VerifiedSource {
    /// Parse a source URL and pull out `token` and `locale`.
    ///
    /// The first occurrence of each parameter wins. Missing parameters are
    /// not an error here.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidSourceUrl`] if `source` is not a URL.
    #[track_caller]
    pub fn parse(source: &str) -> Result<Self, LinkError> {
        let parsed = Url::parse(source).map_err(|e| LinkError::InvalidSourceUrl {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut token = None;
        let mut locale = None;
        for (key, value) in parsed.query_pairs() {
            match key.as_ref() {
                TOKEN_PARAMETER if token.is_none() => {
                    token = Some(RedactedToken::new(value.into_owned()));
                }
                LOCALE_PARAMETER if locale.is_none() => {
                    locale = Some(value.into_owned());
                }
                _ => {}
            }
        }

        Ok(Self {
            url: source.to_string(),
            token,
            locale,
        })
    }

    /// The source URL exactly as it was verified.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn token(&self) -> Option<&RedactedToken> {
        self.token.as_ref()
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Build the personal calendar link for this source.
    pub fn derive(&self, origin: &PageOrigin, options: &OptionSet) -> String {
        let token = self
            .token
            .as_ref()
            .map(RedactedToken::as_str)
            .unwrap_or(ABSENT_PARAMETER);
        let locale = self.locale.as_deref().unwrap_or(ABSENT_PARAMETER);

        let mut derived = format!(
            "{origin}{PERSONAL_CALENDAR_PATH}?{TOKEN_PARAMETER}={}&{LOCALE_PARAMETER}={}",
            encode_component(token),
            encode_component(locale),
        );
        for flag in options.enabled_flags() {
            derived.push('&');
            derived.push_str(flag);
        }
        derived
    }
}

// The raw URL embeds the token, so it is left out.
impl fmt::Debug for VerifiedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifiedSource")
            .field("token", &self.token)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

/// Derive the personal calendar link for a verified source URL.
///
/// # Errors
///
/// Returns [`LinkError::InvalidSourceUrl`] if `source` does not parse. Callers
/// only pass URLs the server already accepted, so this indicates a bug or
/// a server that accepts non-URLs.
#[track_caller]
pub fn derive_url(
    origin: &PageOrigin,
    source: &str,
    options: &OptionSet,
) -> Result<String, LinkError> {
    Ok(VerifiedSource::parse(source)?.derive(origin, options))
}
