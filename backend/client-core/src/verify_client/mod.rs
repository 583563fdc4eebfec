use crate::error::verify_client::VerifyClientError;
use crate::link::encode_component;

use common::{ErrorLocation, HttpStatusCode};

use std::future::Future;
use std::panic::Location;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::Client;
use url::Url;

const VERIFY_ENDPOINT: &str = "/verify";
const SOURCE_URL_PARAMETER: &str = "url";

/// Something that can check whether a source URL is acceptable.
///
/// `Ok(())` means verified; every failure is described by the error.
pub trait Verifier {
    fn verify(&self, source: &str) -> impl Future<Output = Result<(), VerifyClientError>>;
}

/// HTTP client for the server's `/verify` endpoint.
#[derive(Clone)]
pub struct VerifyClient {
    base_url: Url,
    client: Client,
}

impl VerifyClient {
    /// Client without a request timeout; a hung server leaves the attempt pending.
    pub fn new(base_url_str: &str) -> Result<Self, VerifyClientError> {
        Self::with_timeout(base_url_str, None)
    }

    pub fn with_timeout(
        base_url_str: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, VerifyClientError> {
        let base_url = Url::parse(base_url_str)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /verify?url=<source>` on the client's origin.
    pub fn verify_url(&self, source: &str) -> Result<Url, VerifyClientError> {
        let mut url = self.base_url.join(VERIFY_ENDPOINT)?;
        url.set_query(Some(&format!(
            "{SOURCE_URL_PARAMETER}={}",
            encode_component(source)
        )));
        Ok(url)
    }
}

impl Verifier for VerifyClient {
    async fn verify(&self, source: &str) -> Result<(), VerifyClientError> {
        let url = self.verify_url(source)?;
        debug!("Sending verification request ({} chars)", source.len());

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let status_code = HttpStatusCode(status.as_u16());

        if status_code.is_success() {
            info!("Source URL verified (HTTP {status_code})");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let side = if status_code.is_client_error() {
            "rejected by server"
        } else if status_code.is_server_error() {
            "server fault"
        } else {
            "unexpected status"
        };
        warn!(
            "Verification failed, {side}: HTTP {status_code} ({} byte body)",
            body.len()
        );

        if body.trim().is_empty() {
            Err(VerifyClientError::Status {
                status: status_code,
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        } else {
            Err(VerifyClientError::Rejected {
                status: status_code,
                message: body,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
