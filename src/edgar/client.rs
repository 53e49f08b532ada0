use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use super::filing::RawFilingsPayload;

// Hardcoded values
pub const SUBMISSIONS_URL: &str = "https://data.sec.gov/submissions/CIK0001067983.json";
pub const EDGAR_HOST: &str = "data.sec.gov";

/// SEC fair-access policy requires a descriptive User-Agent with a contact
/// address on every request.
pub const USER_AGENT: &str = "Buffett Portfolio Monitor contact@youremail.com";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("SEC API returned {0}")]
    BadStatus(StatusCode),
    #[error("request to SEC API failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("failed to decode SEC API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid submissions URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Seam between the request handler and the outbound EDGAR fetch, so tests
/// can substitute a stub and count invocations.
#[async_trait]
pub trait SubmissionsFetcher: Send + Sync {
    async fn fetch_raw_payload(&self) -> Result<RawFilingsPayload, UpstreamError>;
}

/// Production fetcher: one GET against the fixed submissions resource,
/// single attempt, no retries.
#[derive(Debug, Clone)]
pub struct EdgarClient {
    client: Client,
}

impl EdgarClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for EdgarClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionsFetcher for EdgarClient {
    async fn fetch_raw_payload(&self) -> Result<RawFilingsPayload, UpstreamError> {
        let url = Url::parse(SUBMISSIONS_URL)?;
        log::debug!("Fetching submissions from {}", url);

        let response = self
            .client
            .get(url.as_str())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT_ENCODING, "gzip, deflate")
            .header(reqwest::header::HOST, EDGAR_HOST)
            .send()
            .await?;

        let status = response.status();
        log::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(UpstreamError::BadStatus(status));
        }

        // Read the body as text first so a malformed document surfaces as a
        // decode error rather than a transport error.
        let body = response.text().await?;
        log::debug!("Received {} bytes", body.len());

        let payload: RawFilingsPayload = serde_json::from_str(&body)?;
        Ok(payload)
    }
}
