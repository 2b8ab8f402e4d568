//! Reqwest-backed core banking card source.
//!
//! The adapter owns transport concerns only. Bodies are returned undecoded.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::domain::ports::{CardSource, CardSourceError};

const CARDS_PATH: &str = "api/v1/cards";

/// Card source issuing `GET {base}/api/v1/cards`.
pub struct CoreBankingHttpSource {
    client: Client,
    endpoint: Url,
}

impl CoreBankingHttpSource {
    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, CoreBankingSourceBuildError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, cards_endpoint(base_url)?))
    }

    /// Use an existing client against a fully resolved endpoint.
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

/// Failures raised while constructing [`CoreBankingHttpSource`].
#[derive(Debug, thiserror::Error)]
pub enum CoreBankingSourceBuildError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("invalid core banking base url: {0}")]
    Url(#[from] url::ParseError),
}

/// Join the cards path onto `base`, treating `base` as a directory.
fn cards_endpoint(base: &Url) -> Result<Url, url::ParseError> {
    if base.path().ends_with('/') {
        base.join(CARDS_PATH)
    } else {
        let mut directory = base.clone();
        directory.set_path(&format!("{}/", base.path()));
        directory.join(CARDS_PATH)
    }
}

#[async_trait]
impl CardSource for CoreBankingHttpSource {
    async fn fetch_cards(&self) -> Result<Vec<u8>, CardSourceError> {
        debug!(endpoint = %self.endpoint, "fetching cards from core banking system");
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

fn map_transport_error(error: reqwest::Error) -> CardSourceError {
    if error.is_timeout() {
        CardSourceError::timeout(error.to_string())
    } else {
        CardSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CardSourceError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            CardSourceError::timeout(format!("status {}", status.as_u16()))
        }
        _ => CardSourceError::status(status.as_u16(), body_preview(body)),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
