//! Driven port for the core banking system's card list.
//!
//! The source hands back the raw response body. Decoding happens in the
//! domain so cached and freshly fetched payloads share one parser.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while calling the core banking system.
    pub enum CardSourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "core banking transport failed: {message}",
        /// The request exceeded the configured timeout.
        Timeout { message: String } =>
            "core banking request timed out: {message}",
        /// The upstream answered with a non-success status.
        Status { status: u16, message: String } =>
            "core banking returned status {status}: {message}",
    }
}

/// Port for fetching the authoritative card list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Fetch the raw card list body.
    async fn fetch_cards(&self) -> Result<Vec<u8>, CardSourceError>;
}
