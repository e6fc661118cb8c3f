//! Shared error types for the services crate.

use thiserror::Error;

/// Why a campaign overview could not be fetched.
///
/// The `Display` text is what the dashboard shows after `"Error: "`, so each
/// variant renders the underlying message without extra decoration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The request never produced a response (connect, TLS, body read).
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with a non-2xx status. The body is ignored.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The body was not a valid campaign overview document.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors emitted while bootstrapping dashboard services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
