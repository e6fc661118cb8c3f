use async_trait::async_trait;
use campaign_core::model::CampaignOverview;
use reqwest::Client;
use reqwest::header::ACCEPT;
use url::Url;

use crate::error::{AppServicesError, FetchError};

/// Decoded overview body. `None` when the server answers with a JSON `null`.
pub type OverviewPayload = Option<CampaignOverview>;

/// Supplies campaign overview snapshots.
#[async_trait]
pub trait OverviewSource: Send + Sync {
    /// Performs exactly one request for the current snapshot.
    async fn fetch_overview(&self) -> Result<OverviewPayload, FetchError>;
}

/// `GET`s the overview endpoint over HTTP.
#[derive(Clone, Debug)]
pub struct HttpOverviewSource {
    client: Client,
    endpoint: Url,
}

impl HttpOverviewSource {
    /// # Errors
    ///
    /// Returns `AppServicesError::HttpClient` if the TLS backend cannot be initialised.
    pub fn new(endpoint: Url) -> Result<Self, AppServicesError> {
        let client = Client::builder()
            .user_agent(concat!("donor-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AppServicesError::HttpClient)?;
        Ok(Self::with_client(client, endpoint))
    }

    #[must_use]
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl OverviewSource for HttpOverviewSource {
    async fn fetch_overview(&self) -> Result<OverviewPayload, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "requesting campaign overview");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // Read the body first so transport and decode failures stay distinct.
        let body = response.bytes().await?;
        let payload = serde_json::from_slice(&body)?;
        Ok(payload)
    }
}
