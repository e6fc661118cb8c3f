use std::sync::Arc;

use campaign_core::LoadState;
use tokio_util::sync::CancellationToken;

use crate::overview_source::{OverviewPayload, OverviewSource};

pub type OverviewState = LoadState<OverviewPayload>;

/// Runs the one-shot overview fetch for a mounted progress view.
///
/// The caller owns the cancellation token and cancels it when the view goes
/// away. A cancelled activation yields `None` and must not be committed.
#[derive(Clone)]
pub struct OverviewLoader {
    source: Arc<dyn OverviewSource>,
}

impl OverviewLoader {
    #[must_use]
    pub fn new(source: Arc<dyn OverviewSource>) -> Self {
        Self { source }
    }

    /// Issues one request and maps it onto a terminal [`LoadState`].
    ///
    /// Returns `None` if `cancel` fires before or while the request is in
    /// flight, or before the result is handed back.
    pub async fn activate(&self, cancel: &CancellationToken) -> Option<OverviewState> {
        let result = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!("overview fetch cancelled before completion");
                return None;
            }
            result = self.source.fetch_overview() => result,
        };

        if cancel.is_cancelled() {
            tracing::debug!("overview fetch completed after cancellation; discarding");
            return None;
        }

        match &result {
            Ok(Some(overview)) => tracing::info!(
                campaign = %overview.id,
                donors = overview.donors.len(),
                "campaign overview loaded"
            ),
            Ok(None) => tracing::info!("campaign overview endpoint returned no campaign"),
            Err(err) => tracing::warn!(error = %err, "campaign overview fetch failed"),
        }

        Some(LoadState::Loading.resolve(result))
    }
}
