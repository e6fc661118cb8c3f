use std::sync::Arc;

use campaign_core::{DashboardConfig, PromoConfig};

use crate::error::AppServicesError;
use crate::overview_loader::OverviewLoader;
use crate::overview_source::{HttpOverviewSource, OverviewSource};

/// Assembles the services the dashboard views need.
#[derive(Clone)]
pub struct AppServices {
    overview_loader: Arc<OverviewLoader>,
    promo: PromoConfig,
}

impl AppServices {
    /// Build services that fetch the overview over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the HTTP client cannot be constructed.
    pub fn new_http(config: &DashboardConfig) -> Result<Self, AppServicesError> {
        let source = HttpOverviewSource::new(config.overview_url.clone())?;
        Ok(Self::with_source(Arc::new(source), config.promo.clone()))
    }

    #[must_use]
    pub fn with_source(source: Arc<dyn OverviewSource>, promo: PromoConfig) -> Self {
        Self {
            overview_loader: Arc::new(OverviewLoader::new(source)),
            promo,
        }
    }

    #[must_use]
    pub fn overview_loader(&self) -> Arc<OverviewLoader> {
        Arc::clone(&self.overview_loader)
    }

    #[must_use]
    pub fn promo(&self) -> PromoConfig {
        self.promo.clone()
    }
}
