use std::sync::Arc;

use campaign_core::PromoConfig;
use services::OverviewLoader;

use crate::platform::LinkOpenerRef;

/// What the composition root hands to the views.
pub trait UiApp: Send + Sync {
    fn overview_loader(&self) -> Arc<OverviewLoader>;
    fn promo(&self) -> PromoConfig;
    fn link_opener(&self) -> LinkOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    overview_loader: Arc<OverviewLoader>,
    promo: PromoConfig,
    link_opener: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            overview_loader: app.overview_loader(),
            promo: app.promo(),
            link_opener: app.link_opener(),
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

    #[must_use]
    pub fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
